use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::forms::manager::{AddNestForm, AddSpecieForm};
use crate::query::ListQuery;
use crate::routes::{base_context, redirect, render_list_failed, render_template};
use crate::services::ServiceError;
use crate::services::manager as manager_service;
use crate::store;

#[get("/manager/species")]
pub async fn show_species(
    req: HttpRequest,
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::decode(req.query_string());
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "manager_species");

    match manager_service::load_specie_list(api.get_ref(), query.clone()).await {
        Ok(data) => {
            context.insert("species", &data.species);
            context.insert("query", &data.query);
            render_template(&tera, "manager/species.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load species list: {err}");
            render_list_failed(&tera, context, &query.url_for("/manager/species"))
        }
    }
}

#[post("/manager/species/add")]
pub async fn add_specie(
    api: web::Data<BirdFarmApi>,
    web::Form(form): web::Form<AddSpecieForm>,
) -> impl Responder {
    match manager_service::add_specie(api.get_ref(), form).await {
        Ok(specie) => {
            FlashMessage::success(format!("Species \"{}\" created.", specie.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to create species: {err}");
            FlashMessage::error("Could not create the species.").send();
        }
    }
    redirect("/manager/species")
}

#[post("/manager/species/{id}/delete")]
pub async fn delete_specie(
    id: web::Path<String>,
    api: web::Data<BirdFarmApi>,
) -> impl Responder {
    match manager_service::remove_specie(api.get_ref(), &id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Species deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete species: {err}");
            FlashMessage::error("Could not delete the species.").send();
        }
    }
    redirect("/manager/species")
}

#[get("/manager/nests")]
pub async fn show_nests(
    req: HttpRequest,
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::decode(req.query_string());
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "manager_nests");

    match manager_service::load_nest_table(api.get_ref(), query.clone()).await {
        Ok(data) => {
            context.insert("nests", &data.nests);
            context.insert("query", &data.query);
            render_template(&tera, "manager/nests.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load nest table: {err}");
            render_list_failed(&tera, context, &query.url_for("/manager/nests"))
        }
    }
}

#[post("/manager/nests/add")]
pub async fn add_nest(
    api: web::Data<BirdFarmApi>,
    web::Form(form): web::Form<AddNestForm>,
) -> impl Responder {
    match manager_service::add_nest(api.get_ref(), form).await {
        Ok(nest) => {
            FlashMessage::success(format!("Nest \"{}\" created.", nest.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to create nest: {err}");
            FlashMessage::error("Could not create the nest.").send();
        }
    }
    redirect("/manager/nests")
}
