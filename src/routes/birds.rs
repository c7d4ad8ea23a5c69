use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::query::ListQuery;
use crate::routes::{base_context, redirect, render_list_failed, render_template};
use crate::services::birds as bird_service;
use crate::store;

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/birds")
}

#[get("/birds")]
pub async fn show_birds(
    req: HttpRequest,
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::decode(req.query_string());
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "birds");

    match bird_service::load_bird_list(api.get_ref(), query.clone()).await {
        Ok(data) => {
            context.insert("birds", &data.birds);
            context.insert("species", &data.species);
            context.insert("query", &data.query);
            render_template(&tera, "birds/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load bird list: {err}");
            render_list_failed(&tera, context, &query.url_for("/birds"))
        }
    }
}
