use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::query::ListQuery;
use crate::routes::{base_context, render_list_failed, render_template};
use crate::services::nests as nest_service;
use crate::store;

#[get("/nests")]
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
    let mut context = base_context(&flash_messages, &cart, &wishlist, "nests");

    match nest_service::load_nest_list(api.get_ref(), query.clone()).await {
        Ok(data) => {
            context.insert("nests", &data.nests);
            context.insert("species", &data.species);
            context.insert("query", &data.query);
            render_template(&tera, "nests/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load nest list: {err}");
            render_list_failed(&tera, context, &query.url_for("/nests"))
        }
    }
}
