use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::query::ListQuery;
use crate::routes::{base_context, render_list_failed, render_template};
use crate::services::ratings as rating_service;
use crate::store;

#[get("/ratings")]
pub async fn show_ratings(
    req: HttpRequest,
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::decode(req.query_string());
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "ratings");

    match rating_service::load_rating_list(api.get_ref(), query.clone()).await {
        Ok(data) => {
            context.insert("ratings", &data.ratings);
            context.insert("average", &data.average);
            context.insert("filters", &data.filters);
            context.insert("query", &data.query);
            render_template(&tera, "ratings/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load ratings: {err}");
            render_list_failed(&tera, context, &query.for_ratings().url_for("/ratings"))
        }
    }
}
