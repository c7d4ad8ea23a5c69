//! HTTP route handlers and shared response helpers.

use actix_web::http::header;
use actix_web::{HttpResponse, http::header::ContentType};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::store::{Cart, Wishlist};

pub mod birds;
pub mod cart;
pub mod manager;
pub mod nests;
pub mod ratings;

/// Maps a flash level to the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a template, mapping render failures to a bare 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: alerts, header badges, active nav entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    cart: &Cart,
    wishlist: &Wishlist,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("cart_count", &cart.len());
    context.insert("wishlist_count", &wishlist.len());
    context.insert("current_page", current_page);
    context
}

/// Renders the shared failed-list block with a retry link that re-issues the
/// identical request.
pub fn render_list_failed(tera: &Tera, mut context: Context, retry_url: &str) -> HttpResponse {
    context.insert("retry_url", retry_url);
    render_template(tera, "shared/list_failed.html", &context)
}
