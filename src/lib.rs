use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::models::config::ServerConfig;
use crate::routes::birds::{show_birds, show_index};
use crate::routes::cart::{
    add_to_cart, checkout, remove_from_cart, show_cart, show_wishlist, toggle_wishlist,
};
use crate::routes::manager::{
    add_nest, add_specie, delete_specie, show_nests as show_manager_nests, show_species,
};
use crate::routes::nests::show_nests;
use crate::routes::ratings::show_ratings;

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod list;
pub mod models;
pub mod pagination;
pub mod query;
pub mod routes;
pub mod services;
pub mod store;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Shared HTTP client for the marketplace backend.
    let api = BirdFarmApi::new(&server_config.backend_url)
        .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;

    // Keys and stores for the cookie session (cart, wishlist) and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_birds)
            .service(show_nests)
            .service(show_ratings)
            .service(show_cart)
            .service(add_to_cart)
            .service(remove_from_cart)
            .service(checkout)
            .service(show_wishlist)
            .service(toggle_wishlist)
            .service(show_species)
            .service(add_specie)
            .service(delete_specie)
            .service(show_manager_nests)
            .service(add_nest)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
