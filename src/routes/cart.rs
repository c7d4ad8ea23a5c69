use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::BirdFarmApi;
use crate::domain::types::{ProductId, Quantity};
use crate::forms::cart::{CartItemForm, CheckoutForm, WishlistForm};
use crate::routes::{base_context, redirect, render_list_failed, render_template};
use crate::services::ServiceError;
use crate::services::cart as cart_service;
use crate::store;

#[get("/cart")]
pub async fn show_cart(
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "cart");

    match cart_service::load_cart_page(api.get_ref(), &cart).await {
        Ok(data) => {
            context.insert("lines", &data.lines);
            context.insert("subtotal", &data.subtotal);
            context.insert("vouchers", &data.vouchers);
            render_template(&tera, "cart/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load cart: {err}");
            render_list_failed(&tera, context, "/cart")
        }
    }
}

#[post("/cart/add")]
pub async fn add_to_cart(
    session: Session,
    web::Form(form): web::Form<CartItemForm>,
) -> impl Responder {
    let Ok(id) = ProductId::new(form.product_id.as_str()) else {
        FlashMessage::error("Unknown product.").send();
        return redirect(form.next_url());
    };
    let quantity = form
        .quantity
        .and_then(|q| Quantity::new(q).ok())
        .unwrap_or(Quantity::one());

    let cart = store::load_cart(&session).add_item(&id, quantity);
    store::save_cart(&session, &cart);

    FlashMessage::success("Added to cart.").send();
    redirect(form.next_url())
}

#[post("/cart/remove")]
pub async fn remove_from_cart(
    session: Session,
    web::Form(form): web::Form<CartItemForm>,
) -> impl Responder {
    let Ok(id) = ProductId::new(form.product_id.as_str()) else {
        FlashMessage::error("Unknown product.").send();
        return redirect(form.next_url());
    };

    let cart = store::load_cart(&session).remove_item(&id);
    store::save_cart(&session, &cart);

    FlashMessage::success("Removed from cart.").send();
    redirect(form.next_url())
}

#[post("/cart/checkout")]
pub async fn checkout(
    api: web::Data<BirdFarmApi>,
    session: Session,
    web::Form(form): web::Form<CheckoutForm>,
) -> impl Responder {
    let cart = store::load_cart(&session);

    match cart_service::checkout(api.get_ref(), &cart, form).await {
        Ok(confirmation) => {
            store::save_cart(&session, &store::Cart::default());
            FlashMessage::success(format!("Order {} placed.", confirmation.id)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to place order: {err}");
            FlashMessage::error("Could not place the order, please try again.").send();
        }
    }
    redirect("/cart")
}

#[get("/wishlist")]
pub async fn show_wishlist(
    api: web::Data<BirdFarmApi>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = store::load_cart(&session);
    let wishlist = store::load_wishlist(&session);
    let mut context = base_context(&flash_messages, &cart, &wishlist, "wishlist");

    match cart_service::load_wishlist_page(api.get_ref(), &wishlist).await {
        Ok(data) => {
            context.insert("products", &data.products);
            render_template(&tera, "wishlist/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load wishlist: {err}");
            render_list_failed(&tera, context, "/wishlist")
        }
    }
}

#[post("/wishlist/toggle")]
pub async fn toggle_wishlist(
    session: Session,
    web::Form(form): web::Form<WishlistForm>,
) -> impl Responder {
    let Ok(id) = ProductId::new(form.product_id.as_str()) else {
        FlashMessage::error("Unknown product.").send();
        return redirect(form.next_url());
    };

    let wishlist = store::load_wishlist(&session).set_wishlisted(&id, form.wishlisted);
    store::save_wishlist(&session, &wishlist);

    let note = if form.wishlisted {
        "Added to wishlist."
    } else {
        "Removed from wishlist."
    };
    FlashMessage::success(note).send();
    redirect(form.next_url())
}
