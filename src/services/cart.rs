use validator::Validate;

use crate::api::{BirdApi, NestApi, OrderApi, VoucherApi};
use crate::domain::bird::Bird;
use crate::domain::nest::Nest;
use crate::domain::order::{NewOrder, OrderConfirmation};
use crate::domain::types::PhoneNumber;
use crate::dto::cart::{CartPageData, ProductLine, WishlistPageData};
use crate::forms::cart::CheckoutForm;
use crate::services::{ServiceError, ServiceResult};
use crate::store::{Cart, Wishlist};

fn bird_line(bird: &Bird, quantity: u32) -> ProductLine {
    ProductLine {
        id: bird.id.clone(),
        name: bird.name.clone(),
        collection: "bird",
        image_url: bird.image_urls.first().cloned(),
        price: bird.price,
        quantity,
        line_total: bird.price.map(|p| p * i64::from(quantity)),
    }
}

fn nest_line(nest: &Nest, quantity: u32) -> ProductLine {
    ProductLine {
        id: nest.id.clone(),
        name: nest.name.clone(),
        collection: "nest",
        image_url: nest.image_urls.first().cloned(),
        price: nest.price,
        quantity,
        line_total: nest.price.map(|p| p * i64::from(quantity)),
    }
}

/// Resolves the stored product ids against both collections. An id the
/// backend no longer knows simply yields no line.
async fn resolve_lines<A>(api: &A, ids: &[String], quantity_of: impl Fn(&str) -> u32)
-> ServiceResult<Vec<ProductLine>>
where
    A: BirdApi + NestApi,
{
    let birds = api.birds_by_ids(ids).await?;
    let nests = api.nests_by_ids(ids).await?;

    let mut lines: Vec<ProductLine> = birds
        .iter()
        .map(|b| bird_line(b, quantity_of(&b.id)))
        .chain(nests.iter().map(|n| nest_line(n, quantity_of(&n.id))))
        .collect();
    lines.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(lines)
}

/// Loads the cart page: resolved lines, subtotal, and available vouchers.
pub async fn load_cart_page<A>(api: &A, cart: &Cart) -> ServiceResult<CartPageData>
where
    A: BirdApi + NestApi + VoucherApi,
{
    let lines = resolve_lines(api, &cart.product_ids(), |id| cart.quantity(id)).await?;
    let subtotal = lines.iter().filter_map(|l| l.line_total).sum();

    let vouchers = match api.list_vouchers().await {
        Ok(vouchers) => vouchers,
        Err(err) => {
            log::error!("Failed to load vouchers: {err}");
            Vec::new()
        }
    };

    Ok(CartPageData {
        lines,
        subtotal,
        vouchers,
    })
}

/// Loads the wishlist page with each flagged product resolved to a card.
pub async fn load_wishlist_page<A>(api: &A, wishlist: &Wishlist) -> ServiceResult<WishlistPageData>
where
    A: BirdApi + NestApi,
{
    let products = resolve_lines(api, &wishlist.product_ids(), |_| 1).await?;
    Ok(WishlistPageData { products })
}

/// Validates the checkout form, re-resolves the cart against the backend and
/// places the order. Returns the confirmation payload on success.
pub async fn checkout<A>(
    api: &A,
    cart: &Cart,
    form: CheckoutForm,
) -> ServiceResult<OrderConfirmation>
where
    A: BirdApi + NestApi + OrderApi,
{
    if cart.is_empty() {
        return Err(ServiceError::Form("the cart is empty".to_string()));
    }
    if let Err(err) = form.validate() {
        log::error!("Checkout form failed validation: {err}");
        return Err(ServiceError::Form("please fill in all delivery fields".to_string()));
    }
    let phone = PhoneNumber::new(&form.phone)
        .map_err(|_| ServiceError::Form("please provide a valid phone number".to_string()))?;

    let ids = cart.product_ids();
    let birds = api.birds_by_ids(&ids).await?;
    let nests = api.nests_by_ids(&ids).await?;
    if birds.is_empty() && nests.is_empty() {
        return Err(ServiceError::Form(
            "none of the cart items are available any more".to_string(),
        ));
    }

    let order = NewOrder {
        receiver: form.receiver.trim().to_string(),
        phone: phone.to_string(),
        address: form.address.trim().to_string(),
        birds: birds.into_iter().map(|b| b.id).collect(),
        nests: nests.into_iter().map(|n| n.id).collect(),
        voucher: form
            .voucher
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
    };

    Ok(api.create_order(&order).await?)
}
