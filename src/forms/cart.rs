use serde::Deserialize;
use validator::Validate;

/// Add-to-cart / remove-from-cart form posted from product cards.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: String,
    /// Defaults to one when absent.
    pub quantity: Option<u32>,
    /// Where to send the visitor afterwards; falls back to the cart page.
    pub next: Option<String>,
}

impl CartItemForm {
    pub fn next_url(&self) -> &str {
        self.next.as_deref().unwrap_or("/cart")
    }
}

/// Wishlist toggle form: `wishlisted` is the desired new state.
#[derive(Debug, Deserialize)]
pub struct WishlistForm {
    pub product_id: String,
    pub wishlisted: bool,
    pub next: Option<String>,
}

impl WishlistForm {
    pub fn next_url(&self) -> &str {
        self.next.as_deref().unwrap_or("/wishlist")
    }
}

/// Checkout details posted from the cart page.
///
/// The phone number gets the stricter `PhoneNumber` parse in the service;
/// the derive only catches fields left blank.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1, message = "receiver is required"))]
    pub receiver: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub voucher: Option<String>,
}
