use serde::Serialize;

use crate::domain::voucher::Voucher;

/// A resolved product shown in the cart or wishlist, normalized across the
/// bird and nest collections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductLine {
    pub id: String,
    pub name: String,
    /// `bird` or `nest`, used to build the detail link.
    pub collection: &'static str,
    pub image_url: Option<String>,
    pub price: Option<i64>,
    pub quantity: u32,
    pub line_total: Option<i64>,
}

/// Data required to render the cart page.
pub struct CartPageData {
    pub lines: Vec<ProductLine>,
    pub subtotal: i64,
    pub vouchers: Vec<Voucher>,
}

/// Data required to render the wishlist page.
pub struct WishlistPageData {
    pub products: Vec<ProductLine>,
}
