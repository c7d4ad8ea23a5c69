//! Client-persisted cart and wishlist store.
//!
//! Both structures live in the cookie session under fixed keys as plain JSON
//! maps keyed by product id. There is no schema version: changing the wire
//! shape breaks existing cookies. Updates follow an immutable contract — the
//! mutating methods return a new value and the caller persists it in one
//! write, never read-modify-write against the session piecemeal.

use std::collections::BTreeMap;

use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, Quantity};

const CART_KEY: &str = "cart";
const WISHLIST_KEY: &str = "wishlist";

/// Product id to quantity mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Returns a cart with `quantity` added to the product's line, creating
    /// the line when absent. The total per line is capped at
    /// [`Quantity::MAX`].
    pub fn add_item(&self, id: &ProductId, quantity: Quantity) -> Cart {
        let mut items = self.items.clone();
        let line = items.entry(id.as_str().to_string()).or_insert(0);
        *line = (*line + quantity.get()).min(Quantity::MAX);
        Cart { items }
    }

    /// Returns a cart without the product's line.
    pub fn remove_item(&self, id: &ProductId) -> Cart {
        let mut items = self.items.clone();
        items.remove(id.as_str());
        Cart { items }
    }

    /// Returns a cart with the product's line set to exactly `quantity`.
    pub fn set_quantity(&self, id: &ProductId, quantity: Quantity) -> Cart {
        let mut items = self.items.clone();
        items.insert(id.as_str().to_string(), quantity.get());
        Cart { items }
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Number of lines in the cart, shown as the header badge.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Product ids in stable order, for `get-by-ids` resolution.
    pub fn product_ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

/// Product id to wishlisted-flag mapping. Cleared flags are dropped from the
/// map rather than stored as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: BTreeMap<String, bool>,
}

impl Wishlist {
    /// Returns a wishlist with the product's flag set or cleared.
    pub fn set_wishlisted(&self, id: &ProductId, wishlisted: bool) -> Wishlist {
        let mut items = self.items.clone();
        if wishlisted {
            items.insert(id.as_str().to_string(), true);
        } else {
            items.remove(id.as_str());
        }
        Wishlist { items }
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.items.get(id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

/// Loads the cart from the session, falling back to an empty cart when the
/// key is absent or holds an unreadable value.
pub fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(CART_KEY) {
        Ok(cart) => cart.unwrap_or_default(),
        Err(err) => {
            log::error!("Failed to read cart from session: {err}");
            Cart::default()
        }
    }
}

/// Persists the cart. Write errors are logged and swallowed: losing one cart
/// update is scoped to a single visitor.
pub fn save_cart(session: &Session, cart: &Cart) {
    if let Err(err) = session.insert(CART_KEY, cart) {
        log::error!("Failed to store cart in session: {err}");
    }
}

pub fn load_wishlist(session: &Session) -> Wishlist {
    match session.get::<Wishlist>(WISHLIST_KEY) {
        Ok(wishlist) => wishlist.unwrap_or_default(),
        Err(err) => {
            log::error!("Failed to read wishlist from session: {err}");
            Wishlist::default()
        }
    }
}

pub fn save_wishlist(session: &Session, wishlist: &Wishlist) {
    if let Err(err) = session.insert(WISHLIST_KEY, wishlist) {
        log::error!("Failed to store wishlist in session: {err}");
    }
}
