//! Form definitions backing the storefront routes.

pub mod cart;
pub mod manager;
