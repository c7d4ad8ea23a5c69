//! Domain entities mirrored from the marketplace backend.

pub mod bird;
pub mod nest;
pub mod order;
pub mod rating;
pub mod specie;
pub mod types;
pub mod voucher;
