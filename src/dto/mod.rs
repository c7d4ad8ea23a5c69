//! DTO modules that bridge services with templates.

pub mod birds;
pub mod cart;
pub mod manager;
pub mod nests;
pub mod ratings;
