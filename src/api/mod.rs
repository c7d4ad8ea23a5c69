//! Thin wrappers around the remote marketplace backend.
//!
//! The traits below are the seams the service layer is written against:
//! `BirdFarmApi` implements them over HTTP, `StubApi` in memory for tests.
//! All dispatch is static, services take generic `A: SomeApi` parameters.
#![allow(async_fn_in_trait)]

pub mod client;
pub mod errors;
pub mod stub;

pub use client::BirdFarmApi;

use crate::api::errors::ApiResult;
use crate::domain::bird::Bird;
use crate::domain::nest::{Nest, NewNest};
use crate::domain::order::{NewOrder, OrderConfirmation};
use crate::domain::rating::Rating;
use crate::domain::specie::{NewSpecie, Specie};
use crate::domain::voucher::Voucher;
use crate::list::Page;
use crate::query::ListQuery;

pub trait BirdApi {
    async fn list_birds(&self, query: &ListQuery) -> ApiResult<Page<Bird>>;
    async fn birds_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Bird>>;
}

pub trait NestApi {
    async fn list_nests(&self, query: &ListQuery) -> ApiResult<Page<Nest>>;
    async fn nests_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Nest>>;
}

pub trait SpecieApi {
    /// Full species list for the filter dropdowns, unpaginated.
    async fn list_species(&self) -> ApiResult<Vec<Specie>>;
    async fn species_page(&self, query: &ListQuery) -> ApiResult<Page<Specie>>;
}

pub trait RatingApi {
    async fn list_ratings(&self, query: &ListQuery) -> ApiResult<Page<Rating>>;
    async fn average_rating(&self) -> ApiResult<f64>;
}

pub trait VoucherApi {
    async fn list_vouchers(&self) -> ApiResult<Vec<Voucher>>;
}

pub trait OrderApi {
    async fn create_order(&self, order: &NewOrder) -> ApiResult<OrderConfirmation>;
}

pub trait SpecieAdmin {
    async fn create_specie(&self, specie: &NewSpecie) -> ApiResult<Specie>;
    async fn delete_specie(&self, id: &str) -> ApiResult<()>;
}

pub trait NestAdmin {
    async fn create_nest(&self, nest: &NewNest) -> ApiResult<Nest>;
}
