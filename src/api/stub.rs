//! In-memory backend used to isolate the service layer in tests.

use std::sync::Mutex;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    BirdApi, NestAdmin, NestApi, OrderApi, RatingApi, SpecieAdmin, SpecieApi, VoucherApi,
};
use crate::domain::bird::Bird;
use crate::domain::nest::{Nest, NewNest};
use crate::domain::order::{NewOrder, OrderConfirmation};
use crate::domain::rating::Rating;
use crate::domain::specie::{NewSpecie, Specie};
use crate::domain::voucher::Voucher;
use crate::list::Page;
use crate::query::ListQuery;

/// Stub backend holding fixed collections. Setting `offline` makes every
/// call fail with a network error, for exercising the `Failed` paths.
#[derive(Debug, Default)]
pub struct StubApi {
    pub birds: Vec<Bird>,
    pub nests: Vec<Nest>,
    pub species: Vec<Specie>,
    pub ratings: Vec<Rating>,
    pub vouchers: Vec<Voucher>,
    pub average: f64,
    pub offline: bool,
    pub orders: Mutex<Vec<NewOrder>>,
    pub created_species: Mutex<Vec<NewSpecie>>,
    pub deleted_species: Mutex<Vec<String>>,
    pub created_nests: Mutex<Vec<NewNest>>,
}

impl StubApi {
    fn check_online(&self) -> ApiResult<()> {
        if self.offline {
            Err(ApiError::Network("stub backend is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Slices a filtered collection into the requested page.
fn paginate<T: Clone>(items: &[T], query: &ListQuery) -> Page<T> {
    let total_pages = items.len().div_ceil(query.page_size);
    if total_pages == 0 {
        return Page::empty(query.page_size);
    }
    let page_number = query.page_number.clamp(1, total_pages);
    let start = (page_number - 1) * query.page_size;
    let page_items = items
        .iter()
        .skip(start)
        .take(query.page_size)
        .cloned()
        .collect();
    Page {
        items: page_items,
        page_number,
        page_size: query.page_size,
        total_pages,
    }
}

fn matches_search(name: &str, query: &ListQuery) -> bool {
    match &query.search_query {
        Some(term) => name.to_lowercase().contains(&term.to_lowercase()),
        None => true,
    }
}

impl BirdApi for StubApi {
    async fn list_birds(&self, query: &ListQuery) -> ApiResult<Page<Bird>> {
        self.check_online()?;
        let filtered: Vec<Bird> = self
            .birds
            .iter()
            .filter(|b| matches_search(&b.name, query))
            .filter(|b| match &query.specie {
                Some(specie) => b.specie.as_ref().is_some_and(|s| &s.id == specie),
                None => true,
            })
            .filter(|b| match &query.kind {
                Some(kind) => b.kind.map(|k| k.as_str() == kind).unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(&filtered, query))
    }

    async fn birds_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Bird>> {
        self.check_online()?;
        Ok(self
            .birds
            .iter()
            .filter(|b| ids.contains(&b.id))
            .cloned()
            .collect())
    }
}

impl NestApi for StubApi {
    async fn list_nests(&self, query: &ListQuery) -> ApiResult<Page<Nest>> {
        self.check_online()?;
        let filtered: Vec<Nest> = self
            .nests
            .iter()
            .filter(|n| matches_search(&n.name, query))
            .filter(|n| match &query.specie {
                Some(specie) => n.specie.as_ref().is_some_and(|s| &s.id == specie),
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(&filtered, query))
    }

    async fn nests_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Nest>> {
        self.check_online()?;
        Ok(self
            .nests
            .iter()
            .filter(|n| ids.contains(&n.id))
            .cloned()
            .collect())
    }
}

impl SpecieApi for StubApi {
    async fn list_species(&self) -> ApiResult<Vec<Specie>> {
        self.check_online()?;
        Ok(self.species.clone())
    }

    async fn species_page(&self, query: &ListQuery) -> ApiResult<Page<Specie>> {
        self.check_online()?;
        let filtered: Vec<Specie> = self
            .species
            .iter()
            .filter(|s| matches_search(&s.name, query))
            .cloned()
            .collect();
        Ok(paginate(&filtered, query))
    }
}

impl RatingApi for StubApi {
    async fn list_ratings(&self, query: &ListQuery) -> ApiResult<Page<Rating>> {
        self.check_online()?;
        let filtered: Vec<Rating> = self
            .ratings
            .iter()
            .filter(|r| match query.value {
                Some(value) => r.value == value,
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(&filtered, query))
    }

    async fn average_rating(&self) -> ApiResult<f64> {
        self.check_online()?;
        Ok(self.average)
    }
}

impl VoucherApi for StubApi {
    async fn list_vouchers(&self) -> ApiResult<Vec<Voucher>> {
        self.check_online()?;
        Ok(self.vouchers.clone())
    }
}

impl OrderApi for StubApi {
    async fn create_order(&self, order: &NewOrder) -> ApiResult<OrderConfirmation> {
        self.check_online()?;
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| ApiError::Network("stub lock poisoned".to_string()))?;
        orders.push(order.clone());
        Ok(OrderConfirmation {
            id: format!("order-{}", orders.len()),
            total_money: None,
            status: Some("processing".to_string()),
        })
    }
}

impl SpecieAdmin for StubApi {
    async fn create_specie(&self, specie: &NewSpecie) -> ApiResult<Specie> {
        self.check_online()?;
        let mut created = self
            .created_species
            .lock()
            .map_err(|_| ApiError::Network("stub lock poisoned".to_string()))?;
        created.push(specie.clone());
        Ok(Specie {
            id: format!("specie-{}", created.len()),
            name: specie.name.clone(),
            image_url: specie.image_url.clone(),
        })
    }

    async fn delete_specie(&self, id: &str) -> ApiResult<()> {
        self.check_online()?;
        if !self.species.iter().any(|s| s.id == id) {
            return Err(ApiError::Server { status: 404 });
        }
        self.deleted_species
            .lock()
            .map_err(|_| ApiError::Network("stub lock poisoned".to_string()))?
            .push(id.to_string());
        Ok(())
    }
}

impl NestAdmin for StubApi {
    async fn create_nest(&self, nest: &NewNest) -> ApiResult<Nest> {
        self.check_online()?;
        let mut created = self
            .created_nests
            .lock()
            .map_err(|_| ApiError::Network("stub lock poisoned".to_string()))?;
        created.push(nest.clone());
        Ok(Nest {
            id: format!("nest-{}", created.len()),
            name: nest.name.clone(),
            specie: None,
            dad: None,
            mom: None,
            price: nest.price,
            image_urls: Vec::new(),
            created_at: None,
        })
    }
}
