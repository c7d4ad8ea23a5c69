//! HTTP implementation of the backend API traits.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

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

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire shape of a paginated response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct PageBody<T> {
    #[serde(default)]
    items: Vec<T>,
    #[serde(default)]
    total_pages: usize,
}

/// Wire shape of an unpaginated collection response.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ItemsBody<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct AverageBody {
    #[serde(default)]
    average: f64,
}

/// Client for the marketplace backend.
///
/// One call per invocation, no retries: the caller decides what a failure
/// means for its page.
#[derive(Debug, Clone)]
pub struct BirdFarmApi {
    http: reqwest::Client,
    base_url: String,
}

impl BirdFarmApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches one page of `collection`, serializing the filter state into
    /// the request's query parameters.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ListQuery,
    ) -> ApiResult<Page<T>> {
        let url = format!(
            "{}?{}",
            self.url(&format!("/api/{collection}/pagination")),
            query.encode()
        );
        let body: PageBody<T> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Page::new(
            body.items,
            query.page_number,
            query.page_size,
            body.total_pages,
        )?)
    }

    async fn fetch_all<T: DeserializeOwned>(&self, collection: &str) -> ApiResult<Vec<T>> {
        let body: ItemsBody<T> = self
            .http
            .get(self.url(&format!("/api/{collection}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.items)
    }

    async fn get_by_ids<T: DeserializeOwned>(
        &self,
        collection: &str,
        ids: &[String],
    ) -> ApiResult<Vec<T>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let body: ItemsBody<T> = self
            .http
            .post(self.url(&format!("/api/{collection}/get-by-ids")))
            .json(&json!({ "ids": ids }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.items)
    }
}

impl BirdApi for BirdFarmApi {
    async fn list_birds(&self, query: &ListQuery) -> ApiResult<Page<Bird>> {
        self.fetch_page("birds", query).await
    }

    async fn birds_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Bird>> {
        self.get_by_ids("birds", ids).await
    }
}

impl NestApi for BirdFarmApi {
    async fn list_nests(&self, query: &ListQuery) -> ApiResult<Page<Nest>> {
        self.fetch_page("nests", query).await
    }

    async fn nests_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Nest>> {
        self.get_by_ids("nests", ids).await
    }
}

impl SpecieApi for BirdFarmApi {
    async fn list_species(&self) -> ApiResult<Vec<Specie>> {
        self.fetch_all("species").await
    }

    async fn species_page(&self, query: &ListQuery) -> ApiResult<Page<Specie>> {
        self.fetch_page("species", query).await
    }
}

impl RatingApi for BirdFarmApi {
    async fn list_ratings(&self, query: &ListQuery) -> ApiResult<Page<Rating>> {
        self.fetch_page("ratings", query).await
    }

    async fn average_rating(&self) -> ApiResult<f64> {
        let body: AverageBody = self
            .http
            .get(self.url("/api/ratings/average"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.average)
    }
}

impl VoucherApi for BirdFarmApi {
    async fn list_vouchers(&self) -> ApiResult<Vec<Voucher>> {
        self.fetch_all("vouchers").await
    }
}

impl OrderApi for BirdFarmApi {
    async fn create_order(&self, order: &NewOrder) -> ApiResult<OrderConfirmation> {
        let confirmation = self
            .http
            .post(self.url("/api/orders"))
            .json(order)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(confirmation)
    }
}

impl SpecieAdmin for BirdFarmApi {
    async fn create_specie(&self, specie: &NewSpecie) -> ApiResult<Specie> {
        let created = self
            .http
            .post(self.url("/api/species"))
            .json(specie)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    async fn delete_specie(&self, id: &str) -> ApiResult<()> {
        self.http
            .delete(self.url(&format!("/api/species/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl NestAdmin for BirdFarmApi {
    async fn create_nest(&self, nest: &NewNest) -> ApiResult<Nest> {
        let created = self
            .http
            .post(self.url("/api/nests"))
            .json(nest)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }
}
