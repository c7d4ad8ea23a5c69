//! Query-string codec for list pages.
//!
//! Every list page derives its filter and pagination state from the URL query
//! string and rebuilds URLs from that state when the user changes a filter or
//! follows a page link. `ListQuery` is the single typed representation both
//! directions go through.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::types::RatingValue;

/// Items per page on catalog pages (birds, nests, species).
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Items per page on the ratings page.
pub const RATINGS_PAGE_SIZE: usize = 10;
/// Newest-first ordering, the backend's default sort key.
pub const DEFAULT_SORT: &str = "createdAt_-1";

/// Filter and pagination state of a list page.
///
/// Field order matters: it is the order keys appear in encoded URLs.
/// Decoding is lenient by construction — missing keys take their defaults and
/// malformed numeric values fall back to the default instead of failing, so a
/// hand-edited or stale bookmark never produces an error page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(deserialize_with = "de_page_number")]
    pub page_number: usize,
    #[serde(deserialize_with = "de_page_size")]
    pub page_size: usize,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_trimmed"
    )]
    pub search_query: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_trimmed"
    )]
    pub specie: Option<String>,
    /// Product category on the birds page: `sell` or `breed`.
    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_trimmed"
    )]
    pub kind: Option<String>,
    #[serde(deserialize_with = "de_sort")]
    pub sort: String,
    /// Star-value filter on the ratings page, 1 through 5.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_rating_value"
    )]
    pub value: Option<u8>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_query: None,
            specie: None,
            kind: None,
            sort: DEFAULT_SORT.to_string(),
            value: None,
        }
    }
}

impl ListQuery {
    /// Decodes a raw query string into a `ListQuery`.
    ///
    /// Never fails: unrecognized keys are ignored, malformed values are
    /// replaced by their defaults, and a query string that cannot be parsed
    /// at all yields `ListQuery::default()`.
    pub fn decode(query_string: &str) -> Self {
        serde_html_form::from_str(query_string).unwrap_or_default()
    }

    /// Encodes the state back into a query string.
    ///
    /// Absent and empty values are omitted entirely; the remaining keys keep
    /// their declaration order so URLs are deterministic.
    pub fn encode(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Resolves the state against a path into a full relative URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}?{}", path, self.encode())
    }

    /// Returns a copy pointing at another page, keeping every other filter.
    pub fn with_page(&self, page_number: usize) -> Self {
        let mut query = self.clone();
        query.page_number = page_number.max(1);
        query
    }

    /// Returns a copy with the star-value filter replaced and the page reset.
    pub fn with_value(&self, value: Option<u8>) -> Self {
        let mut query = self.clone();
        query.value = value;
        query.page_number = 1;
        query
    }

    /// Returns a copy sized for the ratings page.
    pub fn for_ratings(mut self) -> Self {
        self.page_size = RATINGS_PAGE_SIZE;
        self
    }
}

fn de_page_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_usize(deserializer).filter(|n| *n >= 1).unwrap_or(1))
}

fn de_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_usize(deserializer)
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_PAGE_SIZE))
}

fn de_sort<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SORT.to_string()))
}

fn de_rating_value<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_usize(deserializer)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(|n| RatingValue::new(n).ok())
        .map(RatingValue::get))
}

/// Empty and whitespace-only strings decode to `None` so they are dropped on
/// the next encode instead of round-tripping as `key=`.
fn de_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn lenient_usize<'de, D>(deserializer: D) -> Option<usize>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .ok()
        .flatten()
        .and_then(|s| s.trim().parse().ok())
}
