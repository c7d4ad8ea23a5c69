use serde::Serialize;

use crate::domain::rating::Rating;
use crate::pagination::Paginated;
use crate::query::ListQuery;

/// One star-value filter button.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueFilter {
    pub label: String,
    pub url: String,
    pub active: bool,
}

/// Data required to render the ratings page.
pub struct RatingListData {
    pub ratings: Paginated<Rating>,
    /// Shop-wide average, absent when the lookup failed.
    pub average: Option<f64>,
    /// "All" plus one button per star value, with page reset to 1.
    pub filters: Vec<ValueFilter>,
    pub query: ListQuery,
}
