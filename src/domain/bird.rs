use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::specie::Specie;

/// Whether a bird is listed for direct sale or for breeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirdKind {
    Sell,
    Breed,
}

impl BirdKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BirdKind::Sell => "sell",
            BirdKind::Breed => "breed",
        }
    }
}

/// A bird listing as returned by the backend.
///
/// `specie` is the populated species record; the backend always expands the
/// reference on the endpoints this client consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specie: Option<Specie>,
    #[serde(rename = "type", default)]
    pub kind: Option<BirdKind>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
