use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::specie::Specie;

/// Parent bird reference embedded in a nest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentBird {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// A nest listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specie: Option<Specie>,
    #[serde(default)]
    pub dad: Option<ParentBird>,
    #[serde(default)]
    pub mom: Option<ParentBird>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a nest through the manager console.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNest {
    pub name: String,
    pub specie: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mom: Option<String>,
}
