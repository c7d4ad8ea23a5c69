use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review author as embedded in a rating record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingUser {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A customer rating with its star value and optional photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<RatingUser>,
    pub value: u8,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
