use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discount voucher offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    /// Discount in percent, 1 through 100.
    pub discount_percent: u8,
    #[serde(default)]
    pub max_discount_value: Option<i64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
}
