use serde::{Deserialize, Serialize};

/// Order payload sent to the backend at checkout.
///
/// Carries the resolved product identifiers split by collection, the way the
/// orders endpoint expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub receiver: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub birds: Vec<String>,
    #[serde(default)]
    pub nests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<String>,
}

/// Confirmation payload returned by the orders endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub total_money: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}
