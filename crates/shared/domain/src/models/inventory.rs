use super::RecordId;
use chrono::{DateTime, Utc};
use depot_derive::api_model;

#[api_model]
#[derive(PartialEq)]
pub struct InventoryItem {
    pub id: RecordId,
    pub product_code: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub active: bool,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq)]
pub struct InventoryInput {
    pub product_code: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
}

/// Stock moves through the increase/decrease endpoints, never through an update.
#[api_model]
#[derive(PartialEq)]
pub struct InventoryUpdate {
    pub description: String,
    pub price: f64,
}
