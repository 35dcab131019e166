use super::RecordId;
use super::inventory::InventoryInput;
use chrono::{DateTime, Utc};
use depot_derive::api_model;

/// A receipt of material from a supplier. Creating one also creates its inventory item.
#[api_model]
#[derive(PartialEq)]
pub struct InboundEntry {
    pub id: RecordId,
    pub inventory_id: RecordId,
    pub product_code: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub reference: String,
    pub supplier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq)]
pub struct InboundEntryInput {
    pub inventory_input: InventoryInput,
    pub reference: String,
    pub supplier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

#[api_model]
#[derive(PartialEq)]
pub struct InboundEntryUpdate {
    pub reference: String,
    pub supplier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}
