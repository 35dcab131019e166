use super::RecordId;
use crate::status::OrderStatus;
use chrono::{DateTime, Utc};
use depot_derive::api_model;

/// One inventory item on an order. The optional fields are display extras the
/// backend fills in on reads.
#[api_model]
#[derive(PartialEq)]
pub struct OrderLine {
    #[serde(default)]
    pub id: RecordId,
    pub inventory_id: RecordId,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Order {
    pub id: RecordId,
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq, Eq)]
pub struct OrderLineInput {
    pub inventory_id: RecordId,
    pub quantity: i64,
}

#[api_model]
#[derive(PartialEq, Eq)]
pub struct OrderInput {
    pub order_number: String,
    pub customer_name: String,
    pub items: Vec<OrderLineInput>,
}

/// The order number is fixed once created.
#[api_model]
#[derive(PartialEq, Eq)]
pub struct OrderUpdate {
    pub customer_name: String,
    pub items: Vec<OrderLineInput>,
}

/// Order row without lines, as returned by the availability list.
#[api_model]
#[derive(PartialEq, Eq)]
pub struct OrderSummary {
    pub id: RecordId,
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<&OrderLine> for OrderLineInput {
    fn from(line: &OrderLine) -> Self {
        Self { inventory_id: line.inventory_id.clone(), quantity: line.quantity }
    }
}
