use super::RecordId;
use crate::status::{self, OrderStatus};
use chrono::{DateTime, Utc};
use depot_derive::api_model;

/// Dispatch of one order with a driver and a truck.
#[api_model]
#[derive(PartialEq)]
pub struct Expedition {
    pub id: RecordId,
    pub order_id: RecordId,
    pub order_number: String,
    pub customer_name: String,
    /// Carried by name; unknown or missing values read as `None` and block editing.
    #[serde(default, with = "status::lenient")]
    pub order_status: Option<OrderStatus>,
    pub driver_id: RecordId,
    pub driver_name: String,
    pub truck_id: RecordId,
    pub truck_model: String,
    pub truck_plate: String,
    #[serde(with = "crate::time::timestamp")]
    pub delivery_forecast: DateTime<Utc>,
    #[serde(default)]
    pub observation: String,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq)]
pub struct ExpeditionInput {
    pub order_id: RecordId,
    pub driver_id: RecordId,
    pub truck_id: RecordId,
    #[serde(with = "crate::time::timestamp")]
    pub delivery_forecast: DateTime<Utc>,
    pub observation: String,
}

/// Edit body. A status change travels separately as the `orderStatus` query parameter.
#[api_model]
#[derive(PartialEq)]
pub struct ExpeditionUpdate {
    #[serde(with = "crate::time::timestamp")]
    pub delivery_forecast: DateTime<Utc>,
    pub observation: String,
    pub driver_id: RecordId,
    pub truck_id: RecordId,
}

#[api_model]
#[derive(PartialEq, Eq)]
pub struct AvailableOrder {
    pub id: RecordId,
    #[serde(default)]
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[api_model]
#[derive(PartialEq, Eq)]
pub struct AvailableDriver {
    pub id: RecordId,
    pub name: String,
    pub cnh: String,
    #[serde(default)]
    pub active: bool,
}

#[api_model]
#[derive(PartialEq, Eq)]
pub struct AvailableTruck {
    pub id: RecordId,
    pub license_plate: String,
    pub model: String,
    #[serde(default)]
    pub model_year: i32,
    #[serde(default)]
    pub available: bool,
}

/// Dashboard counters from `/expedition/stats`.
#[api_model]
#[derive(Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExpeditionStats {
    pub total: u64,
    pub in_separation: u64,
    pub in_transit: u64,
    pub delivered: u64,
    pub canceled: u64,
}
