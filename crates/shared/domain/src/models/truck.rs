use super::RecordId;
use chrono::{DateTime, Utc};
use depot_derive::api_model;

#[api_model]
#[derive(PartialEq)]
pub struct Truck {
    pub id: RecordId,
    pub license_plate: String,
    pub model: String,
    pub year: i32,
    pub capacity_kg: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq)]
pub struct TruckInput {
    pub license_plate: String,
    pub model: String,
    pub year: i32,
    pub capacity_kg: f64,
}

/// The plate is fixed once a truck is registered.
#[api_model]
#[derive(PartialEq)]
pub struct TruckUpdate {
    pub model: String,
    pub year: i32,
    pub capacity_kg: f64,
}
