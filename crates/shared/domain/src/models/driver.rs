use super::RecordId;
use crate::categories::LicenseCategories;
use chrono::{DateTime, Utc};
use depot_derive::api_model;

#[api_model]
#[derive(PartialEq)]
pub struct Driver {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub cnh: String,
    pub cnh_category: LicenseCategories,
    #[serde(default)]
    pub active: bool,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(PartialEq)]
pub struct DriverInput {
    pub name: String,
    pub phone: String,
    pub cnh: String,
    pub cnh_category: LicenseCategories,
}

/// CNH and category are fixed after registration.
#[api_model]
#[derive(PartialEq)]
pub struct DriverUpdate {
    pub name: String,
    pub phone: String,
}
