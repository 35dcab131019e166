//! Expeditions feature slice.
//!
//! An expedition dispatches one order with one driver and one truck. Edits
//! stay possible only while the order is pending, in separation or in transit,
//! and the forecast window comes from `[scheduling]` in the configuration.

pub mod api;
mod error;
pub mod form;

pub use crate::api::ExpeditionApi;
pub use crate::error::{ExpeditionsError, ExpeditionsErrorExt};
pub use crate::form::{ExpeditionDraft, ExpeditionEditDraft};

use chrono::{Local, NaiveDate};
use depot_client::ApiClient;
use depot_domain::config::SchedulingConfig;
use depot_domain::models::{
    AvailableDriver, AvailableOrder, AvailableTruck, Expedition, ExpeditionStats,
};
use depot_kernel::editing::EditGate;
use depot_kernel::range::DateRange;
use tracing::info;

/// What the create form can choose from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    pub orders: Vec<AvailableOrder>,
    pub drivers: Vec<AvailableDriver>,
    pub trucks: Vec<AvailableTruck>,
}

#[derive(Debug, Clone)]
pub struct Expeditions {
    api: ExpeditionApi,
    horizon_days: u32,
}

impl Expeditions {
    #[must_use]
    pub const fn new(client: ApiClient, scheduling: &SchedulingConfig) -> Self {
        Self { api: ExpeditionApi::new(client), horizon_days: scheduling.forecast_horizon_days }
    }

    #[must_use]
    pub const fn api(&self) -> &ExpeditionApi {
        &self.api
    }

    #[must_use]
    pub const fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Expedition>, ExpeditionsError> {
        self.api.list(range).await.context("Listing expeditions")
    }

    pub async fn get(&self, id: &str) -> Result<Expedition, ExpeditionsError> {
        self.api.get(id).await.context("Loading expedition")
    }

    pub async fn stats(&self) -> Result<ExpeditionStats, ExpeditionsError> {
        self.api.stats().await.context("Loading expedition stats")
    }

    pub async fn availability(&self) -> Result<Availability, ExpeditionsError> {
        Ok(Availability {
            orders: self.api.available_orders().await.context("Listing available orders")?,
            drivers: self.api.available_drivers().await.context("Listing available drivers")?,
            trucks: self.api.available_trucks().await.context("Listing available trucks")?,
        })
    }

    pub async fn create(&self, draft: &ExpeditionDraft) -> Result<Expedition, ExpeditionsError> {
        self.create_at(draft, Local::now().date_naive()).await
    }

    pub async fn create_at(
        &self,
        draft: &ExpeditionDraft,
        today: NaiveDate,
    ) -> Result<Expedition, ExpeditionsError> {
        let input = draft.validate_at(today, self.horizon_days)?;
        let expedition = self.api.create(&input).await.context("Creating expedition")?;
        info!(id = %expedition.id, order = %expedition.order_number, "Expedition created");
        Ok(expedition)
    }

    pub async fn update(
        &self,
        id: &str,
        draft: &ExpeditionEditDraft,
    ) -> Result<Expedition, ExpeditionsError> {
        self.update_at(id, draft, Local::now().date_naive()).await
    }

    /// Refused locally unless the current status is edit-eligible.
    pub async fn update_at(
        &self,
        id: &str,
        draft: &ExpeditionEditDraft,
        today: NaiveDate,
    ) -> Result<Expedition, ExpeditionsError> {
        let (update, status) = draft.validate_at(today, self.horizon_days)?;
        let expedition = self.api.update(id, &update, status).await.context("Updating expedition")?;
        info!(id = %expedition.id, status = ?status, "Expedition updated");
        Ok(expedition)
    }
}

/// Edit button state for a listed expedition.
#[must_use]
pub const fn edit_gate(expedition: &Expedition) -> EditGate {
    EditGate::for_status(expedition.order_status)
}
