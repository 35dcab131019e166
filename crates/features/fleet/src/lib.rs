//! Fleet feature slice: truck registration, edits and availability.

pub mod api;
mod error;
pub mod form;

pub use crate::api::TruckApi;
pub use crate::error::{FleetError, FleetErrorExt};
pub use crate::form::{TruckDraft, TruckEditDraft};

use chrono::{Local, NaiveDate};
use depot_client::ApiClient;
use depot_domain::models::{AvailableTruck, Truck};
use depot_kernel::range::DateRange;
use tracing::info;

/// Truck operations as the fleet page performs them.
#[derive(Debug, Clone)]
pub struct Fleet {
    api: TruckApi,
}

impl Fleet {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { api: TruckApi::new(client) }
    }

    #[must_use]
    pub const fn api(&self) -> &TruckApi {
        &self.api
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Truck>, FleetError> {
        self.api.list(range).await.context("Listing trucks")
    }

    pub async fn available(&self) -> Result<Vec<AvailableTruck>, FleetError> {
        self.api.available().await.context("Listing available trucks")
    }

    pub async fn create(&self, draft: &TruckDraft) -> Result<Truck, FleetError> {
        self.create_at(draft, Local::now().date_naive()).await
    }

    /// Validates against `today` and registers the truck. Nothing is sent when validation fails.
    pub async fn create_at(&self, draft: &TruckDraft, today: NaiveDate) -> Result<Truck, FleetError> {
        let input = draft.validate_at(today)?;
        let truck = self.api.create(&input).await.context("Creating truck")?;
        info!(id = %truck.id, plate = %truck.license_plate, "Truck registered");
        Ok(truck)
    }

    pub async fn update(&self, id: &str, draft: &TruckEditDraft) -> Result<Truck, FleetError> {
        self.update_at(id, draft, Local::now().date_naive()).await
    }

    pub async fn update_at(
        &self,
        id: &str,
        draft: &TruckEditDraft,
        today: NaiveDate,
    ) -> Result<Truck, FleetError> {
        let update = draft.validate_at(today)?;
        let truck = self.api.update(id, &update).await.context("Updating truck")?;
        info!(id = %truck.id, "Truck updated");
        Ok(truck)
    }
}
