//! Drivers feature slice: registration, edits, status toggling and availability.

pub mod api;
mod error;
pub mod form;

pub use crate::api::DriverApi;
pub use crate::error::{DriversError, DriversErrorExt};
pub use crate::form::{DriverDraft, DriverEditDraft};

use depot_client::ApiClient;
use depot_domain::models::{AvailableDriver, Driver};
use depot_kernel::range::DateRange;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Drivers {
    api: DriverApi,
}

impl Drivers {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { api: DriverApi::new(client) }
    }

    #[must_use]
    pub const fn api(&self) -> &DriverApi {
        &self.api
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Driver>, DriversError> {
        self.api.list(range).await.context("Listing drivers")
    }

    pub async fn available(&self) -> Result<Vec<AvailableDriver>, DriversError> {
        self.api.available().await.context("Listing available drivers")
    }

    pub async fn create(&self, draft: &DriverDraft) -> Result<Driver, DriversError> {
        let input = draft.validate()?;
        let driver = self.api.create(&input).await.context("Creating driver")?;
        info!(id = %driver.id, categories = %driver.cnh_category.label(), "Driver registered");
        Ok(driver)
    }

    pub async fn update(&self, id: &str, draft: &DriverEditDraft) -> Result<Driver, DriversError> {
        let update = draft.validate()?;
        let driver = self.api.update(id, &update).await.context("Updating driver")?;
        info!(id = %driver.id, "Driver updated");
        Ok(driver)
    }

    pub async fn toggle_status(&self, id: &str) -> Result<Driver, DriversError> {
        let driver = self.api.toggle_status(id).await.context("Toggling driver status")?;
        info!(id = %driver.id, active = driver.active, "Driver status changed");
        Ok(driver)
    }
}
