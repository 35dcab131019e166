use depot_client::{ApiClient, ClientError};
use depot_domain::models::{AvailableDriver, Driver, DriverInput, DriverUpdate};
use depot_kernel::range::DateRange;

const DRIVERS: &str = "driver";

/// Typed `/driver` endpoints.
#[derive(Debug, Clone)]
pub struct DriverApi {
    client: ApiClient,
}

impl DriverApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Driver>, ClientError> {
        self.client.list_by_range(DRIVERS, range).await
    }

    pub async fn create(&self, input: &DriverInput) -> Result<Driver, ClientError> {
        self.client.post(DRIVERS, input).await
    }

    pub async fn update(&self, id: &str, update: &DriverUpdate) -> Result<Driver, ClientError> {
        self.client.put(&format!("{DRIVERS}/{id}"), update).await
    }

    /// Flips `active` and returns the stored record.
    pub async fn toggle_status(&self, id: &str) -> Result<Driver, ClientError> {
        self.client.patch_empty(&format!("{DRIVERS}/toggle-status/{id}")).await
    }

    pub async fn available(&self) -> Result<Vec<AvailableDriver>, ClientError> {
        self.client.get(&format!("{DRIVERS}/available")).await
    }
}
