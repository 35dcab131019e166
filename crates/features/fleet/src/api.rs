use depot_client::{ApiClient, ClientError};
use depot_domain::models::{AvailableTruck, Truck, TruckInput, TruckUpdate};
use depot_kernel::range::DateRange;

const TRUCKS: &str = "truck";

/// Typed `/truck` endpoints.
#[derive(Debug, Clone)]
pub struct TruckApi {
    client: ApiClient,
}

impl TruckApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Truck>, ClientError> {
        self.client.list_by_range(TRUCKS, range).await
    }

    pub async fn create(&self, input: &TruckInput) -> Result<Truck, ClientError> {
        self.client.post(TRUCKS, input).await
    }

    pub async fn update(&self, id: &str, update: &TruckUpdate) -> Result<Truck, ClientError> {
        self.client.put(&format!("{TRUCKS}/{id}"), update).await
    }

    /// Trucks free to be assigned to an expedition.
    pub async fn available(&self) -> Result<Vec<AvailableTruck>, ClientError> {
        self.client.get(&format!("{TRUCKS}/available")).await
    }
}
