use depot_client::{ApiClient, ClientError};
use depot_domain::OrderStatus;
use depot_domain::models::{
    AvailableDriver, AvailableOrder, AvailableTruck, Expedition, ExpeditionInput, ExpeditionStats,
    ExpeditionUpdate,
};
use depot_kernel::range::DateRange;

const EXPEDITIONS: &str = "expedition";

/// Typed `/expedition` endpoints plus the availability lists its forms need.
#[derive(Debug, Clone)]
pub struct ExpeditionApi {
    client: ApiClient,
}

impl ExpeditionApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Expedition>, ClientError> {
        self.client.list_by_range(EXPEDITIONS, range).await
    }

    pub async fn get(&self, id: &str) -> Result<Expedition, ClientError> {
        self.client.get(&format!("{EXPEDITIONS}/{id}")).await
    }

    pub async fn create(&self, input: &ExpeditionInput) -> Result<Expedition, ClientError> {
        self.client.post(EXPEDITIONS, input).await
    }

    /// `PUT /expedition/{id}`, with `?orderStatus=n` when a status is given.
    pub async fn update(
        &self,
        id: &str,
        update: &ExpeditionUpdate,
        status: Option<OrderStatus>,
    ) -> Result<Expedition, ClientError> {
        let query: Vec<(&str, u8)> =
            status.map(|status| ("orderStatus", status.code())).into_iter().collect();
        self.client.put_with_query(&format!("{EXPEDITIONS}/{id}"), update, &query).await
    }

    pub async fn stats(&self) -> Result<ExpeditionStats, ClientError> {
        self.client.get(&format!("{EXPEDITIONS}/stats")).await
    }

    pub async fn available_orders(&self) -> Result<Vec<AvailableOrder>, ClientError> {
        self.client.get("order/available-for-expedition").await
    }

    pub async fn available_drivers(&self) -> Result<Vec<AvailableDriver>, ClientError> {
        self.client.get("driver/available").await
    }

    pub async fn available_trucks(&self) -> Result<Vec<AvailableTruck>, ClientError> {
        self.client.get("truck/available").await
    }
}
