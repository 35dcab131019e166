use depot_client::{ApiClient, ClientError};
use depot_domain::models::{Order, OrderInput, OrderSummary, OrderUpdate};
use depot_kernel::range::DateRange;

const ORDERS: &str = "order";

/// Typed `/order` endpoints.
#[derive(Debug, Clone)]
pub struct OrderApi {
    client: ApiClient,
}

impl OrderApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Order>, ClientError> {
        self.client.list_by_range(ORDERS, range).await
    }

    pub async fn create(&self, input: &OrderInput) -> Result<Order, ClientError> {
        self.client.post(ORDERS, input).await
    }

    pub async fn update(&self, id: &str, update: &OrderUpdate) -> Result<Order, ClientError> {
        self.client.put(&format!("{ORDERS}/{id}"), update).await
    }

    /// Orders that do not have an expedition yet.
    pub async fn available_for_expedition(&self) -> Result<Vec<OrderSummary>, ClientError> {
        self.client.get(&format!("{ORDERS}/available-for-expedition")).await
    }
}
