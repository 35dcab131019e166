use depot_client::{ApiClient, ClientError};
use depot_domain::models::{
    InboundEntry, InboundEntryInput, InboundEntryUpdate, InventoryInput, InventoryItem,
    InventoryUpdate,
};
use depot_kernel::range::DateRange;

const INVENTORY: &str = "inventory";
const INBOUND: &str = "inbound-entry";

/// Typed `/inventory` endpoints.
#[derive(Debug, Clone)]
pub struct InventoryApi {
    client: ApiClient,
}

impl InventoryApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<InventoryItem>, ClientError> {
        self.client.list_by_range(INVENTORY, range).await
    }

    pub async fn create(&self, input: &InventoryInput) -> Result<InventoryItem, ClientError> {
        self.client.post(INVENTORY, input).await
    }

    pub async fn update(&self, id: &str, update: &InventoryUpdate) -> Result<InventoryItem, ClientError> {
        self.client.put(&format!("{INVENTORY}/{id}"), update).await
    }

    /// Adds `amount` units; the body is the bare JSON number.
    pub async fn increase(&self, id: &str, amount: i64) -> Result<InventoryItem, ClientError> {
        self.client.patch(&format!("{INVENTORY}/increase/{id}"), &amount).await
    }

    pub async fn decrease(&self, id: &str, amount: i64) -> Result<InventoryItem, ClientError> {
        self.client.patch(&format!("{INVENTORY}/decrease/{id}"), &amount).await
    }

    pub async fn toggle_active(&self, id: &str) -> Result<InventoryItem, ClientError> {
        self.client.patch_empty(&format!("{INVENTORY}/toggle-active/{id}")).await
    }

    /// Active items with stock, as offered by the order-line picker.
    pub async fn available(&self) -> Result<Vec<InventoryItem>, ClientError> {
        self.client.get(&format!("{INVENTORY}/available")).await
    }
}

/// Typed `/inbound-entry` endpoints.
#[derive(Debug, Clone)]
pub struct InboundApi {
    client: ApiClient,
}

impl InboundApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<InboundEntry>, ClientError> {
        self.client.list_by_range(INBOUND, range).await
    }

    pub async fn get(&self, id: &str) -> Result<InboundEntry, ClientError> {
        self.client.get(&format!("{INBOUND}/{id}")).await
    }

    pub async fn create(&self, input: &InboundEntryInput) -> Result<InboundEntry, ClientError> {
        self.client.post(INBOUND, input).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &InboundEntryUpdate,
    ) -> Result<InboundEntry, ClientError> {
        self.client.put(&format!("{INBOUND}/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete(&format!("{INBOUND}/{id}")).await
    }
}
