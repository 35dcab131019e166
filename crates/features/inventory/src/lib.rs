//! Inventory feature slice.
//!
//! Covers two pages that share the same stock items: the inventory list with
//! its price edits and stock adjustments, and inbound material entries, which
//! create the received item on the backend as a side effect.

pub mod api;
mod error;
pub mod form;

pub use crate::api::{InboundApi, InventoryApi};
pub use crate::error::{InventoryError, InventoryErrorExt};
pub use crate::form::{
    Adjustment, InboundDraft, InboundEditDraft, InventoryDraft, InventoryEditDraft, StockAdjustment,
};

use depot_client::ApiClient;
use depot_domain::models::{InboundEntry, InventoryItem};
use depot_kernel::range::DateRange;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Inventory {
    api: InventoryApi,
}

impl Inventory {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { api: InventoryApi::new(client) }
    }

    #[must_use]
    pub const fn api(&self) -> &InventoryApi {
        &self.api
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<InventoryItem>, InventoryError> {
        self.api.list(range).await.context("Listing inventory")
    }

    pub async fn available(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.api.available().await.context("Listing available inventory")
    }

    pub async fn create(&self, draft: &InventoryDraft) -> Result<InventoryItem, InventoryError> {
        let input = draft.validate()?;
        let item = self.api.create(&input).await.context("Creating inventory item")?;
        info!(id = %item.id, code = %item.product_code, "Inventory item created");
        Ok(item)
    }

    pub async fn update(
        &self,
        id: &str,
        draft: &InventoryEditDraft,
    ) -> Result<InventoryItem, InventoryError> {
        let update = draft.validate()?;
        let item = self.api.update(id, &update).await.context("Updating inventory item")?;
        info!(id = %item.id, "Inventory item updated");
        Ok(item)
    }

    pub async fn adjust(
        &self,
        id: &str,
        adjustment: &StockAdjustment,
    ) -> Result<InventoryItem, InventoryError> {
        let amount = adjustment.validate()?;
        let item = match adjustment.direction {
            Adjustment::Increase => self.api.increase(id, amount).await.context("Increasing stock")?,
            Adjustment::Decrease => self.api.decrease(id, amount).await.context("Decreasing stock")?,
        };
        info!(id = %item.id, direction = ?adjustment.direction, amount, stock = item.quantity, "Stock adjusted");
        Ok(item)
    }

    pub async fn toggle_active(&self, id: &str) -> Result<InventoryItem, InventoryError> {
        let item = self.api.toggle_active(id).await.context("Toggling inventory item")?;
        info!(id = %item.id, active = item.active, "Inventory item status changed");
        Ok(item)
    }
}

#[derive(Debug, Clone)]
pub struct InboundEntries {
    api: InboundApi,
}

impl InboundEntries {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { api: InboundApi::new(client) }
    }

    #[must_use]
    pub const fn api(&self) -> &InboundApi {
        &self.api
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<InboundEntry>, InventoryError> {
        self.api.list(range).await.context("Listing inbound entries")
    }

    pub async fn get(&self, id: &str) -> Result<InboundEntry, InventoryError> {
        self.api.get(id).await.context("Loading inbound entry")
    }

    pub async fn create(&self, draft: &InboundDraft) -> Result<InboundEntry, InventoryError> {
        let input = draft.validate()?;
        let entry = self.api.create(&input).await.context("Creating inbound entry")?;
        info!(id = %entry.id, reference = %entry.reference, quantity = entry.quantity, "Inbound entry created");
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: &str,
        draft: &InboundEditDraft,
    ) -> Result<InboundEntry, InventoryError> {
        let update = draft.validate()?;
        let entry = self.api.update(id, &update).await.context("Updating inbound entry")?;
        info!(id = %entry.id, "Inbound entry updated");
        Ok(entry)
    }

    pub async fn delete(&self, id: &str) -> Result<(), InventoryError> {
        self.api.delete(id).await.context("Deleting inbound entry")?;
        info!(id, "Inbound entry deleted");
        Ok(())
    }
}
