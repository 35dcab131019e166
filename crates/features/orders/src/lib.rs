//! Orders feature slice: customer orders built from inventory lines.

pub mod api;
mod error;
pub mod form;

pub use crate::api::OrderApi;
pub use crate::error::{OrdersError, OrdersErrorExt};
pub use crate::form::{LineDraft, Lines, OrderDraft, OrderEditDraft};

use depot_client::ApiClient;
use depot_domain::models::{Order, OrderSummary};
use depot_kernel::range::DateRange;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Orders {
    api: OrderApi,
}

impl Orders {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { api: OrderApi::new(client) }
    }

    #[must_use]
    pub const fn api(&self) -> &OrderApi {
        &self.api
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<Order>, OrdersError> {
        self.api.list(range).await.context("Listing orders")
    }

    pub async fn available_for_expedition(&self) -> Result<Vec<OrderSummary>, OrdersError> {
        self.api.available_for_expedition().await.context("Listing orders available for expedition")
    }

    pub async fn create(&self, draft: &OrderDraft) -> Result<Order, OrdersError> {
        let input = draft.validate()?;
        let order = self.api.create(&input).await.context("Creating order")?;
        info!(id = %order.id, number = %order.order_number, lines = order.items.len(), "Order created");
        Ok(order)
    }

    /// Refused locally once the order is delivered or canceled.
    pub async fn update(&self, id: &str, draft: &OrderEditDraft) -> Result<Order, OrdersError> {
        let update = draft.validate()?;
        let order = self.api.update(id, &update).await.context("Updating order")?;
        info!(id = %order.id, status = %order.status, "Order updated");
        Ok(order)
    }
}

/// Sum of `quantity * price` over the lines the backend priced.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn order_total(order: &Order) -> f64 {
    order.items.iter().map(|line| line.quantity as f64 * line.price.unwrap_or_default()).sum()
}
