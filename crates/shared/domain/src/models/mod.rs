//! Records exchanged with the backend, one module per resource.
//!
//! `Xxx` is what the API returns, `XxxInput` is the create body and
//! `XxxUpdate` the edit body. All fields are the canonical values: digits-only
//! phone and CNH, uppercase plate, plain numbers for money.

pub mod driver;
pub mod expedition;
pub mod inbound;
pub mod inventory;
pub mod order;
pub mod truck;

pub use driver::{Driver, DriverInput, DriverUpdate};
pub use expedition::{
    AvailableDriver, AvailableOrder, AvailableTruck, Expedition, ExpeditionInput, ExpeditionStats,
    ExpeditionUpdate,
};
pub use inbound::{InboundEntry, InboundEntryInput, InboundEntryUpdate};
pub use inventory::{InventoryInput, InventoryItem, InventoryUpdate};
pub use order::{Order, OrderInput, OrderLine, OrderLineInput, OrderSummary, OrderUpdate};
pub use truck::{Truck, TruckInput, TruckUpdate};

/// Backend identifiers are opaque strings (GUIDs).
pub type RecordId = String;

/// Anything listed on a date-filtered page.
pub trait Record {
    fn id(&self) -> &str;
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::models::Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                    self.created_at
                }
            }
        )*
    };
}

impl_record!(Truck, Driver, InventoryItem, InboundEntry, Order, Expedition);
