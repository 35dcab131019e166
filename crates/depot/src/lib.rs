//! Facade crate for the dashboard features and shared modules.
//! Re-exports domain/kernel primitives and wires every enabled feature slice
//! to one shared [`ApiClient`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `depot` (all slices are on by default, or pick them by feature flag).
//! - Build a [`Dashboard`] from the loaded [`DashboardConfig`].

pub use depot_client as client;
pub use depot_domain as domain;
pub use depot_kernel as kernel;

use depot_client::{ApiClient, ClientError};
use depot_domain::config::DashboardConfig;
use tracing::debug;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "drivers")]
    pub use depot_drivers as drivers;
    #[cfg(feature = "expeditions")]
    pub use depot_expeditions as expeditions;
    #[cfg(feature = "fleet")]
    pub use depot_fleet as fleet;
    #[cfg(feature = "inventory")]
    pub use depot_inventory as inventory;
    #[cfg(feature = "orders")]
    pub use depot_orders as orders;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "fleet")]
        "fleet",
        #[cfg(feature = "drivers")]
        "drivers",
        #[cfg(feature = "inventory")]
        "inventory",
        #[cfg(feature = "orders")]
        "orders",
        #[cfg(feature = "expeditions")]
        "expeditions",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Every enabled feature service, sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    client: ApiClient,
    #[cfg(feature = "fleet")]
    pub fleet: depot_fleet::Fleet,
    #[cfg(feature = "drivers")]
    pub drivers: depot_drivers::Drivers,
    #[cfg(feature = "inventory")]
    pub inventory: depot_inventory::Inventory,
    #[cfg(feature = "inventory")]
    pub inbound: depot_inventory::InboundEntries,
    #[cfg(feature = "orders")]
    pub orders: depot_orders::Orders,
    #[cfg(feature = "expeditions")]
    pub expeditions: depot_expeditions::Expeditions,
}

impl Dashboard {
    /// Builds the client from `[api]` and hands it to every slice.
    ///
    /// # Errors
    /// Returns an error if `api.base_url` is not a valid URL.
    pub fn new(config: DashboardConfig) -> Result<Self, ClientError> {
        let client = ApiClient::new(&config.api)?;
        debug!(base_url = %client.base_url(), features = ?features::ENABLED, "Dashboard wired");

        Ok(Self {
            #[cfg(feature = "fleet")]
            fleet: depot_fleet::Fleet::new(client.clone()),
            #[cfg(feature = "drivers")]
            drivers: depot_drivers::Drivers::new(client.clone()),
            #[cfg(feature = "inventory")]
            inventory: depot_inventory::Inventory::new(client.clone()),
            #[cfg(feature = "inventory")]
            inbound: depot_inventory::InboundEntries::new(client.clone()),
            #[cfg(feature = "orders")]
            orders: depot_orders::Orders::new(client.clone()),
            #[cfg(feature = "expeditions")]
            expeditions: depot_expeditions::Expeditions::new(client.clone(), &config.scheduling),
            client,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "expeditions")]
    #[test]
    fn default_config_wires_every_slice() {
        let dashboard = Dashboard::new(DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.client().base_url().as_str(), "http://localhost:5000/api/");
        assert!(features::is_enabled("expeditions"));
        assert_eq!(dashboard.expeditions.horizon_days(), 30);
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let mut config = DashboardConfig::default();
        config.api.base_url = "::".to_owned();
        assert!(Dashboard::new(config).is_err());
    }
}
