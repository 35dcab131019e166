//! One line per record, tab separated.

use crate::args::Entity;
use anyhow::Result;
use depot::Dashboard;
use depot::domain::models::{Driver, Expedition, InboundEntry, InventoryItem, Order, Truck};
use depot::features::orders::order_total;
use depot::kernel::format::{format_currency, format_date, format_decimal, format_phone};
use depot::kernel::range::DateRange;
use tracing::info;

/// Errors whose message is meant for the person at the terminal.
trait UserFacing: std::error::Error + Send + Sync + Sized + 'static {
    fn user_message(&self) -> String;

    fn into_anyhow(self) -> anyhow::Error {
        let message = self.user_message();
        anyhow::Error::new(self).context(message)
    }
}

macro_rules! user_facing {
    ($($error:ty),* $(,)?) => {
        $(impl UserFacing for $error {
            fn user_message(&self) -> String {
                <$error>::user_message(self)
            }
        })*
    };
}

user_facing!(
    depot::features::fleet::FleetError,
    depot::features::drivers::DriversError,
    depot::features::inventory::InventoryError,
    depot::features::orders::OrdersError,
    depot::features::expeditions::ExpeditionsError,
);

/// Fetches `entity` records created in `range` and renders them.
pub async fn list(dashboard: &Dashboard, entity: Entity, range: &DateRange) -> Result<Vec<String>> {
    range.validate(dashboard.config().filters.max_span_days)?;

    let rows = match entity {
        Entity::Trucks => render(dashboard.fleet.list(range).await, truck_row)?,
        Entity::Drivers => render(dashboard.drivers.list(range).await, driver_row)?,
        Entity::Inventory => render(dashboard.inventory.list(range).await, inventory_row)?,
        Entity::Inbound => render(dashboard.inbound.list(range).await, inbound_row)?,
        Entity::Orders => render(dashboard.orders.list(range).await, order_row)?,
        Entity::Expeditions => render(dashboard.expeditions.list(range).await, expedition_row)?,
    };

    info!(entity = ?entity, start = %range.start, end = %range.end, count = rows.len(), "Listed records");
    Ok(rows)
}

fn render<T, E: UserFacing>(records: Result<Vec<T>, E>, row: fn(&T) -> String) -> Result<Vec<String>> {
    Ok(records.map_err(UserFacing::into_anyhow)?.iter().map(row).collect())
}

#[must_use]
pub fn truck_row(truck: &Truck) -> String {
    format!(
        "{}\t{}\t{}\t{} kg\t{}",
        truck.license_plate,
        truck.model,
        truck.year,
        format_decimal(truck.capacity_kg),
        if truck.available { "Disponível" } else { "Indisponível" },
    )
}

#[must_use]
pub fn driver_row(driver: &Driver) -> String {
    format!(
        "{}\t{}\tCNH {}\t{}\t{}",
        driver.name,
        format_phone(&driver.phone),
        driver.cnh,
        driver.cnh_category.label(),
        if driver.active { "Ativo" } else { "Inativo" },
    )
}

#[must_use]
pub fn inventory_row(item: &InventoryItem) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        item.product_code,
        item.description,
        item.quantity,
        format_currency(item.price),
        if item.active { "Ativo" } else { "Inativo" },
    )
}

#[must_use]
pub fn inbound_row(entry: &InboundEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format_date(entry.created_at.date_naive()),
        entry.reference,
        entry.supplier_name,
        entry.product_code,
        entry.quantity,
        format_currency(entry.price),
    )
}

#[must_use]
pub fn order_row(order: &Order) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{} itens",
        order.order_number,
        order.customer_name,
        order.status,
        format_currency(order_total(order)),
        order.items.len(),
    )
}

#[must_use]
pub fn expedition_row(expedition: &Expedition) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        expedition.order_number,
        expedition.customer_name,
        expedition.order_status.map_or("-", |status| status.label()),
        expedition.driver_name,
        expedition.truck_plate,
        format_date(expedition.delivery_forecast.date_naive()),
    )
}
