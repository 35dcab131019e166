//! # Depot CLI
//!
//! Terminal front end over the [`depot`] facade: list records by date range,
//! try the input masks and decode CNH category masks.

pub mod args;
pub mod handlers;

use crate::args::Command;
use anyhow::Result;
use chrono::Local;
use depot::Dashboard;
use depot::domain::config::DashboardConfig;
use depot::kernel::range::DateRange;

/// Runs one command and returns the lines to print.
///
/// # Errors
/// Fails when the range is invalid, the backend cannot be reached or rejects the request.
pub async fn run(command: Command, config: DashboardConfig) -> Result<Vec<String>> {
    match command {
        Command::List { entity, start, end } => {
            let initial = DateRange::initial(Local::now().date_naive(), &config.filters);
            let range = DateRange::new(start.unwrap_or(initial.start), end.unwrap_or(initial.end));
            let dashboard = Dashboard::new(config)?;
            handlers::list::list(&dashboard, entity, &range).await
        },
        Command::Format { kind, value } => Ok(vec![handlers::format::format_value(kind, &value)]),
        Command::Category { mask } => Ok(vec![handlers::category::category_label(mask)]),
    }
}
