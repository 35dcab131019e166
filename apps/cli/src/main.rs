#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use depot::domain::config::DashboardConfig;
use depot::kernel::config::{DEFAULT_CONFIG_PATH, config_file_exists, load_config_or_default};
use depot_cli::args::Cli;
use depot_logger::Logger;
use std::path::PathBuf;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config: DashboardConfig =
        load_config_or_default(Some(&path)).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config("depot", &config.logging)?.init()?;
    if !config_file_exists(&path) {
        warn!(path = %path.display(), "Config file not found, using defaults");
    }

    for line in depot_cli::run(cli.command, config).await? {
        println!("{line}");
    }

    Ok(())
}
