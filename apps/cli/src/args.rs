//! # CLI Argument Definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use depot::kernel::range::parse_date;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "depot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Logistics dashboard from the terminal")]
pub struct Cli {
    /// Configuration file, with or without extension (defaults to `depot`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List records created in a date range
    List {
        entity: Entity,
        /// First day, `yyyy-MM-dd` or `dd/MM/yyyy`
        #[arg(long, value_parser = date_arg)]
        start: Option<NaiveDate>,
        /// Last day, inclusive
        #[arg(long, value_parser = date_arg)]
        end: Option<NaiveDate>,
    },
    /// Apply an input mask the way the forms do
    Format { kind: FormatKind, value: String },
    /// Print the label of a CNH category bitmask
    Category { mask: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Trucks,
    Drivers,
    Inventory,
    Inbound,
    Orders,
    Expeditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    Phone,
    Cnh,
    Plate,
    Year,
    Price,
}

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).ok_or_else(|| format!("'{raw}' is not a date (use yyyy-MM-dd or dd/MM/yyyy)"))
}
