//! Kernel utilities shared across feature slices.
//! Keep this crate free of I/O besides config loading: masks and rules run
//! on every keystroke.
//!
//! ## Input masks
//! ```rust
//! # use depot_kernel::format::{format_phone, format_price_input, unformat_price_input};
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! assert_eq!(format_price_input("150"), "1,50");
//! assert!((unformat_price_input("1,50") - 1.5).abs() < f64::EPSILON);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use depot_kernel::config::load_config;
//! let cfg: depot_kernel::domain::config::DashboardConfig = load_config(Some("config/depot"))?;
//! ```

pub mod config;
pub mod editing;
pub mod form;
pub mod format;
pub mod page;
pub mod prelude;
pub mod range;
pub mod ui;
pub mod validation;

pub use depot_domain as domain;
