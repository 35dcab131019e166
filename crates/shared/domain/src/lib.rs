//! # Domain Models
//!
//! Records exchanged with the dashboard backend plus the few value types with
//! rules of their own (license categories, order status).
//! Keep it lean: no I/O or networking here, just data and simple helpers.

pub mod categories;
pub mod config;
pub mod models;
pub mod status;
pub mod time;

pub use categories::{LicenseCategories, LicenseCategory};
pub use status::OrderStatus;
