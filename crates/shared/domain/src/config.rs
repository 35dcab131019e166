use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level dashboard configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfigInner {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub filters: FilterConfig,
    pub scheduling: SchedulingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into feature services.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten, default)]
    inner: Arc<DashboardConfigInner>,
}

impl Deref for DashboardConfig {
    type Target = DashboardConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DashboardConfig {
    fn deref_mut(&mut self) -> &mut DashboardConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Backend REST API location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// No local timeout when absent; the transport decides.
    pub timeout_seconds: Option<u64>,
}

/// Log output settings consumed by `depot-logger`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    pub directives: Option<String>,
}

/// Date-range filter bounds shared by every list page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// How many days before today the initial range starts.
    pub default_window_days: u32,
    pub max_span_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Latest delivery forecast accepted, counted in days from today.
    pub forecast_horizon_days: u32,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000/api".to_owned(), timeout_seconds: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: 10,
            directives: None,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { default_window_days: 1, max_span_days: 90 }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self { forecast_horizon_days: 30 }
    }
}
