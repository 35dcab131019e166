//! # Logger
//!
//! Installs the global `tracing` subscriber for dashboard binaries: a compact
//! console layer, an optional daily-rotated file layer (plain or JSON), and an
//! env filter that applies `RUST_LOG` on top of the configured level and
//! directives.
//!
//! ## Example
//!
//! ```rust
//! # use depot_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("depot")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```
//!
//! Binaries usually start from their loaded configuration instead:
//!
//! ```rust,ignore
//! let _logger = Logger::from_config("depot", &config.logging)?.init()?;
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use depot_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    json: bool,
    max_files: usize,
    directives: Option<String>,
}

impl LoggerBuilder {
    /// Enables or disables the console layer.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Minimum level emitted when `RUST_LOG` does not say otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Writes daily-rotated log files named `<name>.<date>.log` into `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Emits JSON lines in the file layer. The console layer always stays human-readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Number of rotated files kept on disk.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Module-directed filter such as `depot_client=debug,reqwest=warn`.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the program; dropping it
    /// stops the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a malformed filter, or when no layer is enabled.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed());
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or set a directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.layered_filter(from_env.as_deref())
    }

    /// Configured directives with `RUST_LOG` directives applied on top.
    /// Unparseable `RUST_LOG` entries are skipped; bad configured ones are an error.
    fn layered_filter(&self, from_env: Option<&str>) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        let configured = self.directives.as_deref().unwrap_or_default();
        let filter = builder.parse(configured).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid filter '{configured}': {e}").into(),
            context: None,
        })?;

        let overrides = from_env
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| raw.parse::<Directive>().ok());
        Ok(overrides.fold(filter, EnvFilter::add_directive))
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolled files (e.g. `depot.2026-10-15.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            json: false,
            max_files: DEFAULT_MAX_FILES,
            directives: None,
        }
    }

    /// Starts a builder pre-filled from the `[logging]` configuration section.
    ///
    /// # Errors
    /// Returns [`LoggerError::Level`] when `logging.level` is not a known level.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<LoggerBuilder, LoggerError> {
        let level = config
            .level
            .parse::<LevelFilter>()
            .context(format!("logging.level = '{}'", config.level))?;

        let mut builder = Self::builder(name)
            .console(config.console)
            .level(level)
            .json(config.json)
            .max_files(config.max_files);

        if let Some(directory) = &config.directory {
            builder = builder.directory(directory);
        }
        if let Some(directives) = &config.directives {
            builder = builder.directives(directives);
        }

        Ok(builder)
    }

    /// Returns the file writer guard, present only when file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
