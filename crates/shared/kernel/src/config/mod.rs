use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default base name of the configuration file, resolved with any supported extension.
pub const DEFAULT_CONFIG_PATH: &str = "depot";
/// Environment variables with this prefix override file values (`DEPOT__API__BASE_URL`).
pub const ENV_PREFIX: &str = "DEPOT";

const KNOWN_EXTENSIONS: [&str; 5] = ["toml", "json", "yaml", "yml", "ini"];

#[depot_derive::depot_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under environment overrides.
///
/// 1. **Base File**: `path`, or `depot` in the working directory. The extension may be
///    omitted; the `config` crate probes the supported formats.
/// 2. **Environment Overrides**: variables prefixed with `DEPOT__`, nested with `__`
///    (e.g. `DEPOT__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns an error when the file cannot be found or its content does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use depot_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), true)
}

/// Like [`load_config`], but a missing file is not an error: `T` is then built from
/// its serde defaults plus environment overrides.
///
/// # Errors
/// Returns an error when an existing file or an override cannot be deserialized into `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = effective_path(path);
    if !config_file_exists(&path) {
        warn!("Config file {} not found, using defaults", path.display());
    }
    load(&path, false)
}

/// True when `path` exists as given or with one of the supported extensions appended.
#[must_use]
pub fn config_file_exists(path: &Path) -> bool {
    path.is_file()
        || KNOWN_EXTENSIONS.iter().any(|ext| {
            let mut candidate = path.as_os_str().to_owned();
            candidate.push(".");
            candidate.push(ext);
            Path::new(&candidate).is_file()
        })
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf())
}

fn load<T>(path: &Path, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
