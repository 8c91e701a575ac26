use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mshop";

/// Prefix of environment overrides, e.g. `MSHOP__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "MSHOP";

/// Custom error type for config loading.
#[mshop_derive::mshop_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file and environment overrides.
///
/// 1. **File**: the given path, which must exist. Without a path, an optional
///    `mshop.{toml,json,..}` in the working directory is used when present.
/// 2. **Environment**: variables prefixed with `MSHOP__`; nested keys are separated by
///    double underscores (`MSHOP__EXPORT__PRETTY=true` maps to `export.pretty`).
///
/// Fields missing from both layers fall back to the `serde` defaults of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly given file is missing or unreadable,
/// or if the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use mshop_kernel::config::load_config;
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
    load_layered(path, environment())
}

/// Like [`load_config`], but reads the overrides from `vars` instead of the process
/// environment. Keys carry the same `MSHOP__` prefix.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    load_layered(path, environment().source(Some(vars.into_iter().collect())))
}

/// Overrides such as `true` or `10` are parsed into typed values, not kept as strings.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
