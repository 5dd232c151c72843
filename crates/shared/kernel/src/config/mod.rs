use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides, e.g. `PERSONA__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "PERSONA";

/// Custom error type for config loading.
#[persona_derive::persona_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides on top of it.
///
/// 1. **Base File**: the given path, or `persona` (any supported extension) in the
///    working directory when `None`.
/// 2. **Environment Overrides**: variables prefixed with `PERSONA__`; nested keys are
///    separated by `__` (`PERSONA__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed,
/// or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use persona_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(cfg.level.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Like [`load_config`], but reads overrides from `env` instead of the process
/// environment when it is `Some`. Keys keep their `PERSONA__` prefix.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("persona"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("identity.excluded_emails")
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
