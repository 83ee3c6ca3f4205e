use crate::error::format_context;
use config::{Config, Environment, File, FileFormat, Source};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::info;

/// Prefix of environment overrides, e.g. `FOLIO__GITHUB__USERNAME`.
pub const ENV_PREFIX: &str = "FOLIO";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    /// Wraps the error with a short description of what was being loaded.
    ///
    /// # Errors
    /// Propagates the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Loads configuration from TOML text compiled into the binary, then applies
/// `FOLIO__*` environment overrides.
///
/// This is the loader used by the browser build, where there is no filesystem.
///
/// # Errors
/// Returns an error if the TOML is malformed or does not match the structure of `T`.
pub fn load_embedded<T>(source: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    info!(bytes = source.len(), "Loading embedded config");
    load_layers(File::from_str(source, FileFormat::Toml), default_environment())
}

fn default_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

fn load_layers<T, S>(base: S, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    S: Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(base)
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
