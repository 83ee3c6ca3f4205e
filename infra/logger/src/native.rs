use crate::error::{LoggerError, LoggerErrorExt};
use crate::LoggerConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Installs the global registry: env filter, console layer, optional file layer.
pub(crate) fn install(config: &LoggerConfig, name: &str) -> Result<Option<WorkerGuard>, LoggerError> {
    let env_filter = build_env_filter(config)?;

    let mut layers = Vec::new();

    if config.console_level().is_some() {
        layers.push(layer().compact().with_ansi(true).boxed());
    }

    let guard = if let Some(path) = &config.path {
        fs::create_dir_all(path)
            .map_err(|e| LoggerError::from(e.to_string()))
            .context(format!("Failed to create path: {}", path.display()))?;

        let file_appender = RollingFileAppender::builder()
            .rotation(config.rotation.clone())
            .filename_prefix(name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(config.max_files)
            .build(path)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let file_layer = layer().with_writer(non_blocking).with_ansi(false);

        layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(env_filter).with(layers).try_init().map_err(|e| {
        LoggerError::Subscriber { message: e.to_string().into(), context: None }
    })?;

    Ok(guard)
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
