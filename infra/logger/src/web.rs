use crate::LoggerConfig;
use crate::error::LoggerError;

/// Routes `tracing` to the browser console. The level is the only knob that applies.
pub(crate) fn install(config: &LoggerConfig) -> Result<(), LoggerError> {
    let Some(level) = config.console_level() else {
        return Ok(());
    };

    dioxus_logger::init(level).map_err(|e| LoggerError::Subscriber {
        message: e.to_string().into(),
        context: Some("Installing browser console logger".into()),
    })
}
