//! Tracing subscriber initialisation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::settings::{AppSettings, LogFormat, SettingsError};

/// Failures while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The settings carried an unusable log format.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The default level is not a valid filter directive.
    #[error("invalid log level {level:?}: {source}")]
    Filter {
        /// Offending directive.
        level: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// `RUST_LOG` when set, otherwise the settings' level.
fn build_filter(settings: &AppSettings) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = settings.log_level();
    EnvFilter::try_new(level).map_err(|source| TelemetryError::Filter {
        level: level.to_owned(),
        source,
    })
}

/// Install the global `tracing` subscriber described by `settings`.
///
/// # Errors
/// Fails when the format or level is unusable, or when a subscriber is
/// already installed.
pub fn init(settings: &AppSettings) -> Result<(), TelemetryError> {
    let format = settings.log_format()?;
    let filter = build_filter(settings)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}
