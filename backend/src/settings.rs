//! Application settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `APP_*`
//! environment variables and command-line flags. Settings are built once in
//! `main` and handed by reference to telemetry and the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_APP_NAME: &str = "Rust Template";
const DEFAULT_APP_VERSION: &str = "1.0.0";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// Origins accepted by the CORS policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// Any origin; configured as `*`.
    #[default]
    Any,
    /// Exact origins such as `https://app.example.com`.
    List(Vec<String>),
}

/// Settings values that parse but make no sense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("host must be an IP address, got {0:?}")]
    InvalidHost(String),
    /// `log_format` is neither `json` nor `pretty`.
    #[error("log_format must be json or pretty, got {0:?}")]
    InvalidLogFormat(String),
    /// A CORS origin lacks an `http://` or `https://` scheme.
    #[error("cors origin must start with http:// or https://, got {0:?}")]
    InvalidCorsOrigin(String),
}

/// Runtime configuration for the service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APP")]
pub struct AppSettings {
    /// Name reported by `/health`.
    pub app_name: Option<String>,
    /// Version reported by `/health`.
    pub app_version: Option<String>,
    /// Serve Swagger UI and log at debug level regardless of `log_level`.
    #[ortho_config(default = false)]
    pub debug: bool,
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// `json` or `pretty`.
    pub log_format: Option<String>,
    /// Comma-separated allowed origins; `*` allows any.
    pub cors_origins: Option<String>,
}

impl AppSettings {
    /// Configured application name, falling back to the default.
    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Configured application version, falling back to the default.
    pub fn app_version(&self) -> &str {
        self.app_version.as_deref().unwrap_or(DEFAULT_APP_VERSION)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidHost(raw.to_owned()))?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &str {
        if self.debug {
            return "debug";
        }
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Output format for log events.
    ///
    /// # Errors
    /// [`SettingsError::InvalidLogFormat`] for anything but `json` or
    /// `pretty` (case-insensitive).
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        match self.log_format.as_deref() {
            None => Ok(LogFormat::default()),
            Some(raw) if raw.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            Some(raw) if raw.eq_ignore_ascii_case("pretty") => Ok(LogFormat::Pretty),
            Some(raw) => Err(SettingsError::InvalidLogFormat(raw.to_owned())),
        }
    }

    /// Origins for the CORS policy; any origin when unset.
    ///
    /// # Errors
    /// [`SettingsError::InvalidCorsOrigin`] for an entry without an HTTP
    /// scheme.
    pub fn cors_origins(&self) -> Result<CorsOrigins, SettingsError> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Ok(CorsOrigins::Any);
        };
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();
        if entries.contains(&"*") {
            return Ok(CorsOrigins::Any);
        }
        entries
            .into_iter()
            .map(|origin| {
                if origin.starts_with("http://") || origin.starts_with("https://") {
                    Ok(origin.trim_end_matches('/').to_owned())
                } else {
                    Err(SettingsError::InvalidCorsOrigin(origin.to_owned()))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CorsOrigins::List)
    }
}
