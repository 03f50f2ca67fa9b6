use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Top-level configuration. Loaded once in `main` and passed down; nothing
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub content: ContentConfig,
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Where optional content lives on disk.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory of per-condition slide folders.
    pub slides_dir: Option<PathBuf>,
    /// URL path segment slide assets are served under.
    pub slides_prefix: String,
    /// Directory of JSON-declared instruments, loaded next to the built-ins.
    pub instrument_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCREENING_PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("SCREENING_HOST must parse to an IPv4 or IPv6 address, got '{host}'")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("SCREENING_LOG_FORMAT must be 'compact' or 'json', got '{0}'")]
    InvalidLogFormat(String),
}

impl AppConfig {
    /// Load from the process environment, after reading a `.env` file if one
    /// is present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("SCREENING_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("SCREENING_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 5000,
        };

        let log_level = lookup("SCREENING_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let format = match lookup("SCREENING_LOG_FORMAT") {
            None => LogFormat::Compact,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "compact" | "" => LogFormat::Compact,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidLogFormat(raw)),
            },
        };

        let slides_prefix = lookup("SCREENING_SLIDES_PREFIX")
            .map(|p| p.trim_matches('/').to_string())
            .unwrap_or_else(|| "about-conditions".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            content: ContentConfig {
                slides_dir: lookup("SCREENING_SLIDES_DIR").map(PathBuf::from),
                slides_prefix,
                instrument_dir: lookup("SCREENING_INSTRUMENT_DIR").map(PathBuf::from),
            },
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
