//! Start-up configuration, read once from the environment.

use std::net::SocketAddr;

use rodentia_observability::LogFormat;
use thiserror::Error;

/// Bind address used when `SITE_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SITE_ADDR {value:?} is not a socket address: {reason}")]
    InvalidAddr { value: String, reason: String },

    #[error("LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub log_format: LogFormat,
}

impl SiteConfig {
    /// Read `SITE_ADDR` and `LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production,
    /// a map in tests). Unset or blank variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("SITE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self { addr, log_format })
    }
}
