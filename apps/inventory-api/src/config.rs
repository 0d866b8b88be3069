//! Inventory API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | variable | default |
//! |---|---|
//! | `INVENTORY_BIND_ADDR` | `0.0.0.0` |
//! | `INVENTORY_PORT` | `8080` |
//! | `INVENTORY_DEFAULT_PAGE_SIZE` | `10` |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use inventory_core::DEFAULT_PAGE_SIZE;

pub const DEFAULT_PORT: u16 = 8080;

/// Inventory API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to listen on
    pub bind_addr: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Page size used when a list request has no `size`
    pub default_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ApiConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: parse_or(&lookup, "INVENTORY_BIND_ADDR", defaults.bind_addr)?,
            port: parse_or(&lookup, "INVENTORY_PORT", defaults.port)?,
            default_page_size: parse_or(
                &lookup,
                "INVENTORY_DEFAULT_PAGE_SIZE",
                defaults.default_page_size,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue(
                "INVENTORY_DEFAULT_PAGE_SIZE".to_string(),
            ));
        }
        Ok(())
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
