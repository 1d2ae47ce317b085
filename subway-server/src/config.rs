//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "SUBWAY_BIND_ADDR";

/// Environment variable holding the default log filter.
pub const LOG_FILTER_VAR: &str = "SUBWAY_LOG";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address could not be parsed
    #[error("invalid {var} {value:?}: expected host:port")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Configuration parameters for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Log filter used when `RUST_LOG` is not set (e.g. "info").
    pub log_filter: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?,
            None => defaults.bind_addr,
        };

        let log_filter = get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: "info".to_string(),
        }
    }
}
