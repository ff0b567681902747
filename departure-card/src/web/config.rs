//! Server configuration.

use std::net::{AddrParseError, SocketAddr};

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "DEPARTURE_CARD_ADDR";

/// Error returned when the environment holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerConfigError {
    /// The bind address could not be parsed
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|source| ServerConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value: value.clone(),
                    source,
                })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
