//! Server configuration read from the environment.
//!
//! | Variable       | Default      |
//! |----------------|--------------|
//! | `SMADASH_HOST` | `0.0.0.0`    |
//! | `SMADASH_PORT` | `5001`       |
//! | `SMADASH_ENV`  | `production` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "SMADASH_HOST";
pub const PORT_VAR: &str = "SMADASH_PORT";
pub const MODE_VAR: &str = "SMADASH_ENV";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Only `development` (any case) selects development mode.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            RunMode::Development
        } else {
            RunMode::Production
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            RunMode::Development => "info,smadash_core=debug,smadash_server=debug",
            RunMode::Production => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub mode: RunMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            mode: RunMode::Production,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(HOST_VAR) {
            config.host = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    var: HOST_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = get(PORT_VAR) {
            config.port = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: PORT_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = get(MODE_VAR) {
            config.mode = RunMode::parse(&raw);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.mode == RunMode::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:5001");
        assert!(!config.is_development());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
            (MODE_VAR, "Development"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address().to_string(), "127.0.0.1:8080");
        assert_eq!(config.mode, RunMode::Development);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, "  "), (PORT_VAR, "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }

    #[test]
    fn rejects_bad_host() {
        let err = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: HOST_VAR, .. }));
    }

    #[test]
    fn unknown_mode_is_production() {
        assert_eq!(RunMode::parse("staging"), RunMode::Production);
        assert_eq!(RunMode::parse("production"), RunMode::Production);
        assert_eq!(RunMode::parse(" development "), RunMode::Development);
    }
}
