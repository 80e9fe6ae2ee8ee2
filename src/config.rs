//! Server configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port in {var}: {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid host in {var}: {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("invalid boolean in {var}: {value:?} (expected true/false, 1/0, on/off, yes/no)")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (from PORTFOLIO_HOST)
    pub host: IpAddr,
    /// Port to bind (from PORTFOLIO_PORT)
    pub port: u16,
    /// Initial dark-mode flag (from PORTFOLIO_DARK_MODE)
    pub dark_mode: bool,
    /// Allowed CORS origins for the JSON API (from PORTFOLIO_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORTFOLIO_HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost {
                    var: "PORTFOLIO_HOST",
                    value,
                })?;
        }

        if let Some(value) = lookup("PORTFOLIO_PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: "PORTFOLIO_PORT",
                    value,
                })?;
        }

        if let Some(dark_mode) = dark_mode_from_lookup(&lookup)? {
            config.dark_mode = dark_mode;
        }

        config.cors_origins = lookup("PORTFOLIO_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Ok(config)
    }

    /// Override the bind address, e.g. from command-line flags.
    pub fn with_address(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            dark_mode: true,
            cors_origins: None,
        }
    }
}

/// Read only PORTFOLIO_DARK_MODE, for commands that never bind a socket.
pub fn dark_mode_from_env() -> Result<Option<bool>, ConfigError> {
    dark_mode_from_lookup(|key| std::env::var(key).ok())
}

pub fn dark_mode_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Option<bool>, ConfigError> {
    lookup("PORTFOLIO_DARK_MODE")
        .map(|value| {
            parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: "PORTFOLIO_DARK_MODE",
                value,
            })
        })
        .transpose()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
