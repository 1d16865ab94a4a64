//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use client::app::normalize_base_path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5233;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },

    #[error("invalid bind address {0:?}")]
    InvalidAddr(String),

    #[error("invalid BASE_PATH {0:?}: must be a plain URL path")]
    InvalidBasePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount prefix for the page, normalized: `""` or `"/a/b"`.
    pub base_path: String,
}

impl ServerConfig {
    /// Build config from process environment.
    ///
    /// Optional:
    /// - `HOST`: bind host, default `0.0.0.0`
    /// - `PORT`: bind port, default `5233`
    /// - `BASE_PATH`: mount prefix, default `""` (site root)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let base_path = match lookup("BASE_PATH") {
            Some(raw) => parse_base_path(&raw)?,
            None => String::new(),
        };
        Ok(Self { host, port, base_path })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn parse_base_path(raw: &str) -> Result<String, ConfigError> {
    let invalid = |c: char| c.is_whitespace() || matches!(c, '?' | '#' | '{' | '}' | '*');
    if raw.trim().contains(invalid) {
        return Err(ConfigError::InvalidBasePath(raw.to_owned()));
    }
    Ok(normalize_base_path(raw))
}
