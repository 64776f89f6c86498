//! Server configuration parsed from environment variables.

use std::net::SocketAddr;

use axum::http::HeaderValue;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid origin in ALLOWED_ORIGINS: {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ALLOWED_ORIGINS`: comma-separated list, default the local dev
    ///   frontend on port 5173
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("PORT").ok().as_deref(), std::env::var("ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse(port: Option<&str>, origins: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { port: parse_port(port)?, allowed_origins: parse_origins(origins)? })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_origins(raw: Option<&str>) -> Result<Vec<HeaderValue>, ConfigError> {
    let entries: Vec<&str> = match raw {
        Some(list) if !list.trim().is_empty() => {
            list.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
        }
        _ => DEFAULT_ALLOWED_ORIGINS.to_vec(),
    };
    entries.into_iter().map(parse_origin).collect()
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    let origin = origin.trim_end_matches('/');
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::InvalidOrigin(origin.to_owned()));
    }
    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_owned()))
}
