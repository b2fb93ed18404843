//! Server configuration
//!
//! # Environment Variables
//!
//! - `HOST`: bind address, IP literal or hostname (default: `0.0.0.0`)
//! - `PORT`: listening port (default: `3001`, also used when empty)
//! - `LOG_LEVEL`: fallback filter when `RUST_LOG` is unset (default: `info`)
//! - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
//!
//! A `.env` file in the working directory is loaded first when present.
//! Variables already set in the process environment take precedence.

use serde::{Deserialize, Deserializer};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3001;

/// Configuration loaded from environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 3001)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,

    /// Log level (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "json" or "pretty" (default: pretty)
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Blank `PORT` falls back to the default instead of failing to parse.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    raw.parse().map_err(serde::de::Error::custom)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(envy::from_env()?)
    }

    /// Address the server binds to.
    ///
    /// IP literals are used as-is; hostnames are resolved and the first
    /// address returned wins.
    pub async fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| ServerError::UnresolvedHost(self.host.clone()))
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Loads `./.env` into the process environment.
///
/// Returns the path that was loaded, or `None` when there is no `.env` file.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    load_dotenv_from(Path::new(".env"))
}

/// Loads the given dotenv file into the process environment.
///
/// A missing file is not an error. Runs before logging is initialised, so
/// the caller reports the outcome.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
