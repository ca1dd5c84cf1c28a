//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "../widget/pkg";
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 7200;
pub const DEFAULT_QUEUE_DEPTH: usize = 256;
pub const DEFAULT_MAX_PENDING: usize = 4096;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the `wasm-bindgen` output served under `/pkg`.
    pub assets_dir: PathBuf,
    /// How long an issued channel token may wait before it is connected.
    pub token_ttl: Duration,
    /// Per-client queue of pushed messages awaiting delivery.
    pub queue_depth: usize,
    /// Upper bound on issued tokens that are not yet connected. The oldest
    /// token is evicted when a new one would exceed it.
    pub max_pending: usize,
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            queue_depth: DEFAULT_QUEUE_DEPTH,
            max_pending: DEFAULT_MAX_PENDING,
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_ASSETS_DIR`: default `../widget/pkg`
    /// - `CHANNEL_TOKEN_TTL_SECS`: default 7200
    /// - `CHANNEL_QUEUE_DEPTH`: default 256
    /// - `CHANNEL_MAX_PENDING`: default 4096
    /// - `COOKIE_SECURE`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a variable that is set but does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let assets_dir = lookup("CHAT_ASSETS_DIR").map_or(defaults.assets_dir, PathBuf::from);
        let token_ttl = parse_var::<u64>(&lookup, "CHANNEL_TOKEN_TTL_SECS")?
            .map_or(defaults.token_ttl, Duration::from_secs);
        let queue_depth = parse_nonzero(&lookup, "CHANNEL_QUEUE_DEPTH")?.unwrap_or(defaults.queue_depth);
        let max_pending = parse_nonzero(&lookup, "CHANNEL_MAX_PENDING")?.unwrap_or(defaults.max_pending);
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?
            }
            None => defaults.cookie_secure,
        };

        Ok(Self { port, assets_dir, token_ttl, queue_depth, max_pending, cookie_secure })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(None),
    }
}

fn parse_nonzero(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<usize>, ConfigError> {
    match parse_var::<usize>(lookup, var)? {
        Some(0) => Err(ConfigError::Invalid { var, value: "0".into() }),
        other => Ok(other),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
