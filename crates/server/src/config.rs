use std::env;
use std::net::SocketAddr;

use anyhow::Context;

/// Path value that selects an in-memory store
pub const IN_MEMORY_DB: &str = ":memory:";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "scores.db";
pub const DEFAULT_JSON_LIMIT: usize = 16 * 1024;

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    /// Maximum accepted JSON body, in bytes
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.to_string(),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    ///
    /// - `SCORES_HOST`: bind address (default "127.0.0.1")
    /// - `SCORES_PORT`: port (default 5000)
    /// - `SCORES_DB_PATH`: SQLite file, or `:memory:` (default "scores.db")
    /// - `SCORES_JSON_LIMIT`: body size limit in bytes (default 16 KiB)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    /// Unset, blank or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            host: read("SCORES_HOST").unwrap_or(defaults.host),
            port: read("SCORES_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            db_path: read("SCORES_DB_PATH").unwrap_or(defaults.db_path),
            json_limit: read("SCORES_JSON_LIMIT")
                .and_then(|s| s.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.json_limit),
        }
    }

    pub fn in_memory(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
