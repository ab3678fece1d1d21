//! Application configuration

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::api::cors::DEFAULT_ALLOWED_ORIGINS;

const DEFAULT_PORT: u16 = 1234;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Origins allowed to call the API from a browser
    pub cors_allowed_origins: Vec<String>,
    /// Seed file; the bundled seed is used when unset
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            cors_allowed_origins,
            seed_path: lookup("MOVIES_SEED_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| format!("Invalid SERVER_HOST {:?}", self.server_host))
    }
}
