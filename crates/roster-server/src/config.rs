//! Server configuration
//!
//! Read from the environment (and a `.env` file, if present):
//! - `ROSTER_HOST`: bind address, default `0.0.0.0`
//! - `ROSTER_PORT`: bind port, default `8000`

use anyhow::{Context, Result};

const HOST_VAR: &str = "ROSTER_HOST";
const PORT_VAR: &str = "ROSTER_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid {PORT_VAR}: {port:?}"))?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
