//! Server configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use irr_math::solvers::RootFinderConfig;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Longest cash-flow series accepted by `/solve`.
    ///
    /// Solve time grows with the cube of the series length; 500 periods
    /// take well under a second.
    #[serde(default = "default_max_periods")]
    pub max_periods: usize,

    /// Root finder settings
    #[serde(default)]
    pub solver: RootFinderConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_periods() -> usize {
    500
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_periods: default_max_periods(),
            solver: RootFinderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Socket address string (`host:port`).
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
