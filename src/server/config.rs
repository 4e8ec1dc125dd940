//! Server configuration types

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Store location configuration
///
/// The path has no default: server startup and the seed command halt when it
/// is not provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub path: Option<String>,
}

impl DatabaseConfig {
    /// The configured store path, or an error naming the variable to set
    pub fn require_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => bail!(
                "database path is not configured; set AGORA_DATABASE__PATH \
                 or database.path in config/local.toml"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_require_path_missing() {
        let config = DatabaseConfig::default();
        let err = config.require_path().unwrap_err();
        assert!(err.to_string().contains("AGORA_DATABASE__PATH"));
    }

    #[test]
    fn test_require_path_present() {
        let config = DatabaseConfig {
            path: Some("data/agora.db".to_string()),
        };
        assert_eq!(
            config.require_path().unwrap(),
            PathBuf::from("data/agora.db")
        );
    }
}
