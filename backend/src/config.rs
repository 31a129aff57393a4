//! # Configuration
//!
//! Settings are read from an optional YAML file and then overridden from the
//! environment. The file is looked up at `$FAMILY_TREE_CONFIG`, falling back
//! to `family_tree.yaml` in the working directory. A missing default file is
//! not an error; every field has a default.
//!
//! ```yaml
//! bind_address: "127.0.0.1:3000"
//! log_level: info
//! seed_demo_data: true
//! age_policy: calendar_year
//! cors_origin: "http://localhost:8080"
//! avatar:
//!   card_size: 120
//!   detail_size: 300
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::age::AgePolicy;
use crate::domain::avatar::AvatarConfig;

pub const CONFIG_PATH_ENV: &str = "FAMILY_TREE_CONFIG";
pub const BIND_ADDRESS_ENV: &str = "FAMILY_TREE_ADDR";
pub const DEFAULT_CONFIG_FILE: &str = "family_tree.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the REST server listens on
    pub bind_address: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Start with the demo account and its family
    pub seed_demo_data: bool,
    /// Age calculation used by every rendered view
    pub age_policy: AgePolicy,
    /// Origin allowed by the CORS layer
    pub cors_origin: String,
    pub avatar: AvatarConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            seed_demo_data: true,
            age_policy: AgePolicy::default(),
            cors_origin: "http://localhost:8080".to_string(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `FAMILY_TREE_CONFIG` (which
    /// must exist) or from `family_tree.yaml` if present, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_file_or_default(DEFAULT_CONFIG_FILE)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a YAML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse `path` if it exists, otherwise use defaults
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from an environment-like lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup(BIND_ADDRESS_ENV) {
            self.bind_address = addr;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(config.seed_demo_data);
        assert_eq!(config.age_policy, AgePolicy::CalendarYear);
        assert_eq!(config.avatar.card_size, 120);
    }

    #[test]
    fn test_from_file_partial_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("family_tree.yaml");
        fs::write(
            &path,
            "seed_demo_data: false\nage_policy: precise\navatar:\n  detail_size: 512\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.age_policy, AgePolicy::Precise);
        assert_eq!(config.avatar.detail_size, 512);
        assert_eq!(config.avatar.card_size, 120);
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "age_policy: [unclosed").unwrap();

        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::from_file_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());

        assert!(AppConfig::from_file(dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == BIND_ADDRESS_ENV).then(|| "0.0.0.0:8000".to_string()));
        assert_eq!(config.bind_address, "0.0.0.0:8000");

        config.bind_address = "not an address".to_string();
        assert!(config.socket_addr().is_err());
    }
}
