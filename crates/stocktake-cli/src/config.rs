//! stocktake.toml configuration handling
//!
//! Optional file in the working directory; the `[store]` section points the
//! tracker at its inventory file and activity log. CLI flags override it,
//! and it overrides the built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "stocktake.toml";

/// `[store]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub inventory_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from("data/inventory.csv"),
            log_file: PathBuf::from("logs/inventory.log"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store: StoreConfig,
}

impl StoreConfig {
    /// Read `stocktake.toml` from the working directory, falling back to
    /// defaults when the file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(parsed.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = StoreConfig::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.inventory_file, PathBuf::from("data/inventory.csv"));
        assert_eq!(config.log_file, PathBuf::from("logs/inventory.log"));
    }

    #[test]
    fn store_section_overrides_defaults() {
        let parsed: ConfigFile = toml::from_str(
            r#"
            [store]
            inventory_file = "/var/lib/stocktake/inventory.csv"
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.store.inventory_file,
            PathBuf::from("/var/lib/stocktake/inventory.csv")
        );
        // unset keys keep their defaults
        assert_eq!(parsed.store.log_file, PathBuf::from("logs/inventory.log"));
    }

    #[test]
    fn missing_section_is_fine() {
        let parsed: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(
            parsed.store.inventory_file,
            PathBuf::from("data/inventory.csv")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[store\ninventory_file = 3").unwrap();
        assert!(StoreConfig::load_from(&path).is_err());
    }
}
