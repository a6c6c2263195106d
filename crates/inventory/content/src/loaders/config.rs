//! Inventory configuration loader.

use std::path::Path;

use inventory_core::InventoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Environment variable overriding [`InventoryConfig::base_capacity`].
pub const BASE_CAPACITY_ENV: &str = "INVENTORY_BASE_CAPACITY";

/// Loader for inventory configuration from TOML files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`InventoryConfig::default`].
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<InventoryConfig> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory config TOML: {}", e))
    }

    /// Default configuration with process environment overrides applied.
    ///
    /// Environment variables:
    /// - `INVENTORY_BASE_CAPACITY` - Weight budget (default: 50)
    pub fn from_env() -> InventoryConfig {
        Self::with_overrides(InventoryConfig::default(), |key| std::env::var(key).ok())
    }

    /// Load a TOML file, then apply process environment overrides on top.
    pub fn load_with_env(path: &Path) -> LoadResult<InventoryConfig> {
        Self::load_with_overrides(path, |key| std::env::var(key).ok())
    }

    /// Load a TOML file, then apply overrides from `lookup` on top.
    pub fn load_with_overrides<F>(path: &Path, lookup: F) -> LoadResult<InventoryConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::load(path)?;
        Ok(Self::with_overrides(config, lookup))
    }

    /// Apply overrides from `lookup`; unparsable values are ignored.
    pub fn with_overrides<F>(mut config: InventoryConfig, lookup: F) -> InventoryConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_CAPACITY_ENV).map(|raw| raw.trim().parse::<u32>()) {
            Some(Ok(capacity)) => config.base_capacity = capacity,
            Some(Err(err)) => {
                tracing::warn!(key = BASE_CAPACITY_ENV, %err, "ignoring invalid override")
            }
            None => {}
        }
        config
    }
}
