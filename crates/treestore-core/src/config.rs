//! Configuration for the treestore CLI.
//!
//! Load order: `treestore.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "treestore.toml";

/// Top-level treestore configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub traversal: TraversalConfig,
}

/// Dataset location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset path used when the CLI is not given `--data`.
    pub path: Option<PathBuf>,
}

/// Traversal hardening settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Maximum depth for descendant and lineage walks issued by the CLI.
    /// Unset means unbounded, which does not terminate on cyclic input.
    pub depth_limit: Option<usize>,
}

/// Helper to parse an env var and apply it to an optional config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut Option<T>) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = Some(n);
    }
}

impl Config {
    /// Load config from `treestore.toml` under `dir`, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("TREESTORE_DATA", &mut config.data.path);
        env_override("TREESTORE_DEPTH_LIMIT", &mut config.traversal.depth_limit);

        Ok(config)
    }
}
