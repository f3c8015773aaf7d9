use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Catalog configuration, usually read from a TOML file.
///
/// ```toml
/// [log]
/// level = "debug"
///
/// [seed]
/// files = ["trucks.json"]
/// fail_fast = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub log: LogConfig,
    pub seed: SeedConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// JSON files replayed into the store at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub files: Vec<PathBuf>,
    /// Abort the import at the first rejected record.
    pub fail_fast: bool,
}

impl CatalogConfig {
    pub fn from_toml_str(s: &str) -> CatalogResult<Self> {
        toml::from_str(s).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative seed paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&text)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;

        if let Some(dir) = path.parent() {
            for file in &mut config.seed.files {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }
        Ok(config)
    }
}
