//! Configuration management

use crate::core::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension of design files
pub const DESIGN_SUFFIX: &str = "mpar";

/// Extension of measurement files
pub const MEASUREMENT_SUFFIX: &str = "rpar";

/// Piezo class assumed when nothing better is known
pub const DEFAULT_PIEZO: &str = "42_LT";

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory (or single file) holding design files
    pub design_root: PathBuf,
    /// Directory (or single file) holding measurement files
    pub measurement_root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the catalogs and link table are written to
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// JSON export of the process table; lookups are skipped when unset
    pub table: Option<PathBuf>,
    /// Piezo used when the table has no usable value
    pub default_piezo: String,
    /// Drop records whose looked-up version is not a number above one
    pub filter_by_version: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            design_root: PathBuf::from("local"),
            measurement_root: PathBuf::from("local"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            table: None,
            default_piezo: DEFAULT_PIEZO.to_string(),
            filter_by_version: false,
        }
    }
}

impl Config {
    /// Load from an explicit file (which must exist) or the default location
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let config_path = Self::config_path()?;
                if config_path.exists() {
                    Self::from_file(&config_path)?
                } else {
                    Config::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from an explicit TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Override roots and table from the process environment
    fn apply_env(&mut self) {
        if let Ok(root) = std::env::var("STACKLINK_DESIGN_ROOT") {
            self.scan.design_root = PathBuf::from(root);
        }
        if let Ok(root) = std::env::var("STACKLINK_MEASUREMENT_ROOT") {
            self.scan.measurement_root = PathBuf::from(root);
        }
        if let Ok(table) = std::env::var("STACKLINK_TABLE") {
            self.lookup.table = Some(PathBuf::from(table));
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = Self::stacklink_home()?;
        Ok(home.join("config.toml"))
    }

    /// Get the stacklink home directory
    pub fn stacklink_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("STACKLINK_HOME") {
            return Ok(PathBuf::from(home));
        }

        ProjectDirs::from("dev", "stacklink", "stacklink")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not determine stacklink home directory".to_string(),
            })
    }

    /// Default path of the persisted design catalog
    pub fn design_catalog_path(&self) -> PathBuf {
        self.output.dir.join("mpar.json")
    }

    /// Default path of the persisted measurement catalog
    pub fn measurement_catalog_path(&self) -> PathBuf {
        self.output.dir.join("rpar.json")
    }

    /// Default path of the persisted link table
    pub fn link_table_path(&self) -> PathBuf {
        self.output.dir.join("link_mpar.json")
    }
}
