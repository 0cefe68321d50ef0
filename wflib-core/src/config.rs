//! User configuration discovery
//!
//! An optional YAML file in the platform config directory. Every key is
//! optional and a missing file is the same as an empty one.
//!
//! Resolution order for the catalog location:
//! 1. `--catalog` flag
//! 2. `WFLIB_CATALOG` environment variable
//! 3. `catalog_path` in the config file
//! 4. Built-in datasets

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{LibraryError, Result};

/// Environment variable naming an external catalog file
pub const CATALOG_ENV: &str = "WFLIB_CATALOG";

/// File name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// How list commands print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Contents of `config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// External catalog file; relative paths resolve against the config file
    pub catalog_path: Option<PathBuf>,

    pub default_output: OutputFormat,

    /// Colours in the interactive browser
    pub color: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_output: OutputFormat::Table,
            color: true,
        }
    }
}

impl LibraryConfig {
    /// Load the config, from `override_path` if given or from the default
    /// location otherwise.
    ///
    /// An explicit path must exist. The default location may be absent.
    pub fn discover(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Ok(path) if path.exists() => Self::load(&path),
                Ok(path) => {
                    debug!("No config file at {}", path.display());
                    Ok(Self::default())
                }
                Err(e) => {
                    debug!("{e}; using default config");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        trace!("Reading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| LibraryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_yaml(&content, path)?;

        // Relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        debug!(?config, "Loaded config");
        Ok(config)
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(content).map_err(|source| LibraryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick the catalog file to load, if any.
    ///
    /// `flag` and `env` are the `--catalog` flag and the environment
    /// variable; the first one set wins over the config file.
    pub fn catalog_source(&self, flag: Option<&Path>, env: Option<&Path>) -> Option<PathBuf> {
        flag.or(env)
            .or(self.catalog_path.as_deref())
            .map(Path::to_path_buf)
    }
}

/// The platform config directory for this tool
pub fn config_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("dev", "wflib", "wflib")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| dirs::config_dir().map(|d| d.join("wflib")))
        .ok_or(LibraryError::NoConfigDir)
}

/// Where `config.yaml` is looked up by default
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
