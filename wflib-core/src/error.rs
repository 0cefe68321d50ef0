//! Library error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the filter core.
///
/// Filtering itself never fails: unknown categories and odd queries simply
/// produce empty results. These variants cover loading catalogs and
/// configuration, looking things up by id, and clipboard side actions.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file: {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog file
    #[error("Failed to parse catalog YAML")]
    CatalogParse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Two entries of the same catalog share an id
    #[error("Duplicate {kind} id in catalog: '{id}'\n\nEvery entry id must be unique within its catalog.")]
    DuplicateId { kind: &'static str, id: String },

    /// Failed to read the configuration file
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Could not determine where configuration lives
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// No workflow or action with this id
    #[error("No workflow template or custom action with id '{0}'")]
    UnknownEntry(String),

    /// Tab id not present on a tabbed page
    #[error("Unknown tab '{tab}' on page '{page}'. Available: {available}")]
    UnknownTab {
        page: String,
        tab: String,
        available: String,
    },

    /// Clipboard copy failed
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
