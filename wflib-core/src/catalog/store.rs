//! Catalog stores
//!
//! A store owns an immutable, ordered sequence of entries. It is built once
//! at startup, either from the built-in datasets or from a catalog file, and
//! only ever handed out by shared reference afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::builtin::{custom_actions, workflow_templates};
use super::entry::{ActionEntry, CatalogItem, WorkflowEntry};
use super::filter::filter_entries;
use crate::error::{LibraryError, Result};

/// Immutable ordered sequence of catalog entries
#[derive(Debug, Clone)]
pub struct CatalogStore<T> {
    entries: Vec<T>,
}

impl<T: CatalogItem> CatalogStore<T> {
    /// Take ownership of `entries`, rejecting duplicate ids
    pub fn new(entries: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(LibraryError::DuplicateId {
                    kind: T::KIND,
                    id: entry.id().to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// All entries in display order
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Run the filter/search engine over this store
    pub fn filter(&self, category: &str, query: &str) -> Vec<&T> {
        filter_entries(&self.entries, category, query)
    }
}

/// On-disk shape of an external catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub workflows: Vec<WorkflowEntry>,

    #[serde(default)]
    pub actions: Vec<ActionEntry>,
}

/// Both catalogs, as supplied at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    pub workflows: CatalogStore<WorkflowEntry>,
    pub actions: CatalogStore<ActionEntry>,
}

/// Borrowed reference to either kind of entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef<'a> {
    Workflow(&'a WorkflowEntry),
    Action(&'a ActionEntry),
}

impl Catalog {
    /// The datasets shipped with the library
    pub fn builtin() -> Self {
        Self {
            workflows: CatalogStore {
                entries: workflow_templates(),
            },
            actions: CatalogStore {
                entries: custom_actions(),
            },
        }
    }

    /// Build from an already parsed catalog file
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        Ok(Self {
            workflows: CatalogStore::new(file.workflows)?,
            actions: CatalogStore::new(file.actions)?,
        })
    }

    /// Parse a catalog from YAML (JSON is accepted too, being a YAML subset)
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml_ng::from_str(content)
            .map_err(|source| LibraryError::CatalogParse { source })?;
        Self::from_file(file)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LibraryError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            workflows = catalog.workflows.len(),
            actions = catalog.actions.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in datasets
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Find a workflow or action by id. Workflows are searched first.
    pub fn find(&self, id: &str) -> Option<EntryRef<'_>> {
        self.workflows
            .get(id)
            .map(EntryRef::Workflow)
            .or_else(|| self.actions.get(id).map(EntryRef::Action))
    }

    /// Like [`Catalog::find`], but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<EntryRef<'_>> {
        self.find(id)
            .ok_or_else(|| LibraryError::UnknownEntry(id.to_string()))
    }
}
