//! Catalog entry types
//!
//! Workflow templates and custom actions share the same searchable surface
//! (name, description, tags) and differ only in the field used to classify
//! them: a workflow has a single `language`, an action is classified by its
//! `tags`.

use serde::{Deserialize, Serialize};

/// Sentinel category that matches every entry
pub const ALL_CATEGORIES: &str = "all";

/// Anything the filter/search engine can narrow down.
pub trait Searchable {
    /// Display name
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Searchable labels
    fn tags(&self) -> &[String];

    /// Exact, case-sensitive category test (the `"all"` sentinel is handled
    /// by the engine, not here)
    fn matches_category(&self, category: &str) -> bool;
}

/// An entry that can live in a [`super::CatalogStore`].
pub trait CatalogItem: Searchable {
    /// Human name of the entry kind, used in messages
    const KIND: &'static str;

    /// Unique key within its catalog
    fn id(&self) -> &str;
}

/// A workflow template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEntry {
    /// Unique key within the workflow catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Ecosystem tag (e.g. "Rust")
    pub language: String,

    /// Star count
    #[serde(default)]
    pub star_count: u64,

    /// Fork count
    #[serde(default)]
    pub fork_count: u64,

    /// Labels, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Path of the template file in the library
    pub source_path: String,

    /// Template body (may be empty)
    #[serde(default)]
    pub content: String,
}

/// A reusable custom action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntry {
    /// Unique key within the action catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Display handle for the card icon
    #[serde(default)]
    pub icon: ActionIcon,

    /// Star count
    #[serde(default)]
    pub star_count: u64,

    /// Download count
    #[serde(default)]
    pub download_count: u64,

    /// Labels, in display order. Category filtering matches against these.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Path of the action manifest in the library
    pub source_path: String,

    /// Manifest body (may be empty)
    #[serde(default)]
    pub content: String,
}

/// Opaque icon handle for an action card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionIcon {
    pub glyph: IconGlyph,
    pub tint: Tint,
}

impl ActionIcon {
    pub const fn new(glyph: IconGlyph, tint: Tint) -> Self {
        Self { glyph, tint }
    }
}

/// Pictogram shown on an action card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Tag,
    PullRequest,
    Shield,
    Merge,
    #[default]
    Tool,
    File,
    Server,
    Branch,
}

impl IconGlyph {
    /// Single-cell symbol for terminal output
    pub fn symbol(&self) -> &'static str {
        match self {
            IconGlyph::Tag => "#",
            IconGlyph::PullRequest => "⇄",
            IconGlyph::Shield => "◈",
            IconGlyph::Merge => "⑂",
            IconGlyph::Tool => "⚒",
            IconGlyph::File => "▤",
            IconGlyph::Server => "▣",
            IconGlyph::Branch => "⎇",
        }
    }
}

/// Display colour of an icon or language marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Green,
    Blue,
    Red,
    Purple,
    Orange,
    Teal,
    Yellow,
    Cyan,
    #[default]
    Gray,
}

impl WorkflowEntry {
    /// Marker colour for the language badge
    pub fn language_tint(&self) -> Tint {
        match self.language.as_str() {
            "JavaScript" => Tint::Yellow,
            "Python" => Tint::Blue,
            "Go" => Tint::Cyan,
            _ => Tint::Red,
        }
    }

    /// Tags as a comma-separated string
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// First line of the description
    pub fn short_description(&self) -> &str {
        first_line(&self.description)
    }
}

impl ActionEntry {
    /// Tags as a comma-separated string
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// First line of the description
    pub fn short_description(&self) -> &str {
        first_line(&self.description)
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text).trim()
}

impl CatalogItem for WorkflowEntry {
    const KIND: &'static str = "workflow";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for ActionEntry {
    const KIND: &'static str = "action";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for WorkflowEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Workflows are classified by language, not by tag
    fn matches_category(&self, category: &str) -> bool {
        self.language == category
    }
}

impl Searchable for ActionEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Actions have no language; a category is one of their tags
    fn matches_category(&self, category: &str) -> bool {
        self.tags.iter().any(|tag| tag == category)
    }
}
