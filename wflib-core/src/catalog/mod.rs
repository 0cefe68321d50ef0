//! Workflow Library catalog - stores, filter/search engine and page views
//!
//! Two catalogs are browsed the same way:
//! - Workflow templates, narrowed by `language`
//! - Custom actions, narrowed by one of their `tags`
//!
//! # Architecture
//!
//! ```text
//! Catalog file / built-in data
//!            │
//!            ▼
//!     CatalogStore<T>        ← immutable, ordered
//!            │
//!            ▼
//!     filter_entries()       ← category AND free-text, stable
//!            │
//!            ▼
//!     CatalogView<T>         ← cards, or empty state + "Clear filters"
//! ```

mod builtin;
mod entry;
mod filter;
mod store;
mod view;

pub use builtin::{custom_actions, workflow_templates, ACTION_CATEGORIES, WORKFLOW_LANGUAGES};
pub use entry::{
    ActionEntry, ActionIcon, CatalogItem, IconGlyph, Searchable, Tint, WorkflowEntry,
    ALL_CATEGORIES,
};
pub use filter::{filter_entries, matches_category, matches_query, FilterState};
pub use store::{Catalog, CatalogFile, CatalogStore, EntryRef};
pub use view::{option_label, CatalogKind, CatalogView, EmptyState, Listing};

#[cfg(test)]
mod tests;
