//! Filter/search engine
//!
//! A single stateless pass over the catalog: an entry survives when it
//! passes both the category predicate and the free-text predicate. Survivors
//! keep their original relative order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::{Searchable, ALL_CATEGORIES};

/// Filter entries by category and free-text query.
///
/// `category == "all"` matches everything; any other value is compared
/// exactly by [`Searchable::matches_category`]. The query is matched
/// case-insensitively as a plain substring of the name, the description,
/// or any tag; an empty query matches everything.
pub fn filter_entries<'a, T: Searchable>(
    entries: &'a [T],
    category: &str,
    query: &str,
) -> Vec<&'a T> {
    let query_lower = query.to_lowercase();

    let results: Vec<&T> = entries
        .iter()
        .filter(|entry| matches_category(*entry, category) && matches_query(*entry, &query_lower))
        .collect();

    debug!(
        category,
        query,
        total = entries.len(),
        matched = results.len(),
        "Filtered catalog"
    );

    results
}

/// Category predicate, with the `"all"` sentinel.
pub fn matches_category<T: Searchable>(entry: &T, category: &str) -> bool {
    category == ALL_CATEGORIES || entry.matches_category(category)
}

/// Text predicate. `query_lower` must already be lower-cased.
pub fn matches_query<T: Searchable>(entry: &T, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    let matches_name = entry.name().to_lowercase().contains(query_lower);
    let matches_desc = entry.description().to_lowercase().contains(query_lower);
    let matches_tag = entry
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(query_lower));

    matches_name || matches_desc || matches_tag
}

/// The two observable inputs of a catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category or language, `"all"` for no narrowing
    pub category: String,

    /// Free-text query
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// Clear filters: category back to `"all"`, query back to empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no narrowing is in effect
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORIES && self.query.is_empty()
    }

    /// Run the engine with this state
    pub fn apply<'a, T: Searchable>(&self, entries: &'a [T]) -> Vec<&'a T> {
        filter_entries(entries, &self.category, &self.query)
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::catalog::builtin::{custom_actions, workflow_templates};
    use crate::catalog::{ActionEntry, WorkflowEntry};

    fn names<T: Searchable>(results: &[&T]) -> Vec<String> {
        results.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_identity_returns_everything_in_order() {
        let workflows = workflow_templates();
        let results = filter_entries(&workflows, "all", "");
        assert_eq!(results.len(), workflows.len());
        for (result, original) in results.iter().zip(workflows.iter()) {
            assert_eq!(result.id, original.id);
        }
    }

    #[test]
    fn test_language_filter_go() {
        let workflows = workflow_templates();
        let results = filter_entries(&workflows, "Go", "");
        assert_eq!(
            names(&results),
            vec!["Go Build & Test", "Go Release Builder"]
        );
    }

    #[test]
    fn test_search_label_over_actions() {
        let actions = custom_actions();
        let results = filter_entries(&actions, "all", "label");
        let found = names(&results);

        assert!(found.contains(&"Auto Label Action".to_string()));
        assert!(found.contains(&"Issue Labeler".to_string()));
        assert!(!found.contains(&"Security Scanner".to_string()));
    }

    #[test]
    fn test_language_and_query_combined() {
        let workflows = workflow_templates();
        let results = filter_entries(&workflows, "Rust", "security");
        assert_eq!(names(&results), vec!["Rust Security Scanner"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let workflows = workflow_templates();
        let upper = filter_entries(&workflows, "all", "PYTHON");
        let lower = filter_entries(&workflows, "all", "python");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let workflows = workflow_templates();
        assert!(filter_entries(&workflows, "go", "").is_empty());

        let actions = custom_actions();
        assert!(filter_entries(&actions, "pr automation", "").is_empty());
        assert_eq!(filter_entries(&actions, "PR Automation", "").len(), 3);
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let actions = custom_actions();
        assert!(filter_entries(&actions, "Documentation Hub", "").is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let workflows = workflow_templates();
        assert!(filter_entries(&workflows, "all", ".*").is_empty());
        // "&" appears literally in "Go Build & Test" and "Docker Build & Push"
        assert_eq!(filter_entries(&workflows, "all", "&").len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let workflows: Vec<WorkflowEntry> = Vec::new();
        assert!(filter_entries(&workflows, "all", "").is_empty());
        assert!(filter_entries(&workflows, "Go", "ci").is_empty());
    }

    #[test]
    fn test_entry_without_tags_is_tolerated() {
        let actions = vec![ActionEntry {
            id: "bare".to_string(),
            name: "Bare Action".to_string(),
            description: "No labels at all".to_string(),
            icon: Default::default(),
            star_count: 0,
            download_count: 0,
            tags: vec![],
            source_path: "actions/bare/action.yml".to_string(),
            content: String::new(),
        }];

        assert_eq!(filter_entries(&actions, "all", "labels").len(), 1);
        assert!(filter_entries(&actions, "all", "missing").is_empty());
        assert!(filter_entries(&actions, "Labeling", "").is_empty());
    }

    #[test]
    fn test_tag_substring_matches() {
        let workflows = workflow_templates();
        // Only reachable through the "Cross-compilation" / "Cross-platform" tags
        // and one description
        let results = filter_entries(&workflows, "all", "cross-");
        assert_eq!(
            names(&results),
            vec!["Rust CI Pipeline", "Go Release Builder"]
        );
    }

    #[test]
    fn test_filter_state_reset() {
        let mut state = FilterState::new("Go", "nothing-matches-this");
        assert!(!state.is_default());

        let workflows = workflow_templates();
        assert!(state.apply(&workflows).is_empty());

        state.reset();
        assert!(state.is_default());
        assert_eq!(state.apply(&workflows).len(), workflows.len());
    }
}
