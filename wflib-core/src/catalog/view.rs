//! Catalog page views
//!
//! A view binds a store to the page's current [`FilterState`]. The filter
//! result is recomputed on every read; nothing is cached between changes.

use super::builtin::{ACTION_CATEGORIES, WORKFLOW_LANGUAGES};
use super::entry::CatalogItem;
use super::filter::FilterState;
use super::store::CatalogStore;

/// Which catalog page a view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Workflows,
    Actions,
}

impl CatalogKind {
    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => "Workflow Templates",
            CatalogKind::Actions => "Custom GitHub Actions",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => {
                "Browse our collection of production-ready GitHub Actions workflow templates"
            }
            CatalogKind::Actions => {
                "Browse our collection of reusable GitHub Actions for common automation tasks"
            }
        }
    }

    /// Label shown next to the selector
    pub fn selector_label(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => "Filter by language:",
            CatalogKind::Actions => "Filter by category:",
        }
    }

    /// Fixed selector options, `"all"` first
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            CatalogKind::Workflows => &WORKFLOW_LANGUAGES,
            CatalogKind::Actions => &ACTION_CATEGORIES,
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => "Search workflows...",
            CatalogKind::Actions => "Search actions...",
        }
    }

    /// Message shown when nothing survives the filters
    pub fn empty_message(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => "No workflows match your filters.",
            CatalogKind::Actions => "No actions match your filters.",
        }
    }

    /// Call to action on each summary card
    pub fn card_action(&self) -> &'static str {
        match self {
            CatalogKind::Workflows => "View Details",
            CatalogKind::Actions => "View Action",
        }
    }
}

/// Display label for a selector option
pub fn option_label(option: &str) -> &str {
    if option == super::ALL_CATEGORIES {
        "All"
    } else {
        option
    }
}

/// Empty-state block: message plus the reset control's label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub message: &'static str,
    pub reset_label: &'static str,
}

/// What a catalog page shows for its current filters
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a, T> {
    /// One summary card per surviving entry, in catalog order
    Cards(Vec<&'a T>),
    /// Nothing survived
    Empty(EmptyState),
}

/// A catalog page: store plus current filter inputs
#[derive(Debug)]
pub struct CatalogView<'a, T> {
    kind: CatalogKind,
    store: &'a CatalogStore<T>,
    filter: FilterState,
}

impl<'a, T: CatalogItem> CatalogView<'a, T> {
    pub fn new(kind: CatalogKind, store: &'a CatalogStore<T>) -> Self {
        Self {
            kind,
            store,
            filter: FilterState::default(),
        }
    }

    /// Start from the given filter inputs
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// The "Clear filters" action
    pub fn clear_filters(&mut self) {
        self.filter.reset();
    }

    /// Filtered entries for the current inputs
    pub fn results(&self) -> Vec<&'a T> {
        self.store.filter(&self.filter.category, &self.filter.query)
    }

    pub fn listing(&self) -> Listing<'a, T> {
        let results = self.results();
        if results.is_empty() {
            Listing::Empty(EmptyState {
                message: self.kind.empty_message(),
                reset_label: "Clear filters",
            })
        } else {
            Listing::Cards(results)
        }
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_state_and_clear_filters_round_trip() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Actions, &catalog.actions);

        view.set_category("Deployment");
        view.set_query("zzz");

        match view.listing() {
            Listing::Empty(state) => {
                assert_eq!(state.message, "No actions match your filters.");
                assert_eq!(state.reset_label, "Clear filters");
            }
            Listing::Cards(cards) => panic!("expected empty listing, got {} cards", cards.len()),
        }

        view.clear_filters();
        assert!(view.filter().is_default());

        let all: Vec<&str> = view.results().iter().map(|a| a.id.as_str()).collect();
        let expected: Vec<&str> = catalog.actions.entries().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_selector_options_are_fixed() {
        assert_eq!(
            CatalogKind::Workflows.options(),
            &["all", "JavaScript", "Python", "Go", "Rust"]
        );
        assert_eq!(
            CatalogKind::Actions.options(),
            &["all", "PR Automation", "Issue Management", "Deployment", "Documentation"]
        );
        assert_eq!(option_label("all"), "All");
        assert_eq!(option_label("Go"), "Go");
    }

    #[test]
    fn test_fixed_option_with_no_matching_entries_is_empty_not_error() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Actions, &catalog.actions);
        // "Documentation" is a curated option; only docs-generator carries it
        view.set_category("Documentation");
        assert_eq!(view.results().len(), 1);

        view.set_category("Release");
        assert!(matches!(view.listing(), Listing::Empty(_)));
    }

    #[test]
    fn test_view_recomputes_on_each_change() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Workflows, &catalog.workflows);

        view.set_query("p");
        let broad = view.results().len();
        view.set_query("py");
        let narrow = view.results().len();
        view.set_query("pyp");
        let narrowest = view.results().len();

        assert!(broad >= narrow);
        assert!(narrow >= narrowest);
        assert_eq!(narrowest, 1); // Python Package Publishing, via the "PyPI" tag/description
    }
}
