//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{
        Catalog, CatalogKind, CatalogView, FilterState, Listing, Searchable, WorkflowEntry,
    };

    fn is_subsequence<T: PartialEq>(sub: &[&T], full: &[T]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|needle| it.any(|item| item == *needle))
    }

    /// Every (category, query) pair the pages can produce from their fixed
    /// selector options plus a handful of queries
    fn combinations(kind: CatalogKind) -> Vec<FilterState> {
        let queries = ["", "ci", "LABEL", "auto", "security", "go", "x", "-", "Node.js"];
        kind.options()
            .iter()
            .flat_map(|c| queries.iter().map(move |q| FilterState::new(*c, *q)))
            .collect()
    }

    #[test]
    fn test_results_are_ordered_subsequences() {
        let catalog = Catalog::builtin();

        for state in combinations(CatalogKind::Workflows) {
            let results = state.apply(catalog.workflows.entries());
            assert!(
                is_subsequence(&results, catalog.workflows.entries()),
                "order broken for {state:?}"
            );
        }

        for state in combinations(CatalogKind::Actions) {
            let results = state.apply(catalog.actions.entries());
            assert!(
                is_subsequence(&results, catalog.actions.entries()),
                "order broken for {state:?}"
            );
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::builtin();
        for state in combinations(CatalogKind::Actions) {
            let first = state.apply(catalog.actions.entries());
            let second = state.apply(catalog.actions.entries());
            assert_eq!(first, second, "not idempotent for {state:?}");
        }
    }

    #[test]
    fn test_every_result_satisfies_both_predicates() {
        let catalog = Catalog::builtin();
        for state in combinations(CatalogKind::Workflows) {
            let q = state.query.to_lowercase();
            for entry in state.apply(catalog.workflows.entries()) {
                assert!(state.category == "all" || entry.language == state.category);
                assert!(
                    entry.name().to_lowercase().contains(&q)
                        || entry.description().to_lowercase().contains(&q)
                        || entry.tags().iter().any(|t| t.to_lowercase().contains(&q))
                );
            }
        }
    }

    #[test]
    fn test_excluded_entries_fail_a_predicate() {
        let catalog = Catalog::builtin();
        for state in combinations(CatalogKind::Actions) {
            let results = state.apply(catalog.actions.entries());
            let q = state.query.to_lowercase();
            for entry in catalog.actions.entries() {
                if results.contains(&entry) {
                    continue;
                }
                let category_ok =
                    state.category == "all" || entry.tags.iter().any(|t| *t == state.category);
                let text_ok = entry.name.to_lowercase().contains(&q)
                    || entry.description.to_lowercase().contains(&q)
                    || entry.tags.iter().any(|t| t.to_lowercase().contains(&q));
                assert!(!(category_ok && text_ok), "{} wrongly excluded", entry.id);
            }
        }
    }

    #[test]
    fn test_input_never_mutated() {
        let catalog = Catalog::builtin();
        let before: Vec<WorkflowEntry> = catalog.workflows.entries().to_vec();

        for state in combinations(CatalogKind::Workflows) {
            let _ = state.apply(catalog.workflows.entries());
        }

        assert_eq!(catalog.workflows.entries(), before.as_slice());
    }

    #[test]
    fn test_reset_after_any_empty_result_restores_full_catalog() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Workflows, &catalog.workflows);

        for state in combinations(CatalogKind::Workflows) {
            view.set_category(state.category.clone());
            view.set_query(state.query.clone());

            if let Listing::Empty(_) = view.listing() {
                view.clear_filters();
                assert_eq!(view.results().len(), catalog.workflows.len());
            }
        }
    }

    #[test]
    fn test_scenarios_from_the_sample_catalog() {
        let catalog = Catalog::builtin();

        let go: Vec<&str> = catalog
            .workflows
            .filter("Go", "")
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(go, vec!["Go Build & Test", "Go Release Builder"]);

        let label: Vec<&str> = catalog
            .actions
            .filter("all", "label")
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert!(label.contains(&"Auto Label Action"));
        assert!(label.contains(&"Issue Labeler"));
        assert!(!label.contains(&"Security Scanner"));

        let rust_security = catalog.workflows.filter("Rust", "security");
        assert_eq!(rust_security.len(), 1);
        assert_eq!(rust_security[0].name, "Rust Security Scanner");
    }
}
