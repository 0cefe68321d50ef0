//! Integration tests for static pages and their text rendering

use pretty_assertions::assert_eq;
use wflib_core::catalog::Catalog;
use wflib_core::content::{
    developer_tools_page, documentation_page, examples_page, ContentBlock, Dashboard,
    ExpandState, Page, DEFAULT_EXPANDED,
};
use wflib_core::render;

#[test]
fn test_every_tab_of_every_page_renders() {
    let expand = ExpandState::default();
    for page in [documentation_page(), developer_tools_page(), examples_page()] {
        for tab in &page.tabs {
            let lines = render::tabbed_page(&page, tab, &expand);
            assert_eq!(lines[0], page.title);
            assert!(
                lines[3].contains(&format!("[{}]", tab.title)),
                "tab bar does not mark {}",
                tab.id
            );
        }
    }
}

#[test]
fn test_expanding_an_accordion_reveals_its_snippet() {
    let page = documentation_page();
    let tab = page.tab("getting-started").unwrap();

    let mut expand = ExpandState::with_expanded(DEFAULT_EXPANDED);
    let closed = render::content_blocks(&tab.blocks, &expand);
    assert!(!closed.iter().any(|l| l.contains("name: Basic CI")));

    expand.toggle("setup");
    let open = render::content_blocks(&tab.blocks, &expand);
    assert!(open.iter().any(|l| l.contains("name: Basic CI")));
    assert!(open.contains(&"▾ Setting Up Your First Workflow".to_string()));
    // intro stays open
    assert!(open.contains(&"▾ Introduction to GitHub Actions".to_string()));
}

#[test]
fn test_pages_serialize_as_tagged_blocks() {
    let page = examples_page();
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["default_tab"], "ci-pipelines");
    assert_eq!(json["tabs"][0]["blocks"][0]["type"], "heading");

    let first = &page.tabs[0].blocks[0];
    assert!(matches!(first, ContentBlock::Heading(_)));
}

#[test]
fn test_dashboard_renders_live_counts() {
    let catalog = Catalog::builtin();
    let dashboard = Dashboard::from_catalog(&catalog);
    let lines = render::dashboard(&dashboard);

    assert_eq!(lines[0], "GitHub Actions Workflow Library");
    assert!(lines.iter().any(|l| l.starts_with("Workflow Templates") && l.ends_with('9')));
    assert!(lines.iter().any(|l| l.contains("sarah_dev")));
    assert!(lines.contains(&"## Ready to supercharge your CI/CD?".to_string()));
}

#[test]
fn test_navigation_lists_every_route() {
    let lines = render::navigation(None);
    for (line, page) in lines.iter().zip(Page::all()) {
        assert!(line.contains(page.path()));
        assert!(line.ends_with(page.title()));
    }
}
