//! Dashboard summary

use serde::Serialize;
use std::collections::BTreeSet;

use super::{developer_tools_page, InfoCard};
use crate::catalog::{Catalog, WorkflowEntry};

/// Number of workflows listed under "Popular Workflows"
pub const POPULAR_COUNT: usize = 4;

/// One headline number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub name: &'static str,
    pub value: usize,
}

/// A line of the recent activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub user: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        action: "Added new Python test workflow",
        time: "2 hours ago",
        user: "sarah_dev",
    },
    Activity {
        action: "Updated Node.js deployment flow",
        time: "5 hours ago",
        user: "mike_ops",
    },
    Activity {
        action: "Fixed Go linting workflow",
        time: "1 day ago",
        user: "alex_code",
    },
    Activity {
        action: "Added Rust security scanning",
        time: "2 days ago",
        user: "jen_security",
    },
];

/// Everything the dashboard page shows
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: Vec<Stat>,
    pub popular: Vec<&'a WorkflowEntry>,
    pub activity: &'static [Activity],
    pub call_to_action: InfoCard,
}

impl<'a> Dashboard<'a> {
    /// Summarize `catalog`
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        let languages: BTreeSet<&str> = catalog
            .workflows
            .entries()
            .iter()
            .map(|w| w.language.as_str())
            .collect();

        let stats = vec![
            Stat {
                name: "Workflow Templates",
                value: catalog.workflows.len(),
            },
            Stat {
                name: "Custom Actions",
                value: catalog.actions.len(),
            },
            Stat {
                name: "Languages Supported",
                value: languages.len(),
            },
            Stat {
                name: "Developer Tools",
                value: developer_tools_page().tabs.len(),
            },
        ];

        Self {
            title: super::APP_TITLE,
            subtitle: "A curated collection of production-ready CI/CD templates and automation workflows",
            stats,
            popular: popular_workflows(catalog.workflows.entries(), POPULAR_COUNT),
            activity: &RECENT_ACTIVITY,
            call_to_action: InfoCard {
                title: "Ready to supercharge your CI/CD?".to_string(),
                body: "Get started with our CLI tool to generate custom workflows for your projects."
                    .to_string(),
            },
        }
    }
}

/// Top `count` workflows by stars; ties keep catalog order
pub fn popular_workflows(entries: &[WorkflowEntry], count: usize) -> Vec<&WorkflowEntry> {
    let mut ranked: Vec<&WorkflowEntry> = entries.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    ranked.truncate(count);
    ranked
}
