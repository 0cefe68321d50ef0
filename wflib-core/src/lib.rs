//! Workflow Library core: catalogs, filtering, page content and rendering

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod snippet;

pub use error::{LibraryError, Result};
