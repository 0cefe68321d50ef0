//! Code snippets and the copy-to-clipboard side action
//!
//! Snippets are displayed verbatim. Copying is a best-effort side action:
//! its outcome only drives the short-lived "copied" acknowledgement and never
//! touches catalog state.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::warn;

use crate::error::{LibraryError, Result};

/// How long the "copied" acknowledgement stays up
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// A block of code shown as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl CodeSnippet {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            title: None,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Copy the code and update `indicator` on success
    pub fn copy_with<C: Clipboard>(
        &self,
        clipboard: &mut C,
        indicator: &mut CopyIndicator,
        now: Instant,
    ) -> Result<()> {
        match clipboard.copy(&self.code) {
            Ok(()) => {
                indicator.acknowledge(now);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                indicator.clear();
                Err(e)
            }
        }
    }
}

/// Destination for copied text
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// In-memory clipboard, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub copies: Vec<String>,
    pub fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose every copy fails
    pub fn failing() -> Self {
        Self {
            copies: Vec::new(),
            fail: true,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(|s| s.as_str())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(LibraryError::Clipboard("clipboard unavailable".to_string()));
        }
        self.copies.push(text.to_string());
        Ok(())
    }
}

/// The auto-reverting "copied" flag
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn acknowledge(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn clear(&mut self) {
        self.copied_at = None;
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_ACK_DURATION)
    }
}
