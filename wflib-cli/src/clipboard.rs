//! System clipboard

use wflib_core::snippet::Clipboard;
use wflib_core::LibraryError;

/// The desktop clipboard, through `arboard`
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> wflib_core::Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| LibraryError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> wflib_core::Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| LibraryError::Clipboard(e.to_string()))
    }
}
