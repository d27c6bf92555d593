//! Best-effort clipboard access.
//!
//! Clipboard writes are fire-and-forget: a failure (headless session, no
//! display server, platform quirk) is swallowed and only reported as a
//! boolean so the caller can skip its success notice.

/// Handle to the system clipboard, if one could be opened.
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    /// Open the system clipboard. Never fails; an unavailable clipboard
    /// simply makes every [`write`](Self::write) report `false`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }

    /// Write `text` to the clipboard. Returns whether the write succeeded.
    pub fn write(&mut self, text: &str) -> bool {
        self.inner
            .as_mut()
            .is_some_and(|clipboard| clipboard.set_text(text.to_owned()).is_ok())
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}
