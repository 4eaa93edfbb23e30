//! Share action: put the current URL on the clipboard, fall back to
//! showing it.
//!
//! Best-effort and fire-and-forget: there are exactly two terminal
//! outcomes, both user-visible, and neither is an error. A host whose
//! clipboard is missing or refuses the write gets the raw URL to present
//! instead.

use thiserror::Error;
use tracing::debug;

// ============================================================================
// Clipboard collaborator
// ============================================================================

/// Platform clipboard write capability. May be absent or refuse.
pub trait Clipboard {
    /// Places `text` on the platform clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Why a clipboard write did not happen.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this host")]
    Unavailable,
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

/// A [`Clipboard`] that records the last written text. Serves tests and
/// headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written text, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// A [`Clipboard`] that always refuses; models hosts without clipboard
/// access.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

// ============================================================================
// Share outcome
// ============================================================================

/// Terminal outcome of the share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The URL is on the clipboard; tell the user the link was copied.
    Copied { url: String },
    /// Clipboard access failed; present the raw URL text instead.
    Fallback { url: String },
}

impl ShareOutcome {
    /// The shareable URL, regardless of outcome.
    pub fn url(&self) -> &str {
        match self {
            ShareOutcome::Copied { url } | ShareOutcome::Fallback { url } => url,
        }
    }

    /// The user-facing notification for this outcome.
    pub fn message(&self) -> String {
        match self {
            ShareOutcome::Copied { .. } => "Link copied to clipboard.".to_owned(),
            ShareOutcome::Fallback { url } => format!("Share link: {url}"),
        }
    }
}

/// Copies `url` through `clipboard`, degrading to the visible-text
/// fallback on failure. Never returns an error and never retries.
pub fn share_url<C: Clipboard>(url: String, clipboard: &mut C) -> ShareOutcome {
    match clipboard.write_text(&url) {
        Ok(()) => ShareOutcome::Copied { url },
        Err(err) => {
            debug!(%err, "clipboard write failed, presenting url instead");
            ShareOutcome::Fallback { url }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_write_reports_copied() {
        let mut clipboard = MemoryClipboard::new();
        let outcome = share_url("https://example.com/?seed=010000000".into(), &mut clipboard);

        assert_eq!(
            outcome,
            ShareOutcome::Copied {
                url: "https://example.com/?seed=010000000".into()
            }
        );
        assert_eq!(
            clipboard.contents(),
            Some("https://example.com/?seed=010000000")
        );
        assert_eq!(outcome.message(), "Link copied to clipboard.");
    }

    #[test]
    fn refused_write_falls_back_to_the_raw_url() {
        let mut clipboard = UnavailableClipboard;
        let outcome = share_url("https://example.com/".into(), &mut clipboard);

        assert_eq!(
            outcome,
            ShareOutcome::Fallback {
                url: "https://example.com/".into()
            }
        );
        assert_eq!(outcome.url(), "https://example.com/");
        assert_eq!(outcome.message(), "Share link: https://example.com/");
    }

    #[test]
    fn clipboard_error_messages_are_stable() {
        assert!(
            ClipboardError::Unavailable
                .to_string()
                .contains("not available")
        );
        assert!(
            ClipboardError::Denied("blocked by policy".into())
                .to_string()
                .contains("blocked by policy")
        );
    }
}
