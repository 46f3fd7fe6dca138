//! Copying the generated CSS to a host clipboard.
//!
//! The clipboard itself belongs to the host. Failures are reported as a
//! [`CopyNotice`] for the UI to show and are logged; they never reach the
//! geometry or rendering side.

use alloc::string::String;
use core::fmt;

use log::{info, warn};

use crate::css::CssSnippet;
use crate::fit::ObjectFit;

/// Host clipboard access.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard write failure, as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardError {
    reason: String,
}

impl ClipboardError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard write failed: {}", self.reason)
    }
}

impl core::error::Error for ClipboardError {}

/// Outcome of a copy, for the host's notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyNotice {
    /// The snippet is on the clipboard.
    Copied,
    /// The host refused the write.
    Failed(String),
}

impl CopyNotice {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Render the snippet for `fit` and put it on the clipboard.
pub fn copy_css(
    snippet: &CssSnippet,
    fit: &ObjectFit,
    clipboard: &mut impl Clipboard,
) -> CopyNotice {
    let css = snippet.render(fit);
    match clipboard.set_text(&css) {
        Ok(()) => {
            info!("copied {} bytes of CSS", css.len());
            CopyNotice::Copied
        }
        Err(e) => {
            warn!("{e}");
            CopyNotice::Failed(String::from(e.reason()))
        }
    }
}
