//! Platform seams.
//!
//! The browser layer implements [`ClipboardPlatform`]; tests use an in-memory
//! recorder. Copy failure is deliberately unobserved: the tooltip feedback is
//! the same whether the platform write worked or not.

use crate::state::{FollowUp, UiState};

/// Writes text to the host clipboard. Infallible by contract; an
/// implementation that can fail should swallow and log the failure.
pub trait ClipboardPlatform {
    fn write_text(&self, text: &str);
}

/// The copy-link action: write the share URL, show the tooltip, and hand the
/// caller the follow-up that hides it again.
pub fn copy_share_url(
    share_url: &str,
    clipboard: &dyn ClipboardPlatform,
    state: &mut UiState,
) -> FollowUp {
    clipboard.write_text(share_url);
    state.copy_feedback()
}
