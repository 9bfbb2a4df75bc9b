//! Browser clipboard implementation.
//!
//! Synchronous selection-based copy: a throwaway `<textarea>` is appended to
//! the activated element, selected, run through `document.execCommand("copy")`
//! and removed. The command's verdict is logged and otherwise ignored; the
//! widget shows its tooltip either way.

use sharer_core::ClipboardPlatform;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlTextAreaElement};

/// Clipboard context anchored to the element that was activated.
///
/// The textarea has to live in the document for selection to work; the
/// activated anchor is the same parent the original widget used.
pub struct SelectionClipboard {
    parent: Option<HtmlElement>,
}

impl SelectionClipboard {
    /// Build from the activation event's current target.
    pub fn from_event(event: &Event) -> Self {
        Self {
            parent: event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok()),
        }
    }
}

impl ClipboardPlatform for SelectionClipboard {
    fn write_text(&self, text: &str) {
        let Some(parent) = &self.parent else {
            tracing::warn!("copy skipped: activation target is not an element");
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(node) = document.create_element("textarea") else {
            return;
        };
        let Ok(field) = node.dyn_into::<HtmlTextAreaElement>() else {
            return;
        };
        field.set_value(text);
        if parent.append_child(&field).is_err() {
            return;
        }
        field.select();
        match document.exec_command("copy") {
            Ok(ok) => tracing::debug!(ok, "clipboard copy command"),
            Err(e) => tracing::debug!("clipboard copy command failed: {e:?}"),
        }
        let _ = parent.remove_child(&field);
    }
}
