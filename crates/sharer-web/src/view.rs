//! Sharer view: (resolved config, ui state) -> markup.
//!
//! The view is a pure function re-run against the full state on every state
//! change; the element layer swaps the result into the shadow root and
//! re-attaches the two listeners. No retained nodes, no reactive runtime.

use crate::icons;
use crate::style::SHARER_CSS;
use sharer_core::{Destination, ResolvedSharer, UiState};

/// Href of the copy-link entry, also used to find it after a render.
pub const COPY_LINK_HREF: &str = "#copy-link-to-clipboard";

/// Escape text interpolated into markup or attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Caller-supplied SVG overrides render verbatim inside a span; otherwise the
/// built-in icon markup is used as-is.
fn icon_or_override(builtin: &str, override_svg: &str) -> String {
    if override_svg.is_empty() {
        builtin.to_string()
    } else {
        format!("<span>{override_svg}</span>")
    }
}

fn opener_icon(sharer: &ResolvedSharer, state: &UiState) -> String {
    if !state.open || !state.open_anim {
        icon_or_override(icons::OPENER, &sharer.config.opener_svg)
    } else {
        icon_or_override(icons::CLOSING, &sharer.config.closing_svg)
    }
}

fn destination_icon(destination: Destination) -> &'static str {
    match destination {
        Destination::Facebook => icons::FACEBOOK,
        Destination::Twitter => icons::TWITTER,
        Destination::LinkedIn => icons::LINKEDIN,
        Destination::WhatsApp => icons::WHATSAPP,
        Destination::CopyLink => icons::COPY_LINK,
        Destination::Email => icons::EMAIL,
    }
}

fn destination_entry(destination: Destination, sharer: &ResolvedSharer, state: &UiState) -> String {
    let href = escape(destination.href(&sharer.links));
    let label = escape(destination.aria_label(sharer.locale));
    let icon = destination_icon(destination);
    if destination == Destination::CopyLink {
        let tooltip = if state.show_copy_tooltip {
            format!(r#"<div class="copy-tip">{}</div>"#, escape(&sharer.text_copy))
        } else {
            String::new()
        };
        format!(
            r#"<li><a href="{href}" target="_blank" aria-label="{label}" aria-role="button"><div class="copy-announcer" aria-live="polite" aria-atomic="true">{tooltip}</div>{icon}</a></li>"#
        )
    } else {
        format!(r#"<li><a href="{href}" target="_blank" aria-label="{label}">{icon}</a></li>"#)
    }
}

/// Render the whole widget.
pub fn markup(sharer: &ResolvedSharer, state: &UiState) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<style>");
    html.push_str(SHARER_CSS);
    html.push(' ');
    // Caller stylesheet text, appended unescaped so selectors work.
    html.push_str(&sharer.config.css);
    html.push_str("</style>");

    html.push_str(r#"<div class="sharer">"#);

    if sharer.config.opener {
        let expanded = if state.open { "true" } else { "false" };
        html.push_str(&format!(
            r##"<a href="#share" class="opener" aria-role="button" aria-expanded="{expanded}" aria-controls="share-content">{}<span class="title">{}</span></a>"##,
            opener_icon(sharer, state),
            escape(&sharer.text_share),
        ));
    }

    html.push_str(r#"<span class="share-buttons" id="share-content">"#);
    if state.open_anim {
        let phase = if state.open_anim2 { "shown" } else { "hidden" };
        html.push_str(&format!(r#"<ul class="choices {phase}">"#));
        for destination in Destination::ALL {
            if destination.enabled(&sharer.config) {
                html.push_str(&destination_entry(destination, sharer, state));
            }
        }
        html.push_str("</ul>");
    }
    html.push_str("</span></div>");

    html
}
