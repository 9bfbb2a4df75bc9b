//! Platform-neutral logic for the page-sharer widget.
//!
//! Everything the share widget does apart from touching the DOM lives here:
//! mapping element attributes onto a configuration record, resolving the
//! display locale and translated strings, building the per-destination share
//! intent URLs, and driving the staged open/close animation state.
//!
//! The browser layer (`sharer-web`) feeds this crate a [`PageContext`]
//! captured once at element connect and renders whatever the resolved
//! configuration plus [`UiState`] say should be on screen.

pub mod config;
pub mod i18n;
pub mod links;
pub mod platform;
pub mod state;

pub use config::{kebab_case, AttrDefault, PageContext, ResolvedSharer, SharerConfig, CONFIG_DEFAULTS};
pub use i18n::{resolve_locale, translate, Locale, TextKey};
pub use links::{Destination, ShareLinks};
pub use platform::{copy_share_url, ClipboardPlatform};
pub use state::{FollowUp, UiState, CLOSE_SETTLE_MS, OPEN_SECOND_PHASE_MS, TOOLTIP_HIDE_MS};
