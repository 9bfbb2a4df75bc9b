//! Browser layer for the page-sharer widget.
//!
//! Loading this module as a wasm bundle registers the `<page-sharer>`
//! custom element. Attributes map 1:1 (kebab-case) onto the configuration
//! keys in `sharer-core`; see `demos/index.html` for usage.
//!
//! The markup renderer ([`view`]) and the static assets ([`icons`],
//! [`style`]) are plain string code and compile everywhere, which is where
//! the host-side tests live. The DOM-facing modules are wasm-only.

pub mod icons;
pub mod style;
pub mod view;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod clipboard;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod element;

/// Tag the element registers under.
pub const ELEMENT_TAG: &str = "page-sharer";

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod boot {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() {
        // Readable panics before anything else can fail.
        console_error_panic_hook::set_once();
        init_tracing();
        crate::element::define(crate::ELEMENT_TAG);
        tracing::debug!("registered <{}>", crate::ELEMENT_TAG);
    }

    fn init_tracing() {
        use tracing::subscriber::set_global_default;
        use tracing::Level;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::Registry;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // A host page may already have a subscriber; losing the race is fine.
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}
