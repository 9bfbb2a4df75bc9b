//! Browser tests for the `<page-sharer>` element.
//!
//! Run with `wasm-pack test --headless --firefox crates/sharer-web` (or any
//! wasm-bindgen-test runner). These exercise the real custom-element
//! lifecycle: upgrade on append, staged open/close classes, tooltip timing,
//! teardown on remove.

#![cfg(all(target_family = "wasm", target_os = "unknown"))]

use gloo_timers::future::TimeoutFuture;
use sharer_web::{element, ELEMENT_TAG};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(attrs: &[(&str, &str)]) -> Element {
    element::define(ELEMENT_TAG);
    let document = document();
    let el = document.create_element(ELEMENT_TAG).unwrap();
    for (name, value) in attrs {
        el.set_attribute(name, value).unwrap();
    }
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn unmount(el: &Element) {
    document().body().unwrap().remove_child(el).unwrap();
}

fn shadow_html(el: &Element) -> String {
    el.shadow_root().unwrap().inner_html()
}

fn click(el: &Element, selector: &str) {
    el.shadow_root()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn open_close_staggers_classes() {
    let el = mount(&[("share-url", "https://x.test/a"), ("share-title", "A")]);

    let html = shadow_html(&el);
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains(r#"<ul class="choices"#));

    // Open: the list mounts hidden, then gains "shown" after the delay.
    click(&el, "a.opener");
    let html = shadow_html(&el);
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains(r#"<ul class="choices hidden">"#));

    TimeoutFuture::new(120).await;
    assert!(shadow_html(&el).contains(r#"<ul class="choices shown">"#));

    // Close: shown drops immediately, the list unmounts after settling.
    click(&el, "a.opener");
    let html = shadow_html(&el);
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"<ul class="choices hidden">"#));

    TimeoutFuture::new(300).await;
    assert!(!shadow_html(&el).contains(r#"<ul class="choices"#));

    unmount(&el);
}

#[wasm_bindgen_test]
fn attribute_toggles_gate_destinations() {
    let el = mount(&[("opener", "false"), ("use-twitter", "false")]);

    // opener="false" starts fully open with no opener control.
    let html = shadow_html(&el);
    assert!(!html.contains(r#"class="opener""#));
    assert!(html.contains(r#"<ul class="choices shown">"#));

    assert!(!html.contains("twitter.com/intent/tweet"));
    assert!(html.contains("facebook.com/sharer.php"));
    assert!(html.contains("whatsapp://send"));
    assert!(html.contains("mailto:?subject"));

    unmount(&el);
}

#[wasm_bindgen_test]
async fn copy_tooltip_appears_then_expires() {
    let el = mount(&[("opener", "false"), ("share-url", "https://x.test/copy")]);

    assert!(!shadow_html(&el).contains(r#"<div class="copy-tip">"#));
    // execCommand may be refused in a headless browser; the tooltip must
    // show regardless.
    click(&el, r##"a[href="#copy-link-to-clipboard"]"##);
    assert!(shadow_html(&el).contains(r#"<div class="copy-tip">"#));

    TimeoutFuture::new(1600).await;
    assert!(!shadow_html(&el).contains(r#"<div class="copy-tip">"#));

    unmount(&el);
}

#[wasm_bindgen_test]
fn disconnect_clears_shadow_root() {
    let el = mount(&[]);
    assert!(!shadow_html(&el).is_empty());
    unmount(&el);
    assert!(shadow_html(&el).is_empty());
}

#[wasm_bindgen_test]
async fn pending_timer_after_disconnect_is_a_noop() {
    let el = mount(&[]);
    click(&el, "a.opener");
    // Remove while the 70ms open follow-up is still pending.
    unmount(&el);
    TimeoutFuture::new(120).await;
    assert!(shadow_html(&el).is_empty());
}
