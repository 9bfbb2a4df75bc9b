//! The `<page-sharer>` custom element.
//!
//! Registration goes through a small JS shim (custom elements need a class
//! extending `HTMLElement`, which wasm can't subclass directly); the shim
//! attaches an open shadow root in the constructor and forwards the
//! connect/disconnect lifecycle into Rust. Per-element instances live in a
//! thread-local registry keyed by an id stashed on the host element.
//!
//! All timers hold weak handles; one firing after its element disconnected
//! upgrades to nothing and is a no-op. The timers themselves are never
//! cancelled.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use sharer_core::{copy_share_url, FollowUp, PageContext, ResolvedSharer, SharerConfig, UiState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ShadowRoot};

use crate::clipboard::SelectionClipboard;
use crate::view;

#[wasm_bindgen(inline_js = r#"
export function register_custom_element(tag, onConnect, onDisconnect) {
    if (customElements.get(tag)) {
        return;
    }
    customElements.define(tag, class extends HTMLElement {
        constructor() {
            super();
            this.attachShadow({ mode: "open" });
        }
        connectedCallback() {
            onConnect(this, this.shadowRoot);
        }
        disconnectedCallback() {
            onDisconnect(this);
        }
    });
}
"#)]
extern "C" {
    fn register_custom_element(
        tag: &str,
        on_connect: &js_sys::Function,
        on_disconnect: &js_sys::Function,
    );
}

const INSTANCE_KEY: &str = "__pageSharerId";

struct SharerElement {
    root: ShadowRoot,
    resolved: ResolvedSharer,
    state: UiState,
    /// Listeners attached to the current render; replaced wholesale on the
    /// next one, after their nodes have already left the tree.
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

thread_local! {
    static REGISTRY: RefCell<HashMap<u32, Rc<RefCell<SharerElement>>>> =
        RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Register the custom element under `tag`. Safe to call more than once; a
/// tag that is already defined is left alone.
pub fn define(tag: &str) {
    let on_connect = Closure::<dyn FnMut(HtmlElement, ShadowRoot)>::new(connected);
    let on_disconnect = Closure::<dyn FnMut(HtmlElement)>::new(disconnected);
    register_custom_element(
        tag,
        on_connect.as_ref().unchecked_ref(),
        on_disconnect.as_ref().unchecked_ref(),
    );
    // Lifecycle callbacks live for the rest of the page.
    on_connect.forget();
    on_disconnect.forget();
}

/// Page URL, title and document language, captured once per connect.
fn page_context() -> PageContext {
    let window = web_sys::window();
    let url = window
        .as_ref()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let document = window.and_then(|w| w.document());
    let title = document.as_ref().map(|d| d.title()).unwrap_or_default();
    let language = document
        .and_then(|d| d.document_element())
        .and_then(|e| e.get_attribute("lang"))
        .unwrap_or_default();
    PageContext { url, title, language }
}

fn connected(host: HtmlElement, root: ShadowRoot) {
    let page = page_context();
    let config = SharerConfig::from_attributes(&page, |name| host.get_attribute(name));
    let resolved = ResolvedSharer::new(config, &page.language);
    let state = UiState::new(resolved.config.opener);

    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    });
    if let Err(e) = Reflect::set(
        host.as_ref(),
        &JsValue::from_str(INSTANCE_KEY),
        &JsValue::from_f64(id as f64),
    ) {
        tracing::warn!("failed to tag sharer host: {e:?}");
        return;
    }

    let instance = Rc::new(RefCell::new(SharerElement {
        root,
        resolved,
        state,
        listeners: Vec::new(),
    }));
    REGISTRY.with(|r| r.borrow_mut().insert(id, instance.clone()));
    tracing::debug!(id, "sharer connected");
    render_element(&instance);
}

fn disconnected(host: HtmlElement) {
    let id = Reflect::get(host.as_ref(), &JsValue::from_str(INSTANCE_KEY))
        .ok()
        .and_then(|v| v.as_f64());
    let Some(id) = id else { return };
    if let Some(instance) = REGISTRY.with(|r| r.borrow_mut().remove(&(id as u32))) {
        instance.borrow().root.set_inner_html("");
        tracing::debug!(id, "sharer disconnected");
    }
}

/// Re-render the widget into its shadow root and re-attach listeners.
fn render_element(instance: &Rc<RefCell<SharerElement>>) {
    let mut el = instance.borrow_mut();
    el.listeners.clear();

    let html = view::markup(&el.resolved, &el.state);
    el.root.set_inner_html(&html);

    let weak = Rc::downgrade(instance);

    if el.resolved.config.opener {
        if let Ok(Some(opener)) = el.root.query_selector("a.opener") {
            let weak = weak.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                on_toggle(&weak);
            });
            if opener
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                el.listeners.push(closure);
            }
        }
    }

    if el.resolved.config.use_link && el.state.open_anim {
        let selector = format!(r#"a[href="{}"]"#, view::COPY_LINK_HREF);
        if let Ok(Some(copy_link)) = el.root.query_selector(&selector) {
            let weak = weak.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                on_copy(&weak, &event);
            });
            if copy_link
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                el.listeners.push(closure);
            }
        }
    }
}

fn on_toggle(weak: &Weak<RefCell<SharerElement>>) {
    let Some(instance) = weak.upgrade() else { return };
    let follow_up = instance.borrow_mut().state.toggle();
    schedule(Rc::downgrade(&instance), follow_up);
    render_element(&instance);
}

fn on_copy(weak: &Weak<RefCell<SharerElement>>, event: &Event) {
    let Some(instance) = weak.upgrade() else { return };
    let clipboard = SelectionClipboard::from_event(event);
    let follow_up = {
        let el = &mut *instance.borrow_mut();
        copy_share_url(&el.resolved.config.share_url, &clipboard, &mut el.state)
    };
    schedule(Rc::downgrade(&instance), follow_up);
    render_element(&instance);
}

/// Schedule the delayed half of a transition. The callback re-reads state at
/// fire time and does nothing if the element has gone away.
fn schedule(weak: Weak<RefCell<SharerElement>>, follow_up: FollowUp) {
    Timeout::new(follow_up.delay_ms(), move || {
        let Some(instance) = weak.upgrade() else { return };
        instance.borrow_mut().state.apply(follow_up);
        render_element(&instance);
    })
    .forget();
}
