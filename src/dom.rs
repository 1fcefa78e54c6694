//! Thin web-sys layer: element lookup, class/style mutation, timers, observers
//! and console logging.
//!
//! Every lookup returns `Option`/`Vec` so a page missing some markup simply
//! skips the feature that needs it. JS exceptions are logged, never raised.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, NodeList, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok()?
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// `query_all` scoped to descendants of `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        warn_js(&format!("classList update `{class}` failed"), &e);
    }
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = html.style().set_property(property, value) {
        warn_js(&format!("style `{property}` failed"), &e);
    }
}

pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn offset_top(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|h| f64::from(h.offset_top()))
}

pub fn offset_height(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_height()))
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Whether an event's target lies inside `el` (or is `el`).
pub fn contains_target(el: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| el.contains(Some(node)))
}

/// Whether `el` or one of its ancestors matches `selector`.
pub fn within(el: &Element, selector: &str) -> bool {
    matches!(el.closest(selector), Ok(Some(_)))
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn same_element(a: &Element, b: &Element) -> bool {
    a.is_same_node(Some(b.as_ref()))
}

/// Attach an event listener for the lifetime of the page.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        warn_js(&format!("addEventListener `{event}` failed"), &e);
    }
    cb.forget();
}

/// One-shot timer. Not cancellable; callers guard against stale firings.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.try_into().unwrap_or(i32::MAX),
    ) {
        warn_js("setTimeout failed", &e);
    }
}

/// Repeating timer. Returns the handle for [`clear_interval`].
pub fn set_interval(ms: u32, f: impl FnMut() + 'static) -> Option<i32> {
    let win = window()?;
    let cb = Closure::<dyn FnMut()>::new(f);
    let handle = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            ms.try_into().unwrap_or(i32::MAX),
        )
        .map_err(|e| warn_js("setInterval failed", &e))
        .ok()?;
    cb.forget();
    Some(handle)
}

pub fn clear_interval(handle: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(handle);
    }
}

/// Create an IntersectionObserver whose callback receives typed entries.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            handler(entries, &observer);
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|e| warn_js("IntersectionObserver unavailable", &e))
        .ok()?;
    cb.forget();
    Some(observer)
}

pub fn debug(msg: &str) {
    web_sys::console::debug_1(&msg.into());
}

pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

fn warn_js(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&context.into(), err);
}
