//! Browser-side page behaviors that live outside the component tree.
//!
//! Reveal-on-scroll, the delayed contact nudge and the chat embed all talk to
//! the DOM directly. They are installed once, after the page has mounted.

use cabeza_site::components::{REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS};
use cabeza_site::state::ScrollNudge;
use cabeza_site::types::ChatWidget;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Class on `<html>` that switches on the reveal styles.
const SCRIPTED_CLASS: &str = "js";

/// Section the visitor is nudged towards.
const NUDGE_TARGET: &str = "contact";

/// Fraction of an element that must be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Install every page behavior once the landing page is in the DOM.
#[component]
#[allow(clippy::unused_unit)]
pub fn PageBehaviors(chat: Option<ChatWidget>) -> impl IntoView {
    Effect::new(move || {
        setup_reveal_observer();
        setup_scroll_nudge();
        if let Some(chat) = &chat {
            inject_chat_widget(chat);
        }
    });

    view! {}
}

/// Mark the document as scripted. Reveal styles only hide content under this
/// class, so visitors without WASM still see every section.
pub fn mark_scripted() {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().add_1(SCRIPTED_CLASS);
    }
}

/// Observe every `.reveal` element and add the visible class the first time
/// it intersects the viewport. Revealed elements are unobserved, so the class
/// is never removed again.
fn setup_reveal_observer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin("0px 0px -40px 0px");

    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            // No observer support: show everything rather than hide it forever
            tracing::warn!(?err, "IntersectionObserver unavailable, revealing all");
            for_each_element(&targets, |el| {
                let _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
            });
            return;
        }
    };

    let mut observed = 0u32;
    for_each_element(&targets, |el| {
        observer.observe(el);
        observed += 1;
    });
    tracing::debug!(observed, "reveal observer installed");

    callback.forget(); // Observer outlives this function
}

fn for_each_element(nodes: &web_sys::NodeList, mut f: impl FnMut(&web_sys::Element)) {
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            f(&el);
        }
    }
}

/// Scroll to the contact section after [`ScrollNudge::DELAY`] unless the
/// visitor has scrolled on their own by then.
fn setup_scroll_nudge() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let nudge = Rc::new(RefCell::new(ScrollNudge::default()));
    // Filled in once registered, so the listener can detach itself
    let listener: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));

    let nudge_clone = nudge.clone();
    let listener_clone = listener.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default();
        if nudge_clone.borrow_mut().record_scroll(offset) {
            tracing::debug!(offset, "visitor scrolled, contact nudge cancelled");
            detach_scroll_listener(&listener_clone);
        }
    }) as Box<dyn FnMut()>);

    let callback: &js_sys::Function = on_scroll.as_ref().unchecked_ref();
    if window
        .add_event_listener_with_callback("scroll", callback)
        .is_ok()
    {
        *listener.borrow_mut() = Some(callback.clone());
    }

    let on_deadline = Closure::once(Box::new(move || {
        detach_scroll_listener(&listener);
        // on_scroll is dropped here, after it has been detached
        drop(on_scroll);
        if nudge.borrow().should_nudge() {
            scroll_to_section(NUDGE_TARGET);
        }
    }) as Box<dyn FnOnce()>);

    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        on_deadline.as_ref().unchecked_ref(),
        ScrollNudge::DELAY.as_millis() as i32,
    );

    on_deadline.forget();
}

fn detach_scroll_listener(listener: &RefCell<Option<js_sys::Function>>) {
    let Some(callback) = listener.borrow_mut().take() else {
        return;
    };
    if let Some(window) = web_sys::window() {
        let _ = window.remove_event_listener_with_callback("scroll", &callback);
    }
}

fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::warn!(id, "nudge target not found");
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    tracing::info!(id, "nudged visitor towards contact");
}

/// Append the chat widget script to `<body>`.
fn inject_chat_widget(chat: &ChatWidget) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let script = match document.create_element("script") {
        Ok(script) => script,
        Err(err) => {
            tracing::warn!(?err, "could not create chat script");
            return;
        }
    };
    let _ = script.set_attribute("src", &chat.script_src);
    let _ = script.set_attribute("data-site-id", &chat.site_id);
    let _ = script.set_attribute("defer", "");

    match body.append_child(&script) {
        Ok(_) => tracing::debug!(site_id = %chat.site_id, "chat widget injected"),
        Err(err) => tracing::warn!(?err, "could not inject chat script"),
    }
}
