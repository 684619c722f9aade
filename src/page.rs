//! Page-level DOM glue: global listeners, smooth scrolling, reveal-on-view,
//! button press feedback and pausing animations while the tab is hidden.
//!
//! The arithmetic lives in `order_landing::utils`; this module only reads
//! the DOM and writes classes and scroll positions.

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use order_landing::config::{
    FADE_IN_SELECTOR, HEADER_OFFSET_PX, PAUSED_CLASS, PRESSABLE_SELECTOR, PRESS_RESET_MS,
    REVEAL_OFFSET_PX, SCROLL_FRAME_MS, SMOOTH_SCROLL_MS,
};
use order_landing::utils::{anchor_target, is_in_view, scroll_progress, smooth_scroll_step};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

thread_local! {
    /// The running smooth-scroll animation, keyed by its start time.
    /// Replacing it cancels the old one.
    static SCROLL_ANIMATION: RefCell<Option<(f64, Interval)>> = RefCell::new(None);
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                warn!("Failed to attach {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn viewport_height() -> f64 {
    gloo_utils::window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

/// Current scroll progress of the whole page, in percent.
pub fn current_scroll_progress() -> f64 {
    let document_height = gloo_utils::document()
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y(), document_height, viewport_height())
}

/// Animate the window to the element with `id`, leaving room for the header.
pub fn smooth_scroll_to(id: &str) {
    let Some(element) = gloo_utils::document().get_element_by_id(id) else {
        warn!("No element #{} to scroll to", id);
        return;
    };

    let start = scroll_y();
    let target = (element.get_bounding_client_rect().top() + start - HEADER_OFFSET_PX).max(0.0);
    let started_at = js_sys::Date::now();
    debug!("Smooth scroll to #{} ({} -> {})", id, start, target);

    let interval = Interval::new(SCROLL_FRAME_MS, move || {
        let elapsed = js_sys::Date::now() - started_at;
        let (y, done) = smooth_scroll_step(start, target, elapsed, SMOOTH_SCROLL_MS);
        gloo_utils::window().scroll_to_with_x_and_y(0.0, y);
        if done {
            // the interval cannot be dropped from inside its own tick
            Timeout::new(0, move || {
                SCROLL_ANIMATION.with(|a| {
                    let mut running = a.borrow_mut();
                    if running.as_ref().is_some_and(|(key, _)| *key == started_at) {
                        running.take();
                    }
                });
            })
            .forget();
        }
    });
    SCROLL_ANIMATION.with(|a| *a.borrow_mut() = Some((started_at, interval)));
}

fn elements(selector: &str) -> Vec<Element> {
    let Ok(nodes) = gloo_utils::document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Mark every `.fade-in` element that has entered the viewport as visible.
pub fn reveal_visible() {
    let viewport = viewport_height();
    for element in elements(FADE_IN_SELECTOR) {
        if is_in_view(element.get_bounding_client_rect().top(), viewport, REVEAL_OFFSET_PX) {
            let _ = element.class_list().add_1("visible");
        }
    }
}

/// Briefly add the `pressed` class to a button.
pub fn press_feedback(element: Element) {
    let _ = element.class_list().add_1("pressed");
    Timeout::new(PRESS_RESET_MS, move || {
        let _ = element.class_list().remove_1("pressed");
    })
    .forget();
}

/// Pause or resume CSS animations to match the tab's visibility.
pub fn sync_animations_with_visibility() {
    let hidden = gloo_utils::document().hidden();
    let _ = gloo_utils::body()
        .class_list()
        .toggle_with_force(PAUSED_CLASS, hidden);
    debug!("Tab hidden: {}", hidden);
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Document-wide click handling: in-page links scroll smoothly and buttons
/// get press feedback.
pub fn handle_document_click(event: Event) {
    if let Some(link) = closest(&event, "a[href^='#']") {
        let href = link.get_attribute("href").unwrap_or_default();
        if let Some(id) = anchor_target(&href) {
            if gloo_utils::document().get_element_by_id(id).is_some() {
                event.prevent_default();
                smooth_scroll_to(id);
            }
        }
    }
    if let Some(button) = closest(&event, PRESSABLE_SELECTOR) {
        press_feedback(button);
    }
}

/// Attach all page-wide listeners. `on_scroll` receives the new progress;
/// `on_escape` fires when the Escape key is pressed.
pub fn install_listeners(
    on_scroll: impl Fn(f64) + 'static,
    on_escape: impl Fn() + 'static,
) -> Vec<Listener> {
    let window: EventTarget = gloo_utils::window().into();
    let document: EventTarget = gloo_utils::document().into();

    let listeners = vec![
        Listener::new(&window, "scroll", move |_| {
            on_scroll(current_scroll_progress());
            reveal_visible();
        }),
        Listener::new(&document, "keydown", move |event: Event| {
            if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if key.key() == "Escape" {
                    on_escape();
                }
            }
        }),
        Listener::new(&document, "click", handle_document_click),
        Listener::new(&document, "visibilitychange", |_| sync_animations_with_visibility()),
    ];

    listeners.into_iter().flatten().collect()
}
