//! Leptos Reveal Utilities
//!
//! Viewport-visibility tracking and smooth anchor scrolling for Leptos.
//! Visibility comes from the browser's IntersectionObserver, scrolling from
//! `Element.scrollIntoView` with smooth behavior.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Observer configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be on screen (0.0 = any pixel)
    pub threshold: f64,
    /// Stop observing after the first time the element becomes visible
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            once: true,
        }
    }
}

/// Next visibility value for an observer report.
///
/// With `once`, a flag that has turned on never turns off again.
pub fn next_visibility(current: bool, intersecting: bool, once: bool) -> bool {
    if once {
        current || intersecting
    } else {
        intersecting
    }
}

/// Track whether a section is in the viewport.
///
/// Returns a signal that flips to `true` when the element scrolls into view.
/// The observer is created once the node is mounted and disconnected when
/// the owning component is cleaned up.
pub fn use_in_view(target: NodeRef<leptos::html::Section>, options: RevealOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        let Some(el) = target.get() else { return };

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let current = visible.get_untracked();
                    let next = next_visibility(current, entry.is_intersecting(), options.once);
                    if next != current {
                        set_visible.set(next);
                    }
                    if options.once && next {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&options.threshold.into());

        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&el);
                let observer = StoredValue::new_local(observer);
                on_cleanup(move || {
                    observer.try_with_value(|o| o.disconnect());
                });
            }
            Err(err) => {
                web_sys::console::warn_2(&"[REVEAL] IntersectionObserver unavailable:".into(), &err);
                // Without an observer the content would stay hidden forever
                set_visible.set(true);
            }
        }
        on_intersect.forget();
    });

    visible
}

/// `href` value for an in-page anchor
pub fn anchor_href(anchor: &str) -> String {
    format!("#{anchor}")
}

/// Smoothly scroll the element with the given id to the top of the viewport.
///
/// Returns false when no such element exists, leaving the caller to fall
/// back to the browser's own `#anchor` jump.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(el) = document().get_element_by_id(anchor) else {
        web_sys::console::warn_1(&format!("[REVEAL] No element with id '{}'", anchor).into());
        return false;
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Smoothly scroll back to the top of the page
pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_stays_visible() {
        assert!(next_visibility(false, true, true));
        assert!(next_visibility(true, false, true));
        assert!(!next_visibility(false, false, true));
    }

    #[test]
    fn test_repeating_follows_viewport() {
        assert!(next_visibility(false, true, false));
        assert!(!next_visibility(true, false, false));
    }

    #[test]
    fn test_default_options() {
        let opts = RevealOptions::default();
        assert!(opts.once);
        assert_eq!(opts.threshold, 0.0);
    }

    #[test]
    fn test_anchor_href() {
        assert_eq!(anchor_href("mywork"), "#mywork");
        assert_eq!(anchor_href("contact"), "#contact");
    }
}
