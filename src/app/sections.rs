//! Scroll-activity tracker.
//!
//! Watches which labeled page section is on screen and exposes the most
//! recently activated id for the navigation dots. Activation also latches a
//! one-way entrance animation class onto the section element.

use dioxus::prelude::*;

/// Page sections in document order.
pub const SECTIONS: [&str; 9] = [
    "intro", "about", "work", "projects", "services", "thoughts", "calendar", "coffee", "connect",
];

/// Minimum visible fraction for a section to count as active (inclusive).
pub const ACTIVATION_THRESHOLD: f64 = 0.3;

/// The viewport's bottom 20% is excluded from the intersection so sections
/// entering from below activate a little early.
pub const ROOT_MARGIN: &str = "0px 0px -20% 0px";

/// One-way class applied the first time a section activates; re-adding it
/// on later activations is a no-op.
pub const ENTRANCE_CLASS: &str = "animate-fade-in-up";

/// Active-section state shared through context. Written only by the
/// observation callback; empty until the first activation.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionTracker {
    active: Signal<String>,
}

impl SectionTracker {
    pub fn active_section(&self) -> String {
        (self.active)()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.read().as_str() == id
    }

    fn set_active(&self, id: &str) {
        let mut active = self.active;
        active.set(id.to_string());
    }
}

/// Install the tracker at the app root.
pub fn use_section_tracker_provider() -> SectionTracker {
    let active = use_signal(String::new);
    use_context_provider(|| SectionTracker { active })
}

/// Read the tracker provided by [`use_section_tracker_provider`].
pub fn use_section_tracker() -> SectionTracker {
    use_context()
}

/// Inclusive activation boundary: a section exactly at the threshold counts
/// as active.
pub fn activates(visible_fraction: f64) -> bool {
    visible_fraction >= ACTIVATION_THRESHOLD
}

/// Observe the page sections and keep the tracker current.
///
/// Entries are applied in the order the browser delivers them, so when
/// several sections cross the threshold in one batch the last one in the
/// batch wins. Without IntersectionObserver support nothing ever activates
/// and sections keep their default rendering.
pub fn use_section_observer() {
    let tracker = use_section_tracker();

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        type Observation = (
            web_sys::IntersectionObserver,
            Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
        );
        let observation: Rc<RefCell<Option<Observation>>> = use_hook(|| Rc::new(RefCell::new(None)));

        {
            let observation = Rc::clone(&observation);
            use_effect(move || {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };

                let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                            if !activates(entry.intersection_ratio()) {
                                continue;
                            }
                            let target = entry.target();
                            let _ = target.class_list().add_1(ENTRANCE_CLASS);
                            let id = target.id();
                            if !id.is_empty() {
                                tracker.set_active(&id);
                            }
                        }
                    },
                );

                let options = web_sys::IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(ACTIVATION_THRESHOLD));
                options.set_root_margin(ROOT_MARGIN);

                let observer = match web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => observer,
                    Err(_) => {
                        tracing::debug!(
                            "IntersectionObserver unavailable; section highlighting disabled"
                        );
                        return;
                    }
                };

                for id in SECTIONS {
                    if let Some(element) = document.get_element_by_id(id) {
                        observer.observe(&element);
                    }
                }

                *observation.borrow_mut() = Some((observer, callback));
            });
        }

        use_drop(move || {
            if let Some((observer, _callback)) = observation.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn activation_boundary_is_inclusive() {
        assert!(activates(ACTIVATION_THRESHOLD));
        assert!(activates(0.31));
        assert!(activates(1.0));
        assert!(!activates(0.2999));
        assert!(!activates(0.0));
    }

    #[test]
    fn section_ids_are_unique_and_start_at_the_top() {
        let unique: HashSet<&str> = SECTIONS.iter().copied().collect();
        assert_eq!(unique.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0], "intro");
        assert_eq!(SECTIONS[SECTIONS.len() - 1], "connect");
    }
}
