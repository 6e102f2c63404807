//! Fixed left-hand section navigation.

use dioxus::prelude::*;

use crate::app::language::use_language;
use crate::app::sections::{use_section_tracker, SECTIONS};

/// Vertical dot navigation. The dot for the active section is highlighted;
/// clicking a dot smooth-scrolls to its section.
#[component]
pub fn Nav() -> Element {
    let tracker = use_section_tracker();
    let language = use_language();

    rsx! {
        nav { class: "section-nav", aria_label: "Sections",
            {SECTIONS.iter().map(|&section| {
                let label = language.t(&format!("nav.{section}")).to_string();
                let active = tracker.is_active(section);
                rsx! {
                    button {
                        key: "{section}",
                        class: if active { "section-dot active" } else { "section-dot" },
                        title: "{label}",
                        aria_label: "Navigate to {label}",
                        onclick: move |_| scroll_to_section(section),
                    }
                }
            })}
        }
    }
}

fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
