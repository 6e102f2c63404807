//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component that installs the three
//! client-state stores (theme, language, scroll activity) and renders the
//! single portfolio page with client-side hydration.

use dioxus::prelude::*;

pub mod actions;
pub mod components;
pub mod language;
pub mod pages;
pub mod sections;
pub mod theme;

use language::use_language_provider;
use pages::Home;
use sections::use_section_tracker_provider;
use theme::use_theme_provider;

/// Root app component.
///
/// The stores are created here, at the top of the tree, so every component
/// reads the same instances through context. Each document attribute has
/// exactly one writer: the theme store owns `data-theme`, the effect below
/// owns `lang`.
#[component]
pub fn App() -> Element {
    use_theme_provider();
    let language = use_language_provider();
    use_section_tracker_provider();

    // Mirror the language selection onto the document; owned by the
    // composition layer, not by the store.
    use_effect(move || {
        language::apply_document_language(language.language());
    });

    rsx! {
        Home {}
    }
}
