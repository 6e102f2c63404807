//! Language toggle button.

use dioxus::prelude::*;

use crate::app::language::use_language;
use crate::i18n::Language;

/// EN/PT switch showing the language a click will switch to.
#[component]
pub fn LanguageToggle() -> Element {
    let language = use_language();

    let next = language.language().toggled();
    let label = match next {
        Language::En => "EN",
        Language::Pt => "PT",
    };

    rsx! {
        button {
            class: "btn-compact",
            aria_label: "Switch language",
            onclick: move |_| language.toggle(),
            "{label}"
        }
    }
}
