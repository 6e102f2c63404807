//! Theme toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Sun/moon toggle for the footer.
///
/// The icon is held neutral until the stored preference has been resolved,
/// so the button never contradicts what the pre-paint script applied.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();

    let icon = if !theme.is_loaded() {
        "◐"
    } else if theme.is_dark() {
        "☀"
    } else {
        "☾"
    };

    rsx! {
        button {
            class: "btn-compact",
            aria_label: "Toggle theme",
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}
