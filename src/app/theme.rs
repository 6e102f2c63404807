//! Dark/light theme store.
//!
//! One store owns the effective mode. It reconciles three sources in fixed
//! priority order: the persisted `theme` localStorage key, the
//! `prefers-color-scheme` media query, then the dark default. After every
//! settle (initial resolution, user toggle, live system change) the `<html>`
//! `data-theme` attribute and the persisted value both equal the in-memory
//! flag. Storage failures are swallowed; the page renders regardless.

use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;

/// localStorage key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Initial in-memory mode before any reconciliation.
const DEFAULT_DARK: bool = true;

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two persisted theme literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Raised when a persisted theme value is not one of the two literals.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized theme value {0:?}")]
pub struct UnrecognizedTheme(String);

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl FromStr for ThemeMode {
    type Err = UnrecognizedTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(UnrecognizedTheme(other.to_string())),
        }
    }
}

/// Theme store shared through context; a single writer for the document's
/// `data-theme` attribute and the `theme` storage key.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    is_dark: Signal<bool>,
    is_loaded: Signal<bool>,
}

impl ThemeStore {
    pub fn is_dark(&self) -> bool {
        (self.is_dark)()
    }

    /// True once the storage → system → default reconciliation has run.
    /// Until then the in-memory flag is only the optimistic default.
    pub fn is_loaded(&self) -> bool {
        (self.is_loaded)()
    }

    /// Flip the mode as an explicit user choice. The resulting storage write
    /// makes system-preference changes no-ops for the rest of the session.
    pub fn toggle(&self) {
        self.settle(!(self.is_dark)());
    }

    /// Commit a mode: update the signal, mirror it onto the document root
    /// and persist it. All three agree once this returns.
    fn settle(&self, dark: bool) {
        let mut is_dark = self.is_dark;
        let mut is_loaded = self.is_loaded;
        is_dark.set(dark);
        if !*is_loaded.peek() {
            is_loaded.set(true);
        }
        apply_document_theme(dark);
        persist_theme(dark);
    }
}

/// Install the theme store at the app root and run the mount-time
/// reconciliation plus the live system-preference subscription.
pub fn use_theme_provider() -> ThemeStore {
    let is_dark = use_signal(|| DEFAULT_DARK);
    let is_loaded = use_signal(|| false);
    let store = use_context_provider(|| ThemeStore { is_dark, is_loaded });

    // Resolve storage → system signal → default exactly once per page load.
    // Outside a browser both sources read as absent and the default stands.
    use_effect(move || {
        store.settle(resolve_initial(read_stored_mode(), system_prefers_dark()));
    });

    // Live media-query updates. The "has explicit preference" gate is checked
    // fresh on every event, not once at subscribe time.
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        type MediaWatch = (
            web_sys::MediaQueryList,
            Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
        );
        let watch: Rc<RefCell<Option<MediaWatch>>> = use_hook(|| Rc::new(RefCell::new(None)));

        {
            let watch = Rc::clone(&watch);
            use_effect(move || {
                let Some(media) = web_sys::window()
                    .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                else {
                    return;
                };
                let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                    move |event: web_sys::MediaQueryListEvent| {
                        if let Some(next) = system_change_target(read_stored_mode(), event.matches())
                        {
                            store.settle(next);
                        }
                    },
                );
                media.set_onchange(Some(callback.as_ref().unchecked_ref()));
                *watch.borrow_mut() = Some((media, callback));
            });
        }

        use_drop(move || {
            if let Some((media, _callback)) = watch.borrow_mut().take() {
                media.set_onchange(None);
            }
        });
    }

    store
}

/// Read the theme store provided by [`use_theme_provider`].
pub fn use_theme() -> ThemeStore {
    use_context()
}

/// Effective initial mode: persisted choice wins, then the system signal,
/// then the dark default.
fn resolve_initial(stored: Option<ThemeMode>, system_prefers_dark: Option<bool>) -> bool {
    match stored {
        Some(mode) => mode.is_dark(),
        None => system_prefers_dark.unwrap_or(DEFAULT_DARK),
    }
}

/// What a system-preference change event should do: follow the system only
/// while no persisted choice exists, otherwise nothing.
pub fn system_change_target(stored: Option<ThemeMode>, system_dark: bool) -> Option<bool> {
    match stored {
        Some(_) => None,
        None => Some(system_dark),
    }
}

fn read_stored_mode() -> Option<ThemeMode> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| v.parse().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn system_prefers_dark() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn apply_document_theme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", ThemeMode::from_dark(dark).as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}

fn persist_theme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, ThemeMode::from_dark(dark).as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}

/// Client-side JavaScript for initial theme setup (included in head).
/// Runs immediately to prevent a flash of the wrong theme.
pub const THEME_SCRIPT: &str = r#"
(function(){
    try {
        var t = localStorage.getItem('theme');
        var dark = t ? t === 'dark' : window.matchMedia('(prefers-color-scheme: dark)').matches;
        document.documentElement.setAttribute('data-theme', dark ? 'dark' : 'light');
    } catch (e) {
        var prefersDark = window.matchMedia('(prefers-color-scheme: dark)').matches;
        document.documentElement.setAttribute('data-theme', prefersDark ? 'dark' : 'light');
    }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins_over_system_signal() {
        assert!(!resolve_initial(Some(ThemeMode::Light), Some(true)));
        assert!(resolve_initial(Some(ThemeMode::Dark), Some(false)));
    }

    #[test]
    fn system_signal_applies_when_nothing_is_stored() {
        assert!(resolve_initial(None, Some(true)));
        assert!(!resolve_initial(None, Some(false)));
    }

    #[test]
    fn default_is_dark_when_no_source_is_available() {
        assert!(resolve_initial(None, None));
    }

    #[test]
    fn system_changes_are_ignored_once_a_choice_is_persisted() {
        assert_eq!(system_change_target(Some(ThemeMode::Dark), false), None);
        assert_eq!(system_change_target(Some(ThemeMode::Light), true), None);
    }

    #[test]
    fn system_changes_apply_while_no_choice_is_persisted() {
        assert_eq!(system_change_target(None, true), Some(true));
        assert_eq!(system_change_target(None, false), Some(false));
    }

    #[test]
    fn persisted_literals_parse_strictly() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("black".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn mode_round_trips_through_its_literal() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
            assert_eq!(ThemeMode::from_dark(mode.is_dark()), mode);
        }
    }
}
