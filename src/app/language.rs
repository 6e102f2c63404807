//! EN/PT language store.
//!
//! Owns the two-valued language selection and persists it under the
//! `portfolio-language` localStorage key. Reads happen once at mount;
//! writes go through synchronously on every set. Translation lookup is
//! delegated to [`crate::i18n`].

use dioxus::prelude::*;

use crate::i18n::{self, Language};

/// localStorage key holding `"en"` or `"pt"`.
pub const STORAGE_KEY: &str = "portfolio-language";

/// Language store shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageStore {
    language: Signal<Language>,
}

impl LanguageStore {
    pub fn language(&self) -> Language {
        (self.language)()
    }

    /// Set the language and write it through to storage. Safe to call
    /// repeatedly; the write is synchronous and idempotent.
    pub fn set(&self, language: Language) {
        let mut signal = self.language;
        signal.set(language);
        persist_language(language);
    }

    /// Binary flip between the two supported languages.
    pub fn toggle(&self) {
        self.set((self.language)().toggled());
    }

    /// Translate `key` for the current language; unknown keys come back
    /// verbatim. Reading through the store keeps callers reactive to
    /// language changes.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate((self.language)(), key)
    }
}

/// Install the language store at the app root and adopt a persisted
/// selection once at mount. Invalid or absent stored values silently keep
/// the default.
pub fn use_language_provider() -> LanguageStore {
    let language = use_signal(Language::default);
    let store = use_context_provider(|| LanguageStore { language });

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(saved) = read_stored_language() {
                let mut signal = store.language;
                signal.set(saved);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = store;
        }
    });

    store
}

/// Read the language store provided by [`use_language_provider`].
pub fn use_language() -> LanguageStore {
    use_context()
}

/// Mirror the selection onto the document `lang` attribute. The effect
/// wiring lives in the app root; the store never touches the document.
pub(crate) fn apply_document_language(language: Language) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", language.document_lang());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
    }
}

#[cfg(target_arch = "wasm32")]
fn read_stored_language() -> Option<Language> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|v| v.parse().ok())
}

fn persist_language(language: Language) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, language.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
    }
}
