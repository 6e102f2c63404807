//! Shared UI components for the Dioxus web UI.

pub mod language;
pub mod layout;
pub mod nav;
pub mod theme;

pub use language::LanguageToggle;
pub use layout::Layout;
pub use nav::Nav;
pub use theme::ThemeToggle;
