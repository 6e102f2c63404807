//! Layout component wrapping the page with Pico CSS and common elements.

use dioxus::prelude::*;

use super::language::LanguageToggle;
use super::nav::Nav;
use super::theme::ThemeToggle;
use crate::app::language::use_language;
use crate::app::theme::THEME_SCRIPT;
use crate::config;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 16px; --pico-font-family: Inter, system-ui, sans-serif; }
main.container { max-width: 52rem; }
main.container > section, main.container > header { padding: 5rem 0; }
main.container > header#intro { min-height: 90vh; display: flex; align-items: center; padding: 0; }
.eyebrow { font-family: var(--pico-font-family-monospace, monospace); font-size: 0.75rem; letter-spacing: 0.2em; color: var(--pico-muted-color); margin-bottom: 0.5rem; }
.muted { color: var(--pico-muted-color); }
.intro-grid { display: grid; gap: 3rem; width: 100%; }
@media (min-width: 1024px) { .intro-grid { grid-template-columns: 3fr 2fr; } }
.intro-name span { color: var(--pico-muted-color); }
.intro-meta { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; font-size: 0.875rem; color: var(--pico-muted-color); }
.status-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #22c55e; animation: pulse 2s ease-in-out infinite; }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.2); } }
.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { border: 1px solid var(--pico-muted-border-color); border-radius: 9999px; padding: 0.1rem 0.75rem; font-size: 0.8rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.badge { display: inline-block; border: 1px solid var(--pico-muted-border-color); border-radius: 9999px; padding: 0.2rem 0.9rem; font-size: 0.8rem; color: var(--pico-muted-color); }
.cta-row { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.notice { border: 1px solid var(--pico-muted-border-color); border-radius: 0.5rem; padding: 0.75rem 1rem; color: var(--pico-muted-color); }
.service-icon { font-size: 1.75rem; margin-bottom: 0.25rem; }
/* Entrance animation latched by the scroll tracker; sections stay visible without it */
.animate-fade-in-up { animation: fade-in-up 0.8s ease-out both; }
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(2rem); }
    to { opacity: 1; transform: translateY(0); }
}
@media (prefers-reduced-motion: reduce) { .animate-fade-in-up { animation: none; } }
/* Section dot navigation */
.section-nav { position: fixed; left: 1.5rem; top: 50%; transform: translateY(-50%); z-index: 10; display: none; flex-direction: column; gap: 0.75rem; }
@media (min-width: 1024px) { .section-nav { display: flex; } }
.section-dot { width: 0.5rem; height: 2rem; padding: 0; margin: 0; border: none; border-radius: 9999px; background: var(--pico-muted-border-color); }
.section-dot:hover { background: var(--pico-muted-color); }
.section-dot.active { background: var(--pico-contrast); }
/* Footer */
footer.container { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1rem; padding-bottom: 2rem; }
.footer-controls { display: flex; align-items: center; gap: 0.75rem; }
.btn-compact { width: auto; padding: 0.25rem 0.6rem; font-size: 0.8rem; margin: 0; }
small { color: var(--pico-muted-color); }
"#;

/// Main layout component wrapping the single page.
#[component]
pub fn Layout(children: Element) -> Element {
    let language = use_language();
    let site = config::site();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "Felipe Kreulich - Full Stack Developer" }
        document::Meta {
            name: "description",
            content: "Exploring the intersection of software engineering, people, and AI.",
        }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;700&display=swap",
        }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        // Body content
        Nav {}
        main { class: "container",
            {children}
        }
        footer { class: "container",
            small { {language.t("footer.copyright")} }
            div { class: "footer-controls",
                a {
                    href: site.blog_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {language.t("footer.blog")}
                }
                LanguageToggle {}
                ThemeToggle {}
            }
        }
    }
}
