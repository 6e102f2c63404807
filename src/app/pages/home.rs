//! The portfolio page.
//!
//! Nine labeled sections in document order; every user-facing string goes
//! through the language store so the whole page re-renders on a language
//! switch. The section observer is mounted here, after the sections exist.

use dioxus::prelude::*;

use crate::app::actions;
use crate::app::components::Layout;
use crate::app::language::use_language;
use crate::app::sections::use_section_observer;
use crate::config;
use crate::i18n::Language;

/// Skills shown in the intro FOCUS block.
const FOCUS_SKILLS: [&str; 9] = [
    "React",
    "TypeScript",
    "Next.js",
    "PHP",
    "Laravel",
    "MySQL",
    "Design Systems",
    "UX/UI",
    "CyberSecurity",
];

/// Work history entries, most recent first; each key addresses a
/// role/company/description triple in the catalog.
const WORK_KEYS: [&str; 4] = ["pop", "az", "cstc", "army"];

/// Featured project keys; links are resolved against the site config.
const PROJECT_KEYS: [&str; 3] = ["portfolio", "wormhole", "blog"];

/// Service cards: icon plus catalog key.
const SERVICE_KEYS: [(&str, &str); 4] = [
    ("💻", "development"),
    ("🎨", "design"),
    ("🔧", "maintenance"),
    ("📱", "consulting"),
];

const BLOG_TOPIC_KEYS: [&str; 3] = ["topic1", "topic2", "topic3"];

const COFFEE_FEATURE_KEYS: [&str; 3] = ["feature1", "feature2", "feature3"];

/// The single portfolio page.
#[component]
pub fn Home() -> Element {
    let language = use_language();
    let site = config::site();
    let mut coming_soon = use_signal(|| false);

    use_section_observer();

    let email = language.t("connect.email").to_string();
    let email_href = format!("mailto:{email}");
    let quote_href = actions::mailto_href(&email, language.t("services.contact.quote_subject"));
    let question_href =
        actions::mailto_href(&email, language.t("services.contact.question_subject"));

    rsx! {
        Layout {
            // Intro
            header { id: "intro",
                div { class: "intro-grid",
                    div {
                        p { class: "eyebrow", {language.t("portfolio.year")} }
                        h1 { class: "intro-name",
                            {language.t("intro.title")}
                            br {}
                            span { {language.t("intro.subtitle")} }
                        }
                        p {
                            {language.t("intro.description")}
                            " "
                            strong { {language.t("intro.design")} }
                            ", "
                            strong { {language.t("intro.technology")} }
                            " "
                            {language.t("intro.and")}
                            " "
                            strong { {language.t("intro.human_behavior")} }
                            "."
                        }
                        div { class: "intro-meta",
                            span { class: "status-dot", aria_hidden: "true" }
                            span { {language.t("intro.available")} }
                            span { {language.t("intro.location")} }
                            button {
                                class: "btn-compact",
                                title: cv_title(language.language()),
                                onclick: move |_| actions::download_cv(language.language()),
                                {language.t("intro.cv_download")}
                            }
                        }
                    }
                    div {
                        div {
                            p { class: "eyebrow", {language.t("intro.currently")} }
                            p {
                                {language.t("intro.role")}
                                br {}
                                span { class: "muted", {language.t("intro.company")} }
                                br {}
                                small { {language.t("intro.period")} }
                            }
                        }
                        div {
                            p { class: "eyebrow", {language.t("intro.focus")} }
                            div { class: "tag-list",
                                for skill in FOCUS_SKILLS {
                                    span { key: "{skill}", class: "tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }

            // About
            section { id: "about",
                hgroup {
                    h2 { {language.t("about.title")} }
                    p { class: "muted", {language.t("about.description")} }
                }
                article {
                    p { class: "muted", {language.t("about.location_full")} }
                    div { class: "card-grid",
                        div {
                            p { class: "eyebrow", {language.t("about.age")} }
                            p { {language.t("about.age_value")} }
                        }
                        div {
                            p { class: "eyebrow", {language.t("about.interests")} }
                            p { {language.t("about.interests_list")} }
                        }
                        div {
                            p { class: "eyebrow", {language.t("about.available_for")} }
                            p { {language.t("about.available_for_value")} }
                        }
                    }
                }
            }

            // Work history
            section { id: "work",
                hgroup {
                    h2 { {language.t("work.title")} }
                    p { class: "muted", {language.t("work.period")} }
                }
                {WORK_KEYS.iter().map(|&key| {
                    let role = language.t(&format!("work.{key}.role")).to_string();
                    let company = language.t(&format!("work.{key}.company")).to_string();
                    let description = language.t(&format!("work.{key}.description")).to_string();
                    rsx! {
                        article { key: "{key}",
                            header {
                                strong { "{role}" }
                                br {}
                                span { class: "muted", "{company}" }
                            }
                            p { "{description}" }
                        }
                    }
                })}
            }

            // Projects
            section { id: "projects",
                hgroup {
                    h2 { {language.t("projects.title")} }
                    p { class: "muted", {language.t("projects.description")} }
                }
                div { class: "card-grid",
                    {PROJECT_KEYS.iter().map(|&key| {
                        let title = language.t(&format!("projects.{key}.title")).to_string();
                        let description = language.t(&format!("projects.{key}.description")).to_string();
                        let tech = language.t(&format!("projects.{key}.tech")).to_string();
                        let link_label = language.t(&format!("projects.{key}.link")).to_string();
                        let href = project_link(key, site);
                        rsx! {
                            article { key: "{key}",
                                h3 { "{title}" }
                                p { "{description}" }
                                p {
                                    span { class: "eyebrow", {language.t("projects.technologies")} }
                                    br {}
                                    small { "{tech}" }
                                }
                                a {
                                    href: href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link_label}"
                                }
                            }
                        }
                    })}
                }
            }

            // Services
            section { id: "services",
                hgroup {
                    h2 { {language.t("services.title")} }
                    p { class: "muted", {language.t("services.description")} }
                }
                div { class: "card-grid",
                    {SERVICE_KEYS.iter().map(|&(icon, key)| {
                        let title = language.t(&format!("services.{key}.title")).to_string();
                        let description = language.t(&format!("services.{key}.description")).to_string();
                        let features = language.t(&format!("services.{key}.features")).to_string();
                        rsx! {
                            article { key: "{key}",
                                p { class: "service-icon", aria_hidden: "true", "{icon}" }
                                h3 { "{title}" }
                                p { "{description}" }
                                ul {
                                    {features.split(", ").map(|feature| rsx! {
                                        li { key: "{feature}", "{feature}" }
                                    })}
                                }
                            }
                        }
                    })}
                }
                article {
                    h3 { {language.t("services.contact.title")} }
                    p { class: "muted", {language.t("services.contact.description")} }
                    div { class: "cta-row",
                        a { role: "button", href: "{quote_href}",
                            {language.t("services.contact.quote_button")}
                        }
                        a { role: "button", class: "secondary", href: "{question_href}",
                            {language.t("services.contact.question_button")}
                        }
                    }
                }
            }

            // Thoughts (blog promo)
            section { id: "thoughts",
                span { class: "badge", {language.t("blog.badge")} }
                hgroup {
                    h2 { {language.t("blog.title")} }
                    p { class: "muted", {language.t("blog.description")} }
                }
                div { class: "cta-row",
                    a {
                        role: "button",
                        href: site.blog_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {language.t("blog.cta")}
                    }
                }
                div { class: "card-grid",
                    {BLOG_TOPIC_KEYS.iter().map(|&key| {
                        let title = language.t(&format!("blog.{key}.title")).to_string();
                        let description = language.t(&format!("blog.{key}.description")).to_string();
                        rsx! {
                            article { key: "{key}",
                                h3 { "{title}" }
                                p { "{description}" }
                                button {
                                    class: "btn-compact",
                                    onclick: move |_| coming_soon.set(true),
                                    {language.t("thoughts.read_more")}
                                }
                            }
                        }
                    })}
                }
                if coming_soon() {
                    p { class: "notice", {language.t("thoughts.feature_coming_soon")} }
                }
                p {
                    {language.t("blog.footer_text")}
                    " "
                    a {
                        href: site.blog_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {language.t("blog.footer_cta")}
                    }
                }
            }

            // Calendar (Calendly embed)
            section { id: "calendar",
                hgroup {
                    h2 { {language.t("calendar.title")} }
                    p { class: "muted", {language.t("calendar.description")} }
                }
                div {
                    class: "calendly-inline-widget",
                    "data-url": site.calendly_url,
                    style: "min-width: 320px; height: 700px;",
                }
                script { src: "https://assets.calendly.com/assets/external/widget.js" }
            }

            // Coffee (donation)
            section { id: "coffee",
                article {
                    span { class: "badge", {language.t("coffee.badge")} }
                    h2 { {language.t("coffee.title")} }
                    p { {language.t("coffee.description")} }
                    ul {
                        {COFFEE_FEATURE_KEYS.iter().map(|&key| {
                            let feature = language.t(&format!("coffee.{key}")).to_string();
                            rsx! {
                                li { key: "{key}", "{feature}" }
                            }
                        })}
                    }
                    div { class: "cta-row",
                        a {
                            role: "button",
                            href: site.coffee_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {language.t("coffee.cta")}
                        }
                    }
                    small { {language.t("coffee.thanks")} }
                }
            }

            // Connect
            section { id: "connect",
                hgroup {
                    h2 { {language.t("connect.title")} }
                    p { class: "muted", {language.t("connect.description")} }
                }
                a { href: "{email_href}", "{email}" }
                div {
                    p { class: "eyebrow", {language.t("connect.elsewhere")} }
                    div { class: "cta-row",
                        a {
                            href: site.github_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "GitHub"
                        }
                        a {
                            href: site.linkedin_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "LinkedIn"
                        }
                        a {
                            href: site.blog_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Blog"
                        }
                    }
                }
                p { class: "muted", {language.t("footer.built_with")} }
            }
        }
    }
}

fn project_link(key: &str, site: &'static crate::config::SiteConfig) -> &'static str {
    match key {
        "blog" => site.blog_url,
        "wormhole" => site.github_url,
        _ => site.base_url,
    }
}

fn cv_title(language: Language) -> &'static str {
    match language {
        Language::Pt => "Baixar currículo em português",
        Language::En => "Download CV in English",
    }
}
