//! One-shot page actions: CV download and mailto links.

use crate::i18n::Language;

/// CV file served for each language; both live under the server's public
/// directory.
pub fn cv_filename(language: Language) -> &'static str {
    match language {
        Language::Pt => "curriculo.pdf",
        Language::En => "curriculoenglish.pdf",
    }
}

/// Build a `mailto:` href with a URL-encoded subject line.
pub fn mailto_href(address: &str, subject: &str) -> String {
    format!("mailto:{address}?subject={}", urlencoding::encode(subject))
}

/// Download the language-appropriate CV through a transient anchor:
/// attach, click, detach. No state is retained afterwards.
pub fn download_cv(language: Language) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let filename = cv_filename(language);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href(&format!("/{filename}"));
        anchor.set_download(filename);
        if body.append_child(&anchor).is_ok() {
            anchor.click();
        }
        anchor.remove();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_filename_follows_the_language() {
        assert_eq!(cv_filename(Language::Pt), "curriculo.pdf");
        assert_eq!(cv_filename(Language::En), "curriculoenglish.pdf");
    }

    #[test]
    fn mailto_subjects_are_url_encoded() {
        let href = mailto_href("contato@example.com", "Project quote request");
        assert_eq!(
            href,
            "mailto:contato@example.com?subject=Project%20quote%20request"
        );
    }
}
