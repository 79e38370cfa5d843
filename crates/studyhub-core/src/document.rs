//! Extraction of module content from fetched HTML pages.
//!
//! Uses the scraper crate (pure Rust, WASM-compatible), so the same code
//! runs in the browser and under native tests.

use scraper::{Html, Selector};

use crate::error::HubError;

/// The parts of a fetched page that end up in the viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDocument {
    pub title: String,
    /// Inner markup of the content element, or of `<body>` without one
    pub content: String,
}

fn selector(css: &str) -> Result<Selector, HubError> {
    Selector::parse(css).map_err(|e| HubError::Parse(format!("Invalid CSS selector: {:?}", e)))
}

/// Pull the module body and title out of a full HTML page.
///
/// `content_selector` picks the content element (first match wins).
/// `fallback_title` is used when the page has no non-empty `<title>`.
pub fn extract_module(
    html: &str,
    content_selector: &str,
    fallback_title: &str,
) -> Result<ModuleDocument, HubError> {
    let document = Html::parse_document(html);

    let content_selector = selector(content_selector)?;
    let body_selector = selector("body")?;
    let title_selector = selector("title")?;

    let content = match document.select(&content_selector).next() {
        Some(element) => element.inner_html(),
        None => document
            .select(&body_selector)
            .next()
            .map(|body| body.inner_html())
            .unwrap_or_default(),
    };

    let title = document
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title.to_string());

    Ok(ModuleDocument {
        title,
        content: content.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTOR: &str = r#"[data-part="module"]"#;

    #[test]
    fn test_extracts_marked_section() {
        let html = r#"<!doctype html><html><head><title>Python RA5</title></head>
            <body><nav>menu</nav><main data-part="module"><h3>Tests</h3><a href="x.html">x</a></main></body></html>"#;
        let doc = extract_module(html, SELECTOR, "Python").unwrap();
        assert_eq!(doc.title, "Python RA5");
        assert_eq!(doc.content, r#"<h3>Tests</h3><a href="x.html">x</a>"#);
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><head></head><body><p>plain page</p></body></html>";
        let doc = extract_module(html, SELECTOR, "Plain").unwrap();
        assert_eq!(doc.title, "Plain");
        assert_eq!(doc.content, "<p>plain page</p>");
    }

    #[test]
    fn test_blank_title_uses_label() {
        let html = "<html><head><title>   </title></head><body>x</body></html>";
        let doc = extract_module(html, SELECTOR, "Label").unwrap();
        assert_eq!(doc.title, "Label");
    }

    #[test]
    fn test_keeps_data_attributes() {
        let html = r#"<body><div data-part="module"><button data-action="nav-module" data-target="a.html">go</button></div></body>"#;
        let doc = extract_module(html, SELECTOR, "M").unwrap();
        assert!(doc.content.contains(r#"data-action="nav-module""#));
        assert!(doc.content.contains(r#"data-target="a.html""#));
    }

    #[test]
    fn test_invalid_selector() {
        let err = extract_module("<p></p>", "[[", "M").unwrap_err();
        assert!(matches!(err, HubError::Parse(_)));
    }
}
