// ABOUTME: Page wraps a parsed HTML tree together with its flattened plain-text view.
// ABOUTME: The text view is what the proximity and fallback pattern extractors scan.

use anyhow::anyhow;
use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError};
use crate::extractors::fields::normalize_whitespace;

/// Elements whose text never reaches the flattened view.
const SKIPPED_TEXT_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed listing page.
pub struct Page {
    html: Html,
    text: String,
}

impl Page {
    /// Parse a raw document fetched from `url`.
    ///
    /// A body without any markup (empty, or a bare error string from a bot
    /// wall) is a parse failure. Everything else parses; html5ever recovers
    /// from malformed markup.
    pub fn parse(raw: &str, url: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ScrapeError::parse(
                url,
                "ParsePage",
                Some(anyhow!("empty document")),
            ));
        }
        if !raw.contains('<') {
            return Err(ScrapeError::parse(
                url,
                "ParsePage",
                Some(anyhow!("document has no markup")),
            ));
        }

        let html = Html::parse_document(raw);
        let text = flatten_text(&html);
        Ok(Self { html, text })
    }

    /// The `<html>` element, the scope for document-wide selector queries.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Flattened text: one line per non-empty text node, whitespace collapsed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn flatten_text(html: &Html) -> String {
    let mut lines = Vec::new();
    for node in html.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|el| SKIPPED_TEXT_PARENTS.contains(&el.name()))
            .unwrap_or(false);
        if skipped {
            continue;
        }
        let line = normalize_whitespace(text);
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_text_nodes_one_per_line() {
        let page = Page::parse(
            r#"<html><head><title>Manoa</title><script>var price = "$1";</script></head>
            <body><div><span>$1,250,000</span>
            <p>2819 Poelua St,   Honolulu, HI 96822</p><style>.x{}</style></div></body></html>"#,
            "https://example.com",
        )
        .unwrap();

        assert_eq!(
            page.text(),
            "Manoa\n$1,250,000\n2819 Poelua St, Honolulu, HI 96822"
        );
    }

    #[test]
    fn rejects_empty_body() {
        let err = Page::parse("   \n", "https://example.com").err().unwrap();
        assert!(err.is_parse());
    }

    #[test]
    fn rejects_body_without_markup() {
        let err = Page::parse("Access denied", "https://example.com")
            .err()
            .unwrap();
        assert!(err.is_parse());
        assert_eq!(err.url, "https://example.com");
    }

    #[test]
    fn root_supports_selector_queries() {
        let page = Page::parse(
            "<html><body><h3>Listing</h3></body></html>",
            "https://example.com",
        )
        .unwrap();
        let h3 = crate::extractors::fields::first_text(page.root(), "h3");
        assert_eq!(h3.as_deref(), Some("Listing"));
    }
}
