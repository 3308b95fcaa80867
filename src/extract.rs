//! HTML to plain-text extraction.
//!
//! Documentation pages arrive as full HTML documents; only the readable body
//! text matters for ranking. Chrome elements (navigation, headers, footers)
//! and non-content elements (scripts, styles) are dropped wholesale, then the
//! text of the most specific content container is flattened to a single
//! whitespace-normalized string.

use scraper::{ElementRef, Html, Selector};

/// Elements whose entire subtree never contributes readable content.
const STRIPPED_ELEMENTS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

/// Content-root candidates, most specific first. First match wins.
const CONTENT_SELECTORS: [&str; 5] = ["main", "article", ".content", ".documentation", "body"];

/// Extracts readable text content from an HTML document.
///
/// Never fails: malformed or non-HTML input is parsed best-effort and may
/// yield an empty string. Output has every whitespace run collapsed to a
/// single space and no leading/trailing whitespace.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = content_root(&document);

    let mut parts = Vec::new();
    collect_text(root, &mut parts);

    // Individual text nodes can still carry internal newlines and tabs.
    parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Picks the element to extract text from, trying each content selector in
/// order and falling back to the document root. Candidates that are stripped
/// themselves (e.g. `<header class="content">`) or sit inside a stripped
/// element (e.g. a `<main>` nested in a `<nav>`) are ignored.
fn content_root(document: &Html) -> ElementRef<'_> {
    for selector in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector) {
            if let Some(element) = document.select(&selector).find(|element| {
                !STRIPPED_ELEMENTS.contains(&element.value().name())
                    && !inside_stripped_element(*element)
            }) {
                return element;
            }
        }
    }
    document.root_element()
}

fn inside_stripped_element(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| STRIPPED_ELEMENTS.contains(&ancestor.value().name()))
}

/// Depth-first text collection, skipping stripped subtrees entirely.
fn collect_text(element: ElementRef<'_>, parts: &mut Vec<String>) {
    if STRIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, parts);
        } else if let Some(text) = child.value().as_text() {
            let text = text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }
    }
}
