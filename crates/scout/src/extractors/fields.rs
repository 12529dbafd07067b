// ABOUTME: Selector helpers for pulling normalized text and meta content out of a DOM scope.
// ABOUTME: Used by the card, row, and detail-page extractors; empty matches count as no match.

//! Selector-based text helpers.
//!
//! Every helper takes an `ElementRef` scope so the same code serves whole
//! documents (`html.root_element()`) and individual listing cards.
//!
//! Key behaviors:
//! - A selector group such as `".price, .listing-price"` is one CSS selector
//!   list; matches come back in document order.
//! - Whitespace is normalized (collapsed to single spaces, trimmed).
//! - Empty strings are treated as no match.
//! - Invalid selectors yield no match rather than an error.

use scraper::ElementRef;

use crate::extractors::compiled::get_or_compile;

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text of an element, joining its text nodes with spaces.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first element matching `css` inside `scope`, if non-empty.
///
/// Only the first match is considered, like a `.First()` selection.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    let sel = get_or_compile(css)?;
    let el = scope.select(&sel).next()?;
    let text = element_text(el);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Non-empty texts of every element matching `css` inside `scope`.
pub fn all_texts(scope: ElementRef<'_>, css: &str) -> Vec<String> {
    let Some(sel) = get_or_compile(css) else {
        return Vec::new();
    };
    scope
        .select(&sel)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Trimmed `content` attribute of the last matching meta tag.
///
/// Later tags win, matching pages that repeat `<meta name="description">`.
pub fn last_meta_content(scope: ElementRef<'_>, css: &str) -> Option<String> {
    let sel = get_or_compile(css)?;
    scope
        .select(&sel)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .last()
        .map(str::to_string)
}
