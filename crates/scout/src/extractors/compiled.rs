// ABOUTME: Pre-compiled CSS selector cache for O(1) selector lookup.
// ABOUTME: Card, row, and detail selectors are parsed once and shared across calls.

//! Selector caching for repeated DOM queries.
//!
//! Every search page runs the same card and row selectors, so parsing them on
//! each call is wasted work. Compiled selectors are kept in a process-wide
//! cache. Invalid selectors are cached too (as `None`).

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` for an invalid selector. A poisoned lock falls back to
/// compiling without caching.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    if let Ok(cache) = SELECTOR_CACHE.read() {
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    if let Ok(mut cache) = SELECTOR_CACHE.write() {
        cache
            .entry(css.to_string())
            .or_insert_with(|| compiled.clone());
    }
    compiled
}
