// ABOUTME: Extraction strategies for listing search pages, statistics pages, and detail pages.
// ABOUTME: Leaf helpers (parsers, selectors, ids) sit beside the page-level extractors that use them.

//! Extraction module.
//!
//! Submodules:
//! - `parsers`: noisy text to currency, counts, decimals, and percents.
//! - `id`: stable listing identifiers.
//! - `compiled` / `fields`: cached selectors and text helpers over a DOM scope.
//! - `rules`: regex field rules applied independently to a text span.
//! - `proximity`: address-anchored windows over flattened page text.
//! - `structured`: listing cards and labeled statistics rows.
//! - `stats`: market statistics with a free-text fallback.
//! - `detail`: single-listing pages and their URL grammars.

pub mod compiled;
pub mod detail;
pub mod fields;
pub mod id;
pub mod parsers;
pub mod proximity;
pub mod rules;
pub mod stats;
pub mod structured;
