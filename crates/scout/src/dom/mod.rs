// ABOUTME: Document model for fetched listing pages.
// ABOUTME: Re-exports Page, the parsed tree plus its flattened text view.

//! Document model.
//!
//! Extraction works on two views of the same page: the `scraper` tree for
//! selector-driven extraction and a flattened text view for pattern scanning.

pub mod page;

pub use page::Page;
