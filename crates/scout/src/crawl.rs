// ABOUTME: Search-page extraction strategies and the per-crawl dedup map.
// ABOUTME: Strategies run in order and the first one yielding records wins.

use std::collections::HashMap;

use tracing::debug;

use crate::dom::Page;
use crate::error::Result;
use crate::extractors::{proximity, structured};
use crate::listing::{Listing, ListingStatus};
use crate::options::{PaginationConfig, ProximityWindow};

/// One way of pulling listings out of a search page.
pub type PageStrategy = fn(&Page, ListingStatus, ProximityWindow) -> Vec<Listing>;

fn text_proximity(page: &Page, status: ListingStatus, window: ProximityWindow) -> Vec<Listing> {
    proximity::extract_listings(page.text(), status, window)
}

fn cards(page: &Page, status: ListingStatus, _window: ProximityWindow) -> Vec<Listing> {
    structured::extract_cards(page.root(), status)
}

/// Search-page strategies in priority order.
pub const PAGE_STRATEGIES: &[(&str, PageStrategy)] =
    &[("text-proximity", text_proximity), ("cards", cards)];

/// Run the strategies over a parsed page.
pub fn extract_page_listings(
    page: &Page,
    status: ListingStatus,
    window: ProximityWindow,
) -> Vec<Listing> {
    for (name, strategy) in PAGE_STRATEGIES {
        let listings = strategy(page, status, window);
        if !listings.is_empty() {
            debug!(strategy = *name, count = listings.len(), "page strategy matched");
            return listings;
        }
    }
    Vec::new()
}

/// Parse a raw search page and extract its listings.
pub fn parse_search_page(
    raw: &str,
    url: &str,
    status: ListingStatus,
    window: ProximityWindow,
) -> Result<Vec<Listing>> {
    let page = Page::parse(raw, url)?;
    Ok(extract_page_listings(&page, status, window))
}

/// Listings gathered over one crawl, keyed by identifier.
///
/// A later record with the same identifier replaces the earlier one.
#[derive(Debug, Default)]
pub struct Dedup {
    by_id: HashMap<String, Listing>,
}

impl Dedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a page of listings. Returns how many identifiers were new.
    pub fn insert_page(&mut self, listings: Vec<Listing>) -> usize {
        let mut added = 0;
        for listing in listings {
            if self.by_id.insert(listing.id.clone(), listing).is_none() {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The surviving listings, in no particular order.
    pub fn into_listings(self) -> Vec<Listing> {
        self.by_id.into_values().collect()
    }
}

/// A page with fewer records than a full page ends the crawl.
pub fn is_last_page(records_on_page: usize, pagination: &PaginationConfig) -> bool {
    records_on_page < pagination.full_page_size
}
