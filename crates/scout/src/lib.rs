// ABOUTME: Main library entry point for scout, a resilient real-estate listing extraction pipeline.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Listing, MarketStats, Location, ScrapeError.

//! Scout - structured listings and market statistics from real-estate sites.
//!
//! Listing sites offer no stable API, so scout fetches their pages with a
//! browser-like client and extracts records with layered strategies: address
//! anchors in flattened page text, then selector-driven cards. Fields that
//! cannot be found stay at zero instead of failing the record.
//!
//! # Example
//!
//! ```no_run
//! use listing_scout::{Client, ListingStatus, Location, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build()?;
//!     let manoa = Location::new("Honolulu", "HI").with_neighborhood("Manoa");
//!     for listing in client.search(&manoa, ListingStatus::Sold).await? {
//!         println!("{} {}", listing.address, listing.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod crawl;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod listing;
pub mod location;
pub mod options;
pub mod resource;

pub use crate::client::Client;
pub use crate::crawl::parse_search_page;
pub use crate::error::{ErrorCode, Result, ScrapeError};
pub use crate::listing::{
    Listing, ListingExtras, ListingStatus, MarketStats, PropertyType, UnknownStatus,
};
pub use crate::location::Location;
pub use crate::options::{ClientBuilder, KnownRegion, Options};
