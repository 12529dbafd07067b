// ABOUTME: Search locations and the listing-site URLs built from them.
// ABOUTME: Slugs are lower-cased with spaces turned into hyphens.

use serde::{Deserialize, Serialize};

use crate::listing::ListingStatus;
use crate::options::KnownRegion;

/// A city/state pair with an optional neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub neighborhood: Option<String>,
}

/// `"Pearl City"` -> `"pearl-city"`.
pub fn slugify(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "-")
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            neighborhood: None,
        }
    }

    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        let neighborhood = neighborhood.into();
        self.neighborhood = if neighborhood.trim().is_empty() {
            None
        } else {
            Some(neighborhood)
        };
        self
    }

    /// `{base}/{city}-{state}/` plus `{neighborhood}-neighborhood/` when set.
    fn area_path(&self, base: &str) -> String {
        let mut path = format!("{}/{}-{}/", base, slugify(&self.city), slugify(&self.state));
        if let Some(neighborhood) = &self.neighborhood {
            path.push_str(&slugify(neighborhood));
            path.push_str("-neighborhood/");
        }
        path
    }

    /// Search results URL for a 1-based page number.
    pub fn search_url(&self, base: &str, status: ListingStatus, page: u32) -> String {
        let mut url = format!("{}{}/", self.area_path(base), status.slug());
        if page > 1 {
            url.push_str(&format!("p{}/", page));
        }
        url
    }

    /// Sold-listings page carrying the area's market statistics.
    pub fn stats_url(&self, base: &str) -> String {
        self.search_url(base, ListingStatus::Sold, 1)
    }

    /// `"Manoa, Honolulu, HI"` or `"Honolulu, HI"`.
    pub fn area_label(&self) -> String {
        match &self.neighborhood {
            Some(n) => format!("{}, {}, {}", n, self.city, self.state),
            None => format!("{}, {}", self.city, self.state),
        }
    }

    /// Fill in the region's neighborhood when none is set.
    pub fn or_region_neighborhood(mut self, region: &KnownRegion) -> Self {
        if self.neighborhood.is_none() {
            self.neighborhood = Some(region.neighborhood.clone());
        }
        self
    }
}

impl From<&KnownRegion> for Location {
    fn from(region: &KnownRegion) -> Self {
        Location::new(region.city.clone(), region.state.clone())
            .with_neighborhood(region.neighborhood.clone())
    }
}
