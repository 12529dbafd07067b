// ABOUTME: Listing and MarketStats records produced by the extraction pipeline.
// ABOUTME: Numeric fields default to zero when unparsed; derived fields are computed in one place.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extractors::id::listing_id;

/// Closed set of property categories. Pages rarely say, so `House` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    House,
    Condo,
    Townhouse,
    Apartment,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Apartment => "apartment",
        };
        write!(f, "{}", s)
    }
}

/// Listing status filter and record status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    ForSale,
    #[default]
    Sold,
}

impl ListingStatus {
    /// Path segment used by search and statistics URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A status filter that names neither for-sale nor sold listings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing status {0:?} (expected for-sale or sold)")]
pub struct UnknownStatus(pub String);

impl FromStr for ListingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "for-sale" | "forsale" | "active" => Ok(ListingStatus::ForSale),
            "sold" => Ok(ListingStatus::Sold),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Optional attributes only detail pages tend to carry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingExtras {
    pub property_condition: Option<String>,
    pub school_district: Option<String>,
    pub elementary_school: Option<String>,
    pub middle_school: Option<String>,
    pub high_school: Option<String>,
    pub school_ratings: Vec<String>,
    pub neighborhood: Option<String>,
    pub property_tax: Option<String>,
    pub hoa_fees: Option<String>,
    pub parking_spaces: u32,
    pub garage: Option<String>,
    pub heating: Option<String>,
    pub cooling: Option<String>,
    pub flooring: Vec<String>,
    pub appliances: Vec<String>,
    pub last_renovated: Option<String>,
    pub price_history: Vec<String>,
    pub nearby_comparables: Vec<String>,
    pub walk_score: Option<String>,
    pub transit_score: Option<String>,
    pub distance_to_beach: Option<String>,
    pub distance_to_downtown: Option<String>,
    pub flood_zone: Option<String>,
    pub home_insurance: Option<String>,
}

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: u32,
    pub lot_size: f64,
    pub price_per_sq_ft: Option<u64>,
    pub year_built: u32,
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub sold_date: Option<String>,
    pub days_on_market: u32,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub agent: Option<String>,
    pub brokerage: Option<String>,
    #[serde(flatten)]
    pub extras: ListingExtras,
}

impl Listing {
    /// Create an empty listing with the given status.
    pub fn with_status(status: ListingStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Recompute price per square foot. Unset unless both inputs are positive.
    pub fn update_price_per_sq_ft(&mut self) {
        self.price_per_sq_ft = if self.price > 0 && self.square_feet > 0 {
            Some(self.price / u64::from(self.square_feet))
        } else {
            None
        };
    }

    /// Derive the identifier from the current address and city.
    pub fn assign_id(&mut self) {
        self.id = listing_id(&self.address, &self.city);
    }

    /// Fill in every derived field.
    pub fn finalize(&mut self) {
        self.update_price_per_sq_ft();
        self.assign_id();
    }

    /// Search results keep only records with an address and a positive price.
    pub fn is_admissible(&self) -> bool {
        !self.address.trim().is_empty() && self.price > 0
    }
}

/// Aggregate market statistics for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub area: String,
    pub median_sale_price: u64,
    pub median_single_family_price: u64,
    pub median_townhouse_price: u64,
    pub average_price_per_sq_ft: u64,
    pub homes_for_sale: u32,
    pub sales_last_12_months: u32,
    pub average_days_on_market: u32,
    pub months_of_supply: f64,
    pub year_over_year_change: f64,
    pub timestamp: DateTime<Utc>,
}

impl MarketStats {
    /// Create an empty record for `area`, stamped with the current instant.
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            median_sale_price: 0,
            median_single_family_price: 0,
            median_townhouse_price: 0,
            average_price_per_sq_ft: 0,
            homes_for_sale: 0,
            sales_last_12_months: 0,
            average_days_on_market: 0,
            months_of_supply: 0.0,
            year_over_year_change: 0.0,
            timestamp: Utc::now(),
        }
    }

    /// True once the primary metric has been found.
    pub fn has_primary_metric(&self) -> bool {
        self.median_sale_price > 0
    }
}
