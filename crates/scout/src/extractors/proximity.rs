// ABOUTME: Text-proximity extraction: finds address anchors in flattened page text and reads nearby fields.
// ABOUTME: Primary strategy for search result pages whose markup is too dynamic for stable selectors.

//! Text-proximity extraction.
//!
//! Search pages render each result as a loose cluster of text: price, facts,
//! and a one-line `"2819 Poelua St, Honolulu, HI 96822"` address. This module
//! finds every address line, cuts a character window around it, and runs an
//! independent pattern per field inside the window.
//!
//! Windows of adjacent results overlap, so a field can be read from the
//! neighbouring result when its own is missing. That imprecision is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::parsers::{parse_currency, parse_decimal, parse_int};
use crate::extractors::rules::{apply_rules, capture_value, FieldRule};
use crate::listing::{Listing, ListingStatus, PropertyType};
use crate::options::ProximityWindow;

/// Street number, street name, recognized suffix, optional unit, then `, City, ST 12345`.
static ADDRESS_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b\d+ +[A-Za-z][A-Za-z .'-]{0,40}? +",
        r"(?:St|Ave|Rd|Dr|Pl|Place|Street|Avenue|Road|Drive|Ln|Lane|Way|Ct|Court|Blvd|Boulevard|Cir|Circle|Loop|Ter|Terrace|Pkwy|Hwy)\b\.?",
        r"[^,\n]{0,40}?, *[A-Za-z][A-Za-z .'-]{0,40}?, *[A-Z]{2} +\d{5}\b",
    ))
    .unwrap()
});

static WINDOW_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new("price", r"\$(\d[\d,]*)", |l, c| {
            l.price = parse_currency(capture_value(c))
        }),
        FieldRule::new("square_feet", r"(\d[\d,]*)\s*Sq\s*Ft", |l, c| {
            l.square_feet = parse_int(capture_value(c))
        }),
        FieldRule::new("bedrooms", r"(\d+)\s*Bed", |l, c| {
            l.bedrooms = parse_int(capture_value(c))
        }),
        FieldRule::new("bathrooms", r"(\d+(?:\.\d+)?)\s*Bath", |l, c| {
            l.bathrooms = parse_decimal(capture_value(c))
        }),
        FieldRule::new(
            "sold_date",
            r"SOLD\s+([A-Z]{3}\s+\d{1,2},\s+\d{4})",
            |l, c| l.sold_date = Some(capture_value(c).to_string()),
        ),
        FieldRule::new("days_on_market", r"(\d+)\s*Days\s*On\s*Market", |l, c| {
            l.days_on_market = parse_int(capture_value(c))
        }),
        FieldRule::new("year_built", r"Built\s+(\d{4})", |l, c| {
            l.year_built = parse_int(capture_value(c))
        }),
    ]
});

/// Components of a `"street, city, ST zip"` line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressParts {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl AddressParts {
    /// Copy the components onto a listing.
    pub fn apply_to(self, listing: &mut Listing) {
        listing.address = self.address;
        listing.city = self.city;
        listing.state = self.state;
        listing.zip_code = self.zip_code;
    }
}

/// Split an address line on commas. Needs at least three segments.
///
/// The third segment is split on whitespace into state and postal code; a
/// segment with a single token only yields the state.
pub fn split_address_line(line: &str) -> Option<AddressParts> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    let mut state_zip = parts[2].split_whitespace();
    Some(AddressParts {
        address: parts[0].to_string(),
        city: parts[1].to_string(),
        state: state_zip.next().unwrap_or_default().to_string(),
        zip_code: state_zip.next().unwrap_or_default().to_string(),
    })
}

/// Byte range of the window around the anchor starting at byte `pos`.
///
/// Counts characters, not bytes, and never splits a code point.
fn window_bounds(text: &str, pos: usize, window: ProximityWindow) -> (usize, usize) {
    let start = if window.before == 0 {
        pos
    } else {
        text[..pos]
            .char_indices()
            .rev()
            .take(window.before)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(pos)
    };
    let end = text[pos..]
        .char_indices()
        .nth(window.after)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len());
    (start, end)
}

/// Extract every admissible listing from flattened page text.
///
/// Records carry `status`, default to `House`, and are finalized (price per
/// square foot and identifier). Records without an address or a price are
/// dropped.
pub fn extract_listings(text: &str, status: ListingStatus, window: ProximityWindow) -> Vec<Listing> {
    let mut listings = Vec::new();

    for anchor in ADDRESS_ANCHOR_RE.find_iter(text) {
        let Some(parts) = split_address_line(anchor.as_str()) else {
            continue;
        };

        let mut listing = Listing::with_status(status);
        listing.property_type = PropertyType::House;
        parts.apply_to(&mut listing);

        let (start, end) = window_bounds(text, anchor.start(), window);
        apply_rules(&WINDOW_RULES, &text[start..end], &mut listing);

        listing.finalize();
        if listing.is_admissible() {
            listings.push(listing);
        }
    }

    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEFAULT_WINDOW: ProximityWindow = ProximityWindow {
        before: 500,
        after: 1000,
    };

    #[test]
    fn extracts_fields_around_anchor() {
        let text = "SOLD OCT 3, 2024\n$1,250,000\n3 Beds\n2.5 Baths\n1,500 Sq Ft\n\
                    2819 Poelua St, Honolulu, HI 96822\nBuilt 1962\n12 Days On Market";
        let listings = extract_listings(text, ListingStatus::Sold, DEFAULT_WINDOW);

        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.address, "2819 Poelua St");
        assert_eq!(listing.city, "Honolulu");
        assert_eq!(listing.state, "HI");
        assert_eq!(listing.zip_code, "96822");
        assert_eq!(listing.price, 1_250_000);
        assert_eq!(listing.bedrooms, 3);
        assert_eq!(listing.bathrooms, 2.5);
        assert_eq!(listing.square_feet, 1_500);
        assert_eq!(listing.year_built, 1962);
        assert_eq!(listing.days_on_market, 12);
        assert_eq!(listing.sold_date.as_deref(), Some("OCT 3, 2024"));
        assert_eq!(listing.price_per_sq_ft, Some(833));
        assert_eq!(listing.property_type, PropertyType::House);
        assert_eq!(listing.status, ListingStatus::Sold);
        assert_eq!(listing.id, "prop_2819poeluasthonolulu");
    }

    #[test]
    fn missing_fields_stay_zero() {
        let text = "$899,000\n2819 Poelua St, Honolulu, HI 96822";
        let listings = extract_listings(text, ListingStatus::ForSale, DEFAULT_WINDOW);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].bedrooms, 0);
        assert_eq!(listings[0].square_feet, 0);
        assert_eq!(listings[0].price_per_sq_ft, None);
        assert_eq!(listings[0].sold_date, None);
        assert_eq!(listings[0].status, ListingStatus::ForSale);
    }

    #[test]
    fn drops_anchor_without_price() {
        let text = "3 Beds\n2819 Poelua St, Honolulu, HI 96822\n1,500 Sq Ft";
        assert!(extract_listings(text, ListingStatus::Sold, DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn finds_every_anchor_with_units() {
        let text = "$750,000\n3045 Kaloaluiki Place Unit 12, Honolulu, HI 96822\n\
                    $1,100,000\n1645 Oahu Ave, Honolulu, HI 96822";
        let listings = extract_listings(text, ListingStatus::Sold, DEFAULT_WINDOW);

        let addresses: Vec<&str> = listings.iter().map(|l| l.address.as_str()).collect();
        assert_eq!(addresses, vec!["3045 Kaloaluiki Place Unit 12", "1645 Oahu Ave"]);
    }

    #[test]
    fn overlapping_windows_take_the_first_price() {
        // Each window reaches back into the previous block, so the earlier
        // price wins for both records.
        let text = "$500,000\n1 Poelua St, Honolulu, HI 96822\n\
                    $900,000\n2 Poelua St, Honolulu, HI 96822";
        let listings = extract_listings(text, ListingStatus::Sold, DEFAULT_WINDOW);

        let prices: Vec<(&str, u64)> = listings
            .iter()
            .map(|l| (l.address.as_str(), l.price))
            .collect();
        assert_eq!(prices, vec![("1 Poelua St", 500_000), ("2 Poelua St", 500_000)]);

        let narrow = ProximityWindow {
            before: 10,
            after: 1000,
        };
        let listings = extract_listings(text, ListingStatus::Sold, narrow);
        assert_eq!(listings[1].price, 900_000);
    }

    #[test]
    fn window_limits_field_search() {
        let padding = "x".repeat(50);
        let text = format!("$500,000\n{}\n2819 Poelua St, Honolulu, HI 96822", padding);

        let narrow = ProximityWindow {
            before: 10,
            after: 100,
        };
        assert!(extract_listings(&text, ListingStatus::Sold, narrow).is_empty());
        assert_eq!(extract_listings(&text, ListingStatus::Sold, DEFAULT_WINDOW).len(), 1);
    }

    #[test]
    fn window_bounds_respect_char_boundaries() {
        let text = "ééééé2819";
        let pos = text.find('2').unwrap();
        let (start, end) = window_bounds(
            text,
            pos,
            ProximityWindow {
                before: 2,
                after: 2,
            },
        );
        assert_eq!(&text[start..end], "éé28");
    }

    #[test]
    fn split_address_line_needs_three_segments() {
        assert_eq!(
            split_address_line("2819 Poelua St, Honolulu, HI 96822"),
            Some(AddressParts {
                address: "2819 Poelua St".to_string(),
                city: "Honolulu".to_string(),
                state: "HI".to_string(),
                zip_code: "96822".to_string(),
            })
        );
        assert_eq!(split_address_line("2819 Poelua St, Honolulu"), None);
    }
}
