// ABOUTME: Single-listing detail pages: identity from the URL path, then page fields merged on top.
// ABOUTME: Two URL grammars are supported, the generic listing-site slug and Redfin's state/city/address path.

//! Detail-page extraction.
//!
//! A detail URL already names the property, so the URL is parsed first and
//! gives a usable record even when the page itself is blocked. When the page
//! does load, fields found in it are merged into that record.
//!
//! Fetching lives in the client; everything here is synchronous.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::dom::Page;
use crate::error::Result;
use crate::extractors::fields::{all_texts, element_text, last_meta_content};
use crate::extractors::compiled::get_or_compile;
use crate::extractors::parsers::{parse_currency, parse_decimal, parse_int};
use crate::extractors::rules::{apply_rules, capture_value, FieldRule};
use crate::listing::{Listing, ListingStatus, PropertyType};
use crate::options::KnownRegion;

/// Features longer than this many characters are page chrome, not features.
const MAX_FEATURE_CHARS: usize = 100;

/// URL grammar of a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSite {
    /// `/property/{address-city-st}/...` style slugs.
    Generic,
    /// `/{ST}/{City}/{Address-Zip}/home/{id}`.
    Redfin,
}

impl DetailSite {
    /// Pick the grammar from the host name.
    pub fn for_url(url: &Url) -> Self {
        match url.host_str() {
            Some(host) if host.to_ascii_lowercase().contains("redfin.") => DetailSite::Redfin,
            _ => DetailSite::Generic,
        }
    }

    /// Build the URL-derived record. Status defaults to sold.
    pub fn listing_from_url(&self, url: &Url) -> Listing {
        match self {
            DetailSite::Generic => parse_generic_url(url),
            DetailSite::Redfin => parse_redfin_url(url),
        }
    }
}

/// Upper-case the first character of every space-separated word.
///
/// The rest of each word is left as is: `"poelua st"` -> `"Poelua St"`,
/// `"mcCully"` -> `"McCully"`.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

fn is_state_token(token: &str) -> bool {
    token.len() == 2 && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse `/property/2819-poelua-st-honolulu-hi/...`.
///
/// The slug is the segment after `property`, or the first segment. Tokens are
/// scanned from the right for the last two-letter alphabetic token (the
/// state); the token before it is the city and everything earlier is the
/// street address. Without a state token nothing is filled in.
fn parse_generic_url(url: &Url) -> Listing {
    let mut listing = Listing::with_status(ListingStatus::Sold);
    let segments = path_segments(url);

    let slug = segments
        .iter()
        .position(|s| s.eq_ignore_ascii_case("property"))
        .and_then(|i| segments.get(i + 1))
        .or_else(|| segments.first());
    let Some(slug) = slug else {
        return listing;
    };

    let tokens: Vec<&str> = slug.split('-').filter(|t| !t.is_empty()).collect();
    let Some(state_idx) = tokens.iter().rposition(|t| is_state_token(t)) else {
        return listing;
    };

    listing.state = tokens[state_idx].to_ascii_uppercase();
    if state_idx >= 1 {
        listing.city = title_case(tokens[state_idx - 1]);
    }
    if state_idx >= 2 {
        listing.address = title_case(&tokens[..state_idx - 1].join(" "));
    }
    listing
}

/// Parse `/HI/Honolulu/2819-Poelua-St-96822/home/88513618`.
///
/// The first segment of exactly two upper-case letters is the state, the next
/// the city, and the next splits on its last hyphen into address and zip.
fn parse_redfin_url(url: &Url) -> Listing {
    let mut listing = Listing::with_status(ListingStatus::Sold);
    let segments = path_segments(url);

    let Some(state_idx) = segments
        .iter()
        .position(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase()))
    else {
        return listing;
    };

    listing.state = segments[state_idx].to_string();
    if let Some(city) = segments.get(state_idx + 1) {
        listing.city = city.replace('-', " ");
    }
    if let Some(address_zip) = segments.get(state_idx + 2) {
        if let Some((address, zip)) = address_zip.rsplit_once('-') {
            if !address.is_empty() {
                listing.address = title_case(&address.replace('-', " "));
                listing.zip_code = zip.to_string();
            }
        }
    }
    listing
}

/// First listing whose address contains `address`, case-insensitively.
pub fn find_by_address(listings: &[Listing], address: &str) -> Option<Listing> {
    let needle = address.to_lowercase();
    if needle.trim().is_empty() {
        return None;
    }
    listings
        .iter()
        .find(|l| l.address.to_lowercase().contains(&needle))
        .cloned()
}

const CATEGORY_KEYWORDS: &[(&str, PropertyType)] = &[
    ("condominium", PropertyType::Condo),
    ("condo", PropertyType::Condo),
    ("townhouse", PropertyType::Townhouse),
    ("townhome", PropertyType::Townhouse),
    ("apartment", PropertyType::Apartment),
];

static CATEGORY_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(CATEGORY_KEYWORDS.iter().map(|(kw, _)| *kw))
        .unwrap()
});

/// Category by keyword, checked in `priority` order. `House` when none appear.
pub fn detect_property_type(text: &str, priority: &[PropertyType]) -> PropertyType {
    let mut found = Vec::new();
    for m in CATEGORY_MATCHER.find_iter(text) {
        let kind = CATEGORY_KEYWORDS[m.pattern().as_usize()].1;
        if !found.contains(&kind) {
            found.push(kind);
        }
    }
    priority
        .iter()
        .copied()
        .find(|kind| found.contains(kind))
        .unwrap_or_default()
}

const GENERIC_CATEGORIES: &[PropertyType] = &[PropertyType::Condo, PropertyType::Townhouse];
const REDFIN_CATEGORIES: &[PropertyType] = &[
    PropertyType::Condo,
    PropertyType::Townhouse,
    PropertyType::Apartment,
];

static GENERIC_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new("price", r"\$([0-9,]+)", |l, c| {
            l.price = parse_currency(capture_value(c))
        }),
        FieldRule::new(
            "square_feet",
            r"(?i)(\d[\d,]*)\s*(?:sq|square)\s*(?:ft|feet)",
            |l, c| l.square_feet = parse_int(capture_value(c)),
        ),
        FieldRule::new("bedrooms", r"(?i)(\d+)\s*bed", |l, c| {
            l.bedrooms = parse_int(capture_value(c))
        }),
        FieldRule::new("bathrooms", r"(?i)(\d+(?:\.\d+)?)\s*bath", |l, c| {
            l.bathrooms = parse_decimal(capture_value(c))
        }),
        FieldRule::new("year_built", r"(?i)(?:built|year)\s*:?\s*(\d{4})", |l, c| {
            l.year_built = parse_int(capture_value(c))
        }),
        FieldRule::new(
            "sold_date",
            r"SOLD\s+([A-Z]{3}\s+\d{1,2},\s+\d{4})",
            |l, c| l.sold_date = Some(capture_value(c).to_string()),
        ),
    ]
});

static REDFIN_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new("price", r"\$([0-9,]+(?:\.[0-9]{2})?)", |l, c| {
            l.price = parse_currency(capture_value(c))
        }),
        FieldRule::new(
            "square_feet",
            r"(?i)(\d[\d,]*)\s*(?:sq\.?\s*ft\.?|square\s+feet)",
            |l, c| l.square_feet = parse_int(capture_value(c)),
        ),
        FieldRule::new("bedrooms", r"(?i)(\d+)\s*bed", |l, c| {
            l.bedrooms = parse_int(capture_value(c))
        }),
        FieldRule::new("bathrooms", r"(?i)(\d+(?:\.\d+)?)\s*bath", |l, c| {
            l.bathrooms = parse_decimal(capture_value(c))
        }),
        FieldRule::new("year_built", r"(?i)(?:built|year)\s*:?\s*(\d{4})", |l, c| {
            l.year_built = parse_int(capture_value(c))
        }),
        FieldRule::new(
            "sold_date",
            r"SOLD\s+([A-Z]{3}\s+\d{1,2},\s+\d{4})",
            |l, c| l.sold_date = Some(capture_value(c).to_string()),
        ),
        FieldRule::new("lot_size", r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:acres?|ac\b)", |l, c| {
            l.lot_size = parse_decimal(capture_value(c))
        }),
        FieldRule::new("days_on_market", r"(?i)(\d+)\s*days?\s*on\s*market", |l, c| {
            l.days_on_market = parse_int(capture_value(c))
        }),
        FieldRule::new("school_district", r"[Dd]istrict:\s*([^,\n]+)", |l, c| {
            l.extras.school_district = Some(capture_value(c).to_string())
        }),
        FieldRule::new("elementary_school", r"Elementary:\s*([^,\n]+)", |l, c| {
            l.extras.elementary_school = Some(capture_value(c).to_string())
        }),
        FieldRule::new("middle_school", r"Middle:\s*([^,\n]+)", |l, c| {
            l.extras.middle_school = Some(capture_value(c).to_string())
        }),
        FieldRule::new("high_school", r"High:\s*([^,\n]+)", |l, c| {
            l.extras.high_school = Some(capture_value(c).to_string())
        }),
        FieldRule::new("property_condition", r"Condition:\s*([^,\n]+)", |l, c| {
            l.extras.property_condition = Some(capture_value(c).to_string())
        }),
        FieldRule::new("property_tax", r"Property\s+Tax:\s*\$([0-9,]+)", |l, c| {
            l.extras.property_tax = Some(format!("${}", capture_value(c)))
        }),
        FieldRule::new("hoa_fees", r"HOA:\s*\$([0-9,]+)", |l, c| {
            l.extras.hoa_fees = Some(format!("${}", capture_value(c)))
        }),
        FieldRule::new(
            "parking",
            r"(?i)(\d+)\s*car\s*garage|(\d+)\s*parking\s*space",
            |l, c| {
                if let Some(cars) = c.get(1) {
                    l.extras.parking_spaces = parse_int(cars.as_str());
                    l.extras.garage = Some(format!("{} car garage", cars.as_str()));
                } else if let Some(spaces) = c.get(2) {
                    l.extras.parking_spaces = parse_int(spaces.as_str());
                }
            },
        ),
    ]
});

/// Labeled facts appended to the feature list, in this order.
static LABELED_FEATURE_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        "Heating",
        "Cooling",
        "Flooring",
        "Appliances",
        "Roof",
        "Foundation",
        "View",
        "Fireplace",
    ]
    .into_iter()
    .map(|label| {
        let re = Regex::new(&format!(r"{}:\s*([^,\n]+)", label)).unwrap();
        (label, re)
    })
    .collect()
});

static DESCRIPTION_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)description[:\s]*([^.]{50,500}\.?)").unwrap());

const GENERIC_FEATURE_SELECTOR: &str = "li, .feature, .amenity";
const REDFIN_FEATURE_SELECTOR: &str =
    ".amenity-group li, .feature-list li, .amenities li, .features li";
const REDFIN_DESCRIPTION_SELECTOR: &str =
    ".remarks, .property-description, .listing-description, .public-remarks";
const REDFIN_PEOPLE_SELECTOR: &str = ".agent-name, .listing-agent, .brokerage-name";

fn short_features(page: &Page, css: &str) -> Vec<String> {
    all_texts(page.root(), css)
        .into_iter()
        .filter(|f| f.chars().count() < MAX_FEATURE_CHARS)
        .collect()
}

/// Parse a fetched detail page and merge its fields into the URL-derived record.
///
/// Fails only when the body cannot be parsed as a document; callers treat that
/// like a failed fetch.
pub fn extract_detail(
    site: DetailSite,
    raw: &str,
    url: &str,
    mut listing: Listing,
    region: &KnownRegion,
) -> Result<Listing> {
    let page = Page::parse(raw, url)?;
    match site {
        DetailSite::Generic => merge_generic(&page, &mut listing, region),
        DetailSite::Redfin => merge_redfin(&page, &mut listing, region),
    }
    listing.finalize();
    Ok(listing)
}

fn merge_generic(page: &Page, listing: &mut Listing, region: &KnownRegion) {
    let text = page.text();
    apply_rules(&GENERIC_RULES, text, listing);

    if let Some(description) = last_meta_content(page.root(), "meta[name='description']") {
        listing.description = Some(description);
    }
    listing.features = short_features(page, GENERIC_FEATURE_SELECTOR);
    listing.property_type = detect_property_type(text, GENERIC_CATEGORIES);

    if listing.zip_code.is_empty() && region.matches(&listing.city, &listing.state) {
        listing.zip_code = region.zip_code.clone();
    }
}

fn merge_redfin(page: &Page, listing: &mut Listing, region: &KnownRegion) {
    let text = page.text();
    apply_rules(&REDFIN_RULES, text, listing);

    listing.description = all_texts(page.root(), REDFIN_DESCRIPTION_SELECTOR)
        .into_iter()
        .fold(None, |best: Option<String>, d| match best {
            Some(b) if b.len() >= d.len() => Some(b),
            _ => Some(d),
        })
        .or_else(|| {
            DESCRIPTION_TEXT_RE
                .captures(text)
                .map(|c| capture_value(&c).to_string())
        });

    let mut features = short_features(page, REDFIN_FEATURE_SELECTOR);
    for feature in &features {
        let lower = feature.to_lowercase();
        if lower.contains("heating") {
            listing.extras.heating = Some(feature.clone());
        }
        if lower.contains("cooling") || lower.contains("air") {
            listing.extras.cooling = Some(feature.clone());
        }
        if lower.contains("floor") {
            listing.extras.flooring.push(feature.clone());
        }
        if lower.contains("appliance") {
            listing.extras.appliances.push(feature.clone());
        }
    }
    for (label, re) in LABELED_FEATURE_RES.iter() {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let value = capture_value(&caps).to_string();
        match *label {
            "Heating" => listing.extras.heating = Some(value.clone()),
            "Cooling" => listing.extras.cooling = Some(value.clone()),
            "Flooring" => listing.extras.flooring.push(value.clone()),
            "Appliances" => listing.extras.appliances.push(value.clone()),
            _ => {}
        }
        features.push(value);
    }
    listing.features = features;

    if region.city.eq_ignore_ascii_case(&listing.city) && region.zip_code == listing.zip_code {
        listing.extras.neighborhood = Some(region.neighborhood.clone());
    }

    if let Some(sel) = get_or_compile(REDFIN_PEOPLE_SELECTOR) {
        for el in page.root().select(&sel) {
            let text = element_text(el);
            let lower = text.to_lowercase();
            if listing.agent.is_none() && lower.contains("agent") {
                listing.agent = Some(text.clone());
            }
            if listing.brokerage.is_none() && lower.contains("broker") {
                listing.brokerage = Some(text);
            }
        }
    }

    listing.property_type = detect_property_type(text, REDFIN_CATEGORIES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn title_case_only_touches_first_letters() {
        assert_eq!(title_case("2819 poelua st"), "2819 Poelua St");
        assert_eq!(title_case("mcCully"), "McCully");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn site_follows_host() {
        assert_eq!(
            DetailSite::for_url(&url("https://www.redfin.com/HI/Honolulu/x/home/1")),
            DetailSite::Redfin
        );
        assert_eq!(
            DetailSite::for_url(&url("https://www.homes.com/property/x/")),
            DetailSite::Generic
        );
    }

    #[test]
    fn generic_url_scans_state_from_the_right() {
        let listing = DetailSite::Generic.listing_from_url(&url(
            "https://www.homes.com/property/2819-poelua-st-honolulu-hi/9vx1b2/",
        ));
        assert_eq!(listing.address, "2819 Poelua St");
        assert_eq!(listing.city, "Honolulu");
        assert_eq!(listing.state, "HI");
        assert_eq!(listing.status, ListingStatus::Sold);
    }

    #[test]
    fn generic_url_without_property_segment_uses_first() {
        let listing = DetailSite::Generic
            .listing_from_url(&url("https://example.com/1645-oahu-ave-honolulu-hi-96822"));
        assert_eq!(listing.address, "1645 Oahu Ave");
        assert_eq!(listing.city, "Honolulu");
        assert_eq!(listing.state, "HI");
    }

    #[test]
    fn generic_url_without_state_is_empty() {
        let listing = DetailSite::Generic.listing_from_url(&url("https://example.com/"));
        assert_eq!(listing.address, "");
        assert_eq!(listing.state, "");
    }

    #[test]
    fn redfin_url_grammar() {
        let listing = DetailSite::Redfin.listing_from_url(&url(
            "https://www.redfin.com/HI/Honolulu/2819-Poelua-St-96822/home/88513618",
        ));
        assert_eq!(listing.address, "2819 Poelua St");
        assert_eq!(listing.city, "Honolulu");
        assert_eq!(listing.state, "HI");
        assert_eq!(listing.zip_code, "96822");
    }

    #[test]
    fn redfin_city_hyphens_become_spaces() {
        let listing = DetailSite::Redfin.listing_from_url(&url(
            "https://www.redfin.com/HI/Pearl-City/98-1234-Kaahumanu-St-96782/home/1",
        ));
        assert_eq!(listing.city, "Pearl City");
        assert_eq!(listing.address, "98 1234 Kaahumanu St");
        assert_eq!(listing.zip_code, "96782");
    }

    #[test]
    fn category_priority() {
        let both = "Townhome living in a condominium complex";
        assert_eq!(
            detect_property_type(both, REDFIN_CATEGORIES),
            PropertyType::Condo
        );
        assert_eq!(
            detect_property_type("Apartment near a TOWNHOUSE", REDFIN_CATEGORIES),
            PropertyType::Townhouse
        );
        assert_eq!(
            detect_property_type("apartment building", GENERIC_CATEGORIES),
            PropertyType::House
        );
        assert_eq!(
            detect_property_type("single family", REDFIN_CATEGORIES),
            PropertyType::House
        );
    }

    #[test]
    fn find_by_address_is_case_insensitive() {
        let listings = vec![
            Listing {
                address: "1645 Oahu Ave".to_string(),
                ..Default::default()
            },
            Listing {
                address: "2819 POELUA ST".to_string(),
                price: 1,
                ..Default::default()
            },
        ];
        let hit = find_by_address(&listings, "2819 Poelua St").unwrap();
        assert_eq!(hit.price, 1);
        assert!(find_by_address(&listings, "").is_none());
        assert!(find_by_address(&listings, "99 Nowhere Ln").is_none());
    }

    #[test]
    fn generic_merge_reads_page_fields() {
        let url_str = "https://www.homes.com/property/2819-poelua-st-honolulu-hi/9vx1b2/";
        let base = DetailSite::Generic.listing_from_url(&url(url_str));
        let html = r#"<html><head>
            <meta name="description" content="Old description">
            <meta name="description" content="Charming Manoa home">
            </head><body>
            <h1>$1,250,000</h1>
            <p>3 Beds 2 Baths 1,500 Sq Ft</p>
            <p>Year Built: 1962</p>
            <p>SOLD OCT 3, 2024</p>
            <ul><li>Lanai</li><li>Solar panels</li></ul>
            </body></html>"#;

        let listing = extract_detail(
            DetailSite::Generic,
            html,
            url_str,
            base,
            &KnownRegion::default(),
        )
        .unwrap();

        assert_eq!(listing.price, 1_250_000);
        assert_eq!(listing.bedrooms, 3);
        assert_eq!(listing.bathrooms, 2.0);
        assert_eq!(listing.square_feet, 1_500);
        assert_eq!(listing.year_built, 1962);
        assert_eq!(listing.sold_date.as_deref(), Some("OCT 3, 2024"));
        assert_eq!(listing.description.as_deref(), Some("Charming Manoa home"));
        assert_eq!(listing.features, vec!["Lanai", "Solar panels"]);
        assert_eq!(listing.zip_code, "96822");
        assert_eq!(listing.property_type, PropertyType::House);
        assert_eq!(listing.price_per_sq_ft, Some(833));
        assert_eq!(listing.id, "prop_2819poeluasthonolulu");
    }

    #[test]
    fn redfin_merge_reads_extended_fields() {
        let url_str = "https://www.redfin.com/HI/Honolulu/2819-Poelua-St-96822/home/88513618";
        let base = DetailSite::Redfin.listing_from_url(&url(url_str));
        let html = r#"<html><body>
            <div class="price">$1,250,000</div>
            <div>3 beds 2.5 baths 1,500 sq ft</div>
            <div>0.25 acres</div>
            <div>Built 1962</div>
            <div>14 days on market</div>
            <div>School District: Hawaii Department of Education</div>
            <div>Elementary: Noelani Elementary School</div>
            <div>Middle: Washington Middle School</div>
            <div>High: Roosevelt High School</div>
            <div>Condition: Updated</div>
            <div>Property Tax: $3,200</div>
            <div>HOA: $450</div>
            <div>2 car garage</div>
            <div>Heating: None</div>
            <div>Cooling: Ceiling Fans</div>
            <p class="remarks">Short remark.</p>
            <p class="public-remarks">Valley home with mountain views and a large lanai.</p>
            <ul class="features"><li>Central air conditioning</li><li>Hardwood floors</li></ul>
            <span class="agent-name">Listing agent: Kea Akana</span>
            <span class="brokerage-name">Manoa Realty brokerage</span>
            </body></html>"#;

        let listing = extract_detail(
            DetailSite::Redfin,
            html,
            url_str,
            base,
            &KnownRegion::default(),
        )
        .unwrap();

        assert_eq!(listing.price, 1_250_000);
        assert_eq!(listing.bedrooms, 3);
        assert_eq!(listing.bathrooms, 2.5);
        assert_eq!(listing.square_feet, 1_500);
        assert_eq!(listing.lot_size, 0.25);
        assert_eq!(listing.year_built, 1962);
        assert_eq!(listing.days_on_market, 14);
        assert_eq!(
            listing.extras.school_district.as_deref(),
            Some("Hawaii Department of Education")
        );
        assert_eq!(
            listing.extras.elementary_school.as_deref(),
            Some("Noelani Elementary School")
        );
        assert_eq!(listing.extras.middle_school.as_deref(), Some("Washington Middle School"));
        assert_eq!(listing.extras.high_school.as_deref(), Some("Roosevelt High School"));
        assert_eq!(listing.extras.property_condition.as_deref(), Some("Updated"));
        assert_eq!(listing.extras.property_tax.as_deref(), Some("$3,200"));
        assert_eq!(listing.extras.hoa_fees.as_deref(), Some("$450"));
        assert_eq!(listing.extras.parking_spaces, 2);
        assert_eq!(listing.extras.garage.as_deref(), Some("2 car garage"));
        assert_eq!(listing.extras.heating.as_deref(), Some("None"));
        assert_eq!(listing.extras.cooling.as_deref(), Some("Ceiling Fans"));
        assert_eq!(listing.extras.flooring, vec!["Hardwood floors"]);
        assert_eq!(
            listing.description.as_deref(),
            Some("Valley home with mountain views and a large lanai.")
        );
        assert_eq!(
            listing.features,
            vec!["Central air conditioning", "Hardwood floors", "None", "Ceiling Fans"]
        );
        assert_eq!(listing.extras.neighborhood.as_deref(), Some("Manoa"));
        assert_eq!(listing.agent.as_deref(), Some("Listing agent: Kea Akana"));
        assert_eq!(listing.brokerage.as_deref(), Some("Manoa Realty brokerage"));
        assert_eq!(listing.property_type, PropertyType::House);
        assert_eq!(listing.status, ListingStatus::Sold);
        assert_eq!(listing.id, "prop_2819poeluasthonolulu");
    }

    #[test]
    fn unparseable_body_is_an_error() {
        let base = Listing::default();
        let err = extract_detail(
            DetailSite::Generic,
            "Access denied",
            "https://example.com",
            base,
            &KnownRegion::default(),
        )
        .unwrap_err();
        assert!(err.is_parse());
    }
}
