// ABOUTME: Selector-driven extraction of listing cards and labeled statistics rows.
// ABOUTME: Each field has its own selector group so one missing element never aborts the rest.

//! Structured extraction.
//!
//! Used when a page exposes explicit markup: repeated listing cards, or a
//! `.housing-trends` table of labeled market statistics.

use scraper::ElementRef;

use crate::extractors::compiled::get_or_compile;
use crate::extractors::fields::{element_text, first_text};
use crate::extractors::parsers::{parse_currency, parse_decimal, parse_int, parse_percent};
use crate::extractors::proximity::split_address_line;
use crate::listing::{Listing, ListingStatus, MarketStats, PropertyType};

/// Card container selectors, most specific first. The first one matching anything wins.
pub const CARD_SELECTORS: &[&str] = &[
    ".property-card",
    ".listing-card",
    ".search-result",
    "article.listing",
];

const ADDRESS_SELECTOR: &str = "h3, .property-address, .listing-address";
const PRICE_SELECTOR: &str = ".price, .listing-price";
const BEDS_SELECTOR: &str = ".beds, .bedrooms";
const BATHS_SELECTOR: &str = ".baths, .bathrooms";
const SQFT_SELECTOR: &str = ".sqft, .square-feet";
const YEAR_SELECTOR: &str = ".year-built, .built";
const DOM_SELECTOR: &str = ".days-on-market, .dom";
const DESCRIPTION_SELECTOR: &str = ".description, .listing-description";
const AGENT_SELECTOR: &str = ".agent-name, .listing-agent";
const BROKERAGE_SELECTOR: &str = ".brokerage-name, .listing-brokerage";

const TRENDS_ROW_SELECTOR: &str = ".housing-trends tr";

/// Which statistic a row label maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatLabel {
    MedianSingleFamily,
    MedianTownhouse,
    MedianSale,
    AveragePricePerSqFt,
    HomesForSale,
    SalesLast12Months,
    YearOverYear,
    MonthsOfSupply,
    AverageDaysOnMarket,
}

/// Labels matched by case-sensitive substring. Specific medians come before the
/// generic one; the first hit wins.
const STAT_LABELS: &[(&str, StatLabel)] = &[
    ("Median Single Family Sale Price", StatLabel::MedianSingleFamily),
    ("Median Townhouse Sale Price", StatLabel::MedianTownhouse),
    ("Median Sale Price", StatLabel::MedianSale),
    ("Average Price Per Sq Ft", StatLabel::AveragePricePerSqFt),
    ("Number of Homes for Sale", StatLabel::HomesForSale),
    ("Last 12 months Home Sales", StatLabel::SalesLast12Months),
    ("YoY Change", StatLabel::YearOverYear),
    ("Months of Supply", StatLabel::MonthsOfSupply),
    ("Average Days on Market", StatLabel::AverageDaysOnMarket),
];

fn classify_label(label: &str) -> Option<StatLabel> {
    STAT_LABELS
        .iter()
        .find(|(needle, _)| label.contains(needle))
        .map(|(_, stat)| *stat)
}

/// Fill `stats` from `.housing-trends` rows. Returns how many rows were recognized.
///
/// The first cell of a row is its label, the last its value. Later rows
/// overwrite earlier ones for the same label.
pub fn extract_stat_rows(root: ElementRef<'_>, stats: &mut MarketStats) -> usize {
    let (Some(rows), Some(cells)) = (get_or_compile(TRENDS_ROW_SELECTOR), get_or_compile("td"))
    else {
        return 0;
    };

    let mut recognized = 0;
    for row in root.select(&rows) {
        let tds: Vec<ElementRef<'_>> = row.select(&cells).collect();
        let (Some(first), Some(last)) = (tds.first(), tds.last()) else {
            continue;
        };
        let label = element_text(*first);
        let value = element_text(*last);

        let Some(stat) = classify_label(&label) else {
            continue;
        };
        recognized += 1;

        match stat {
            StatLabel::MedianSingleFamily => stats.median_single_family_price = parse_currency(&value),
            StatLabel::MedianTownhouse => stats.median_townhouse_price = parse_currency(&value),
            StatLabel::MedianSale => stats.median_sale_price = parse_currency(&value),
            StatLabel::AveragePricePerSqFt => stats.average_price_per_sq_ft = parse_currency(&value),
            StatLabel::HomesForSale => stats.homes_for_sale = parse_int(&value),
            StatLabel::SalesLast12Months => stats.sales_last_12_months = parse_int(&value),
            StatLabel::YearOverYear => stats.year_over_year_change = parse_percent(&value),
            StatLabel::MonthsOfSupply => stats.months_of_supply = parse_decimal(&value),
            StatLabel::AverageDaysOnMarket => stats.average_days_on_market = parse_int(&value),
        }
    }
    recognized
}

/// Extract one listing from a card element. Fields are read independently.
pub fn extract_card(card: ElementRef<'_>, status: ListingStatus) -> Listing {
    let mut listing = Listing::with_status(status);
    listing.property_type = PropertyType::House;

    if let Some(parts) = first_text(card, ADDRESS_SELECTOR).and_then(|t| split_address_line(&t)) {
        parts.apply_to(&mut listing);
    }
    if let Some(text) = first_text(card, PRICE_SELECTOR) {
        listing.price = parse_currency(&text);
    }
    if let Some(text) = first_text(card, BEDS_SELECTOR) {
        listing.bedrooms = parse_int(&text);
    }
    if let Some(text) = first_text(card, BATHS_SELECTOR) {
        listing.bathrooms = parse_decimal(&text);
    }
    if let Some(text) = first_text(card, SQFT_SELECTOR) {
        listing.square_feet = parse_int(&text);
    }
    if let Some(text) = first_text(card, YEAR_SELECTOR) {
        listing.year_built = parse_int(&text);
    }
    if let Some(text) = first_text(card, DOM_SELECTOR) {
        listing.days_on_market = parse_int(&text);
    }
    listing.description = first_text(card, DESCRIPTION_SELECTOR);
    listing.agent = first_text(card, AGENT_SELECTOR);
    listing.brokerage = first_text(card, BROKERAGE_SELECTOR);

    listing.finalize();
    listing
}

/// Extract admissible listings from the first card selector that matches anything.
pub fn extract_cards(root: ElementRef<'_>, status: ListingStatus) -> Vec<Listing> {
    for css in CARD_SELECTORS {
        let Some(sel) = get_or_compile(css) else {
            continue;
        };
        let cards: Vec<ElementRef<'_>> = root.select(&sel).collect();
        if cards.is_empty() {
            continue;
        }
        return cards
            .into_iter()
            .map(|card| extract_card(card, status))
            .filter(Listing::is_admissible)
            .collect();
    }
    Vec::new()
}
