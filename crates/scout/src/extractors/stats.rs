// ABOUTME: Market statistics extraction: labeled trend rows first, free-text patterns as a fallback.
// ABOUTME: Fallback patterns only run when the median sale price is still missing after the rows.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dom::Page;
use crate::extractors::parsers::{parse_currency, parse_int, parse_percent};
use crate::extractors::structured::extract_stat_rows;
use crate::listing::MarketStats;

static MEDIAN_SALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Median Sale Price\s+\$([0-9,]+)").unwrap());
static PRICE_PER_SQFT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Average Price Per Sq Ft\s+\$([0-9,]+)").unwrap());
static DAYS_ON_MARKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+days on the market").unwrap());
static DOWN_PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"down\s+(\d+)%").unwrap());
static HOMES_FOR_SALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+homes for sale in").unwrap());
static HOME_SALES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+home sales").unwrap());

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Apply the free-text patterns. Each one is independent of the others.
///
/// Only a "down X%" phrasing is recognized for year-over-year change, and it
/// is stored negated. Rising markets phrased "up X%" are left at zero.
fn apply_text_fallback(text: &str, stats: &mut MarketStats) {
    if let Some(v) = capture(&MEDIAN_SALE_RE, text) {
        stats.median_sale_price = parse_currency(v);
    }
    if let Some(v) = capture(&PRICE_PER_SQFT_RE, text) {
        stats.average_price_per_sq_ft = parse_currency(v);
    }
    if let Some(v) = capture(&DAYS_ON_MARKET_RE, text) {
        stats.average_days_on_market = parse_int(v);
    }
    if let Some(v) = capture(&DOWN_PERCENT_RE, text) {
        stats.year_over_year_change = -parse_percent(v);
        debug!(
            change = stats.year_over_year_change,
            "year-over-year change read from \"down X%\" phrasing"
        );
    }
    if let Some(v) = capture(&HOMES_FOR_SALE_RE, text) {
        stats.homes_for_sale = parse_int(v);
    }
    if let Some(v) = capture(&HOME_SALES_RE, text) {
        stats.sales_last_12_months = parse_int(v);
    }
}

/// Extract market statistics for `area` from a parsed statistics page.
///
/// The timestamp is the moment of extraction.
pub fn extract_market_stats(page: &Page, area: &str) -> MarketStats {
    let mut stats = MarketStats::new(area);

    let rows = extract_stat_rows(page.root(), &mut stats);
    debug!(area, rows, "statistics rows recognized");

    if !stats.has_primary_metric() {
        debug!(area, "median sale price missing from rows, scanning page text");
        apply_text_fallback(page.text(), &mut stats);
    }

    stats
}
