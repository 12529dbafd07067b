// ABOUTME: Stable listing identifiers derived from normalized address and city text.
// ABOUTME: Pure and deterministic so pagination dedup and cross-strategy merges agree.

/// Prefix for every synthesized identifier.
pub const ID_PREFIX: &str = "prop_";
/// Maximum length of the normalized body, prefix excluded.
pub const MAX_ID_BODY_LEN: usize = 25;
/// Body used when normalization leaves nothing.
pub const UNKNOWN_ID_BODY: &str = "unknown";

/// Build the identifier for a listing.
///
/// Lower-cases `address + city`, keeps only ASCII letters and digits, truncates
/// to 25 characters and prefixes `prop_`. Empty input maps to `prop_unknown`.
pub fn listing_id(address: &str, city: &str) -> String {
    let body: String = address
        .chars()
        .chain(city.chars())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(MAX_ID_BODY_LEN)
        .collect();

    if body.is_empty() {
        format!("{}{}", ID_PREFIX, UNKNOWN_ID_BODY)
    } else {
        format!("{}{}", ID_PREFIX, body)
    }
}
