// ABOUTME: Composable regex field rules that each set one listing field from a text span.
// ABOUTME: Rules are applied independently; a miss leaves the field at its zero value.

use regex::{Captures, Regex};

use crate::listing::Listing;

/// Setter invoked with the captures of a successful match.
pub type Apply = fn(&mut Listing, &Captures<'_>);

/// One pattern bound to one field.
pub struct FieldRule {
    pub field: &'static str,
    pattern: Regex,
    apply: Apply,
}

impl FieldRule {
    /// Build a rule. Patterns are compile-time literals, so a bad one is a bug.
    pub fn new(field: &'static str, pattern: &str, apply: Apply) -> Self {
        Self {
            field,
            pattern: Regex::new(pattern).unwrap(),
            apply,
        }
    }

    /// Apply the first match in `text`, if any. Returns whether it matched.
    pub fn apply(&self, text: &str, listing: &mut Listing) -> bool {
        match self.pattern.captures(text) {
            Some(caps) => {
                (self.apply)(listing, &caps);
                true
            }
            None => false,
        }
    }
}

/// Apply every rule to `text`. Returns how many matched.
pub fn apply_rules(rules: &[FieldRule], text: &str, listing: &mut Listing) -> usize {
    rules
        .iter()
        .filter(|rule| rule.apply(text, listing))
        .count()
}

/// The first participating capture group, trimmed. Empty when only group 0 matched.
pub fn capture_value<'t>(caps: &Captures<'t>) -> &'t str {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().trim())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::parsers::parse_currency;

    #[test]
    fn rules_apply_independently() {
        let rules = vec![
            FieldRule::new("price", r"\$(\d[\d,]*)", |l, c| {
                l.price = parse_currency(capture_value(c))
            }),
            FieldRule::new("year_built", r"Built\s+(\d{4})", |l, c| {
                l.year_built = capture_value(c).parse().unwrap_or(0)
            }),
        ];

        let mut listing = Listing::default();
        let matched = apply_rules(&rules, "Sold for $1,250,000", &mut listing);
        assert_eq!(matched, 1);
        assert_eq!(listing.price, 1_250_000);
        assert_eq!(listing.year_built, 0);
    }

    #[test]
    fn capture_value_picks_participating_group() {
        let re = Regex::new(r"(\d+) car garage|(\d+) parking space").unwrap();
        let caps = re.captures("2 parking space").unwrap();
        assert_eq!(capture_value(&caps), "2");
    }
}
