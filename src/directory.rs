//! Static country directory.
//!
//! The directory is compiled-in data embedded from `assets/countries.json`
//! and parsed once on first access. Callers only ever see `&'static Country`
//! references; there are no mutation operations.

use crate::types::Country;
use once_cell::sync::Lazy;

/// Country directory JSON embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// All supported countries, in directory order.
static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    let countries: Vec<Country> =
        serde_json::from_str(COUNTRIES_JSON).expect("countries.json is invalid");
    assert!(!countries.is_empty(), "countries.json is empty");
    countries
});

/// Region code of the fallback country used when a value has no recognizable
/// dial code.
const DEFAULT_REGION: &str = "US";

/// Countries ordered for prefix matching: descending dial-code length, ties
/// broken by ascending region code.
///
/// Dial codes are not disjoint by length ("+1" is a prefix of "+1242"), so a
/// longest-first scan is required for the longer code to ever match. The
/// region-code tie-break makes matching deterministic for regions that share
/// a dial code outright (US/CA, RU/KZ).
static PREFIX_ORDER: Lazy<Vec<&'static Country>> = Lazy::new(|| {
    let mut order: Vec<&'static Country> = COUNTRIES.iter().collect();
    order.sort_by(|a, b| {
        b.dial_code
            .as_str()
            .len()
            .cmp(&a.dial_code.as_str().len())
            .then_with(|| a.code.cmp(&b.code))
    });
    order
});

/// Get all supported countries in directory order.
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Get the fallback country used for empty or unmatched values.
pub fn default_country() -> &'static Country {
    find_by_code(DEFAULT_REGION).expect("default country missing from countries.json")
}

/// Look up a country by its region code, case-insensitively.
pub fn find_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Countries in longest-prefix-first matching order.
pub(crate) fn prefix_order() -> &'static [&'static Country] {
    &PREFIX_ORDER
}
