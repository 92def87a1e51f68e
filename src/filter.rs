//! Country search filter.

use crate::types::Country;

/// Filter countries by a free-form search query.
///
/// A country is included when the query is a case-insensitive substring of its
/// name or region code, or a literal substring of its dial code (so searching
/// "+12" narrows to the NANP islands). An empty query returns the full slice
/// unfiltered. The result preserves directory order; there is no ranking.
pub fn filter<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    if query.is_empty() {
        return countries.iter().collect();
    }
    let query_lower = query.to_lowercase();
    countries
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query_lower)
                || c.dial_code.as_str().contains(query)
                || c.code.to_lowercase().contains(&query_lower)
        })
        .collect()
}
