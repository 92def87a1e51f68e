//! Country filter demonstration.
//!
//! # Running
//!
//! ```bash
//! cargo run --example country_search -- "united"
//! ```

use intl_phone_input::directory::countries;
use intl_phone_input::filter;
use std::env;

fn main() {
    let query = env::args().nth(1).unwrap_or_default();
    let matched = filter(countries(), &query);

    if matched.is_empty() {
        println!("No countries found for {query:?}");
        return;
    }

    println!("{} match(es) for {query:?}:", matched.len());
    for country in matched {
        println!("  {country}");
    }
}
