//! Basic decode/encode walk-through.
//!
//! # Running
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use intl_phone_input::codec;
use intl_phone_input::directory::find_by_code;

fn main() {
    // Decode a combined value into country + local number.
    for value in ["+44 20 7123 4567", "+1242 555 0100", "+380", "", "abc123"] {
        let parts = codec::decode(value);
        println!(
            "{value:>20?} -> {} {} / local {:?}",
            parts.country.flag, parts.country.code, parts.local_number
        );
    }

    // Encode the inverse direction.
    let ua = find_by_code("UA").expect("UA is in the directory");
    println!("encode(UA, \"50 123 4567\") = {:?}", codec::encode(ua, "50 123 4567"));
    println!("encode(UA, \"\")            = {:?}", codec::encode(ua, ""));
}
