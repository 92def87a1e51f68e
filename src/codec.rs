//! Phone-value codec.
//!
//! A combined phone value is a single string of the form
//! `"<dialCode> <localNumber>"` (or just the dial code, or empty). The codec
//! maps it to a `(country, local number)` pair and back. Decoding never fails:
//! a value no dial code matches degrades to the default country with the whole
//! string as the local number.

use crate::directory;
use crate::types::{Country, PhoneParts};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Decompose a combined value into country and local number.
///
/// Matching scans the directory longest-dial-code-first, so `"+1242 ..."`
/// resolves to the Bahamas rather than the US even though `"+1"` is also a
/// prefix. The local number is the remainder after the dial code, trimmed of
/// leading and trailing whitespace; interior whitespace is preserved.
///
/// # Example
///
/// ```rust
/// use intl_phone_input::codec;
///
/// let parts = codec::decode("+44 20 7123 4567");
/// assert_eq!(parts.country.code, "GB");
/// assert_eq!(parts.local_number, "20 7123 4567");
/// ```
pub fn decode(value: &str) -> PhoneParts<'static> {
    if value.is_empty() {
        return PhoneParts {
            country: directory::default_country(),
            local_number: String::new(),
        };
    }

    for country in directory::prefix_order() {
        if let Some(rest) = value.strip_prefix(country.dial_code.as_str()) {
            return PhoneParts {
                country,
                local_number: rest.trim().to_string(),
            };
        }
    }

    #[cfg(feature = "tracing")]
    debug!(value, "no dial code matched, falling back to default country");

    PhoneParts {
        country: directory::default_country(),
        local_number: value.to_string(),
    }
}

/// Build a combined value from a country and a local number.
///
/// This is the country-selection encoding: an empty local number yields the
/// dial code alone, so picking a country before typing a number still shows
/// the prefix. Clearing the local-number field is the other call site and
/// produces the empty string instead; see
/// [`PhoneInput::edit_local_number`](crate::PhoneInput::edit_local_number).
pub fn encode(country: &Country, local_number: &str) -> String {
    if local_number.is_empty() {
        country.dial_code.as_str().to_string()
    } else {
        format!("{} {local_number}", country.dial_code)
    }
}
