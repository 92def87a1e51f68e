//! # International Phone Input
//!
//! Headless core for an international phone-number input: a static country
//! directory, a pure dial-code codec, a country search filter, and a
//! controlled-component state machine for the country selector popover.
//! Rendering is left entirely to the host; this crate owns the logic a UI
//! binds to.
//!
//! The combined phone value is a single caller-owned string of the form
//! `"<dialCode> <localNumber>"` (e.g. `"+44 20 7123 4567"`). The
//! `(country, local number)` pair shown in the UI is recomputed from it on
//! every access and never stored, so the string can never drift from what is
//! displayed.
//!
//! ## Quick Start
//!
//! ```rust
//! use intl_phone_input::{codec, Effect, PhoneInput, Rect};
//!
//! // The caller owns the combined value (controlled-component pattern).
//! let mut value = "+44 20 7123 4567".to_string();
//!
//! let parts = codec::decode(&value);
//! assert_eq!(parts.country.code, "GB");
//! assert_eq!(parts.local_number, "20 7123 4567");
//!
//! // The state machine proposes changes; it never mutates the value itself.
//! let mut input = PhoneInput::with_defaults();
//! input.open(&Rect::new(100.0, 20.0, 36.0, 280.0));
//! for effect in input.select_country(&value, "US") {
//!     match effect {
//!         Effect::EmitChange(next) => value = next,
//!         _ => {} // attach/detach listeners, focus search
//!     }
//! }
//! assert_eq!(value, "+1 20 7123 4567");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput            (state machine: open/close, search, change proposals)
//!     │
//!     ├── codec         (decode/encode combined values, longest-prefix match)
//!     ├── filter        (country search)
//!     └── directory     (static country table, embedded at compile time)
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod codec;
pub mod directory;
pub mod filter;
pub mod input;
pub mod types;

// Re-export commonly used types at the crate root
pub use filter::filter;
pub use input::{
    Direction, Effect, PhoneInput, PhoneInputConfig, PhoneInputConfigBuilder, PopoverPosition,
    Rect,
};
pub use types::{Country, DialCode, DialCodeError, PhoneParts};
