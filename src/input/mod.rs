//! Headless controlled phone input with country selector popover.

pub(crate) mod config;
pub(crate) mod position;
pub(crate) mod structure;

pub use config::{Direction, PhoneInputConfig, PhoneInputConfigBuilder};
pub use position::{PopoverPosition, Rect};
pub use structure::{Effect, PhoneInput};
