//! Headless phone input state machine.

use super::config::PhoneInputConfig;
use super::position::{PopoverPosition, Rect};
use crate::types::{Country, PhoneParts};
use crate::{codec, directory, filter};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Side effect requested from the host by a state transition.
///
/// The machine never touches the host environment itself; it returns the
/// effects each transition requires and the host executes them. Listener
/// effects always come in pairs: every transition out of the open state
/// produces [`Effect::DetachDismissListeners`], whichever path took it there.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Register scroll/resize/outside-click listeners for the open selector.
    AttachDismissListeners,
    /// Unregister the listeners registered on open.
    DetachDismissListeners,
    /// Move input focus to the country search field.
    FocusSearch,
    /// Propose a new combined value to the owner of the input.
    EmitChange(String),
}

/// Country selector visibility.
///
/// Search text and popover position only exist while open; closing drops
/// them, so reopening always starts from a clean slate.
#[derive(Debug, Clone, PartialEq)]
enum Selector {
    Closed,
    Open {
        search: String,
        position: PopoverPosition,
    },
}

/// Controlled phone input: a country selector plus a local-number field.
///
/// The combined value is owned by the caller and passed into each operation
/// that needs it; the machine holds only display configuration and the
/// selector's open/closed state. Changes are proposed back to the caller via
/// [`Effect::EmitChange`], never applied internally.
///
/// # Example
///
/// ```rust
/// use intl_phone_input::{Effect, PhoneInput, Rect};
///
/// let mut input = PhoneInput::with_defaults();
/// let mut value = "+44 20 7123 4567".to_string();
///
/// let effects = input.open(&Rect::new(100.0, 20.0, 36.0, 72.0));
/// assert!(effects.contains(&Effect::AttachDismissListeners));
///
/// input.set_search("united s");
/// let matched = input.filtered_countries();
/// assert_eq!(matched[0].code, "US");
///
/// for effect in input.select_country(&value, "US") {
///     if let Effect::EmitChange(next) = effect {
///         value = next;
///     }
/// }
/// assert_eq!(value, "+1 20 7123 4567");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInput {
    config: PhoneInputConfig,
    selector: Selector,
}

impl PhoneInput {
    /// Create a new phone input with the given configuration.
    pub fn new(config: PhoneInputConfig) -> Self {
        Self {
            config,
            selector: Selector::Closed,
        }
    }

    /// Create a new phone input with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PhoneInputConfig::default())
    }

    /// Get the display configuration.
    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    /// Whether the country selector is open.
    pub fn is_open(&self) -> bool {
        matches!(self.selector, Selector::Open { .. })
    }

    /// Current popover placement, if the selector is open.
    pub fn position(&self) -> Option<PopoverPosition> {
        match &self.selector {
            Selector::Open { position, .. } => Some(*position),
            Selector::Closed => None,
        }
    }

    /// Current search query. Empty while closed.
    pub fn search(&self) -> &str {
        match &self.selector {
            Selector::Open { search, .. } => search,
            Selector::Closed => "",
        }
    }

    /// Decompose the caller-owned value for rendering.
    pub fn parts(&self, value: &str) -> PhoneParts<'static> {
        codec::decode(value)
    }

    /// Open the country selector anchored to the given rect.
    ///
    /// No-op when the input is disabled or the selector is already open.
    pub fn open(&mut self, anchor: &Rect) -> Vec<Effect> {
        if self.config.disabled || self.is_open() {
            return Vec::new();
        }

        #[cfg(feature = "tracing")]
        debug!("opening country selector");

        self.selector = Selector::Open {
            search: String::new(),
            position: PopoverPosition::below(anchor),
        };
        vec![Effect::AttachDismissListeners, Effect::FocusSearch]
    }

    /// Close the country selector, dropping search text and position.
    ///
    /// No-op when already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }

        #[cfg(feature = "tracing")]
        debug!("closing country selector");

        self.selector = Selector::Closed;
        vec![Effect::DetachDismissListeners]
    }

    /// Toggle the selector, as the anchor button does on click.
    pub fn toggle(&mut self, anchor: &Rect) -> Vec<Effect> {
        if self.is_open() {
            self.close()
        } else {
            self.open(anchor)
        }
    }

    /// Dismiss the selector after a click outside of it.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        self.close()
    }

    /// Recompute the popover placement after the anchor moved (scroll or
    /// resize). Ignored while closed.
    pub fn anchor_moved(&mut self, anchor: &Rect) {
        if let Selector::Open { position, .. } = &mut self.selector {
            *position = PopoverPosition::below(anchor);
        }
    }

    /// Update the country search query. Ignored while closed.
    pub fn set_search(&mut self, query: impl Into<String>) {
        if let Selector::Open { search, .. } = &mut self.selector {
            *search = query.into();
        }
    }

    /// Countries matching the current search query, in directory order.
    pub fn filtered_countries(&self) -> Vec<&'static Country> {
        filter::filter(directory::countries(), self.search())
    }

    /// Select a country by region code, closing the selector and proposing a
    /// re-encoded value that keeps the current local number.
    ///
    /// Selecting a country while the local number is empty still proposes the
    /// dial code alone; unlike clearing the number field, picking a country is
    /// an affirmative action and should show its prefix.
    pub fn select_country(&mut self, value: &str, code: &str) -> Vec<Effect> {
        let mut effects = self.close();

        let Some(country) = directory::find_by_code(code) else {
            #[cfg(feature = "tracing")]
            debug!(code, "selected region code not in directory");
            return effects;
        };

        let local_number = codec::decode(value).local_number;
        effects.push(Effect::EmitChange(codec::encode(country, &local_number)));
        effects
    }

    /// Propose a new value after the user edited the local-number field.
    ///
    /// Clearing the field entirely proposes the empty string, dropping the
    /// dial code along with the number. This intentionally differs from
    /// selecting a country with an empty number, which keeps the dial code.
    pub fn edit_local_number(&self, value: &str, new_local: &str) -> Vec<Effect> {
        let next = if new_local.is_empty() {
            String::new()
        } else {
            let country = codec::decode(value).country;
            format!("{} {new_local}", country.dial_code)
        };
        vec![Effect::EmitChange(next)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::new(100.0, 20.0, 36.0, 72.0)
    }

    fn emitted(effects: &[Effect]) -> Option<&str> {
        effects.iter().find_map(|e| match e {
            Effect::EmitChange(v) => Some(v.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_open_attaches_listeners_and_positions() {
        let mut input = PhoneInput::with_defaults();
        let effects = input.open(&anchor());
        assert_eq!(
            effects,
            vec![Effect::AttachDismissListeners, Effect::FocusSearch]
        );
        assert!(input.is_open());
        let pos = input.position().unwrap();
        assert_eq!(pos.top, 140.0);
        assert_eq!(pos.left, 20.0);
    }

    #[test]
    fn test_open_twice_is_noop() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        assert!(input.open(&anchor()).is_empty());
    }

    #[test]
    fn test_disabled_refuses_to_open() {
        let config = PhoneInputConfig::builder().disabled(true).build();
        let mut input = PhoneInput::new(config);
        assert!(input.open(&anchor()).is_empty());
        assert!(!input.is_open());
    }

    #[test]
    fn test_close_detaches_and_clears() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        input.set_search("uni");
        let effects = input.close();
        assert_eq!(effects, vec![Effect::DetachDismissListeners]);
        assert!(!input.is_open());
        assert!(input.position().is_none());
        assert_eq!(input.search(), "");
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut input = PhoneInput::with_defaults();
        assert!(input.close().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut input = PhoneInput::with_defaults();
        input.toggle(&anchor());
        assert!(input.is_open());
        let effects = input.toggle(&anchor());
        assert_eq!(effects, vec![Effect::DetachDismissListeners]);
        assert!(!input.is_open());
    }

    #[test]
    fn test_dismiss_detaches_listeners() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        assert_eq!(input.dismiss(), vec![Effect::DetachDismissListeners]);
    }

    #[test]
    fn test_anchor_moved_repositions_only_while_open() {
        let mut input = PhoneInput::with_defaults();
        input.anchor_moved(&anchor());
        assert!(input.position().is_none());

        input.open(&anchor());
        input.anchor_moved(&Rect::new(50.0, 10.0, 36.0, 72.0));
        assert_eq!(input.position().unwrap().top, 90.0);
    }

    #[test]
    fn test_search_scoped_to_open() {
        let mut input = PhoneInput::with_defaults();
        input.set_search("uni");
        assert_eq!(input.search(), "");
        assert_eq!(input.filtered_countries().len(), directory::countries().len());

        input.open(&anchor());
        input.set_search("united k");
        let matched = input.filtered_countries();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].code, "GB");
    }

    #[test]
    fn test_search_no_match_is_empty_list() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        input.set_search("xyzzy");
        assert!(input.filtered_countries().is_empty());
    }

    #[test]
    fn test_select_country_keeps_local_number() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        let effects = input.select_country("+44 20 7123 4567", "US");
        assert_eq!(effects[0], Effect::DetachDismissListeners);
        assert_eq!(emitted(&effects), Some("+1 20 7123 4567"));
        assert!(!input.is_open());
    }

    #[test]
    fn test_select_country_empty_number_keeps_dial_code() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        let effects = input.select_country("", "UA");
        assert_eq!(emitted(&effects), Some("+380"));
    }

    #[test]
    fn test_select_unknown_code_emits_nothing() {
        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        let effects = input.select_country("+44 20", "ZZ");
        assert_eq!(effects, vec![Effect::DetachDismissListeners]);
    }

    #[test]
    fn test_edit_local_number() {
        let input = PhoneInput::with_defaults();
        let effects = input.edit_local_number("+44 20", "20 7123");
        assert_eq!(emitted(&effects), Some("+44 20 7123"));
    }

    #[test]
    fn test_edit_local_number_to_empty_drops_everything() {
        let input = PhoneInput::with_defaults();
        let effects = input.edit_local_number("+44 20 7123 4567", "");
        assert_eq!(emitted(&effects), Some(""));
    }

    #[test]
    fn test_every_exit_path_detaches_once() {
        let detaches = |effects: &[Effect]| {
            effects
                .iter()
                .filter(|e| **e == Effect::DetachDismissListeners)
                .count()
        };

        let mut input = PhoneInput::with_defaults();
        input.open(&anchor());
        assert_eq!(detaches(&input.close()), 1);

        input.open(&anchor());
        assert_eq!(detaches(&input.dismiss()), 1);

        input.open(&anchor());
        assert_eq!(detaches(&input.toggle(&anchor())), 1);

        input.open(&anchor());
        assert_eq!(detaches(&input.select_country("+44 20", "DE")), 1);
    }
}
