//! Input configuration types.

use std::fmt::{self, Display, Formatter};

/// Text direction for RTL language support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
    /// Determined by the host from content.
    Auto,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
            Direction::Auto => "auto",
        };
        write!(f, "{s}")
    }
}

/// Display configuration for a phone input.
///
/// All fields are presentation-only: they affect what the host renders, never
/// how values are decoded or encoded. The error message in particular is
/// advisory state supplied by the caller; the input neither generates nor
/// clears it.
#[derive(Debug, Clone, Default)]
pub struct PhoneInputConfig {
    /// Placeholder text for the local-number field.
    pub placeholder: Option<String>,
    /// Whether the field is required in the surrounding form.
    pub required: bool,
    /// Whether the input is disabled. Disabled inputs refuse to open the
    /// country selector.
    pub disabled: bool,
    /// Text direction.
    pub dir: Direction,
    /// Caller-supplied validation message to display.
    pub error_message: Option<String>,
}

impl PhoneInputConfig {
    /// Create a new builder for PhoneInputConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intl_phone_input::{Direction, PhoneInputConfig};
    ///
    /// let config = PhoneInputConfig::builder()
    ///     .placeholder("Enter phone number")
    ///     .required(true)
    ///     .dir(Direction::Rtl)
    ///     .build();
    ///
    /// assert!(config.required);
    /// assert_eq!(config.placeholder.as_deref(), Some("Enter phone number"));
    /// ```
    pub fn builder() -> PhoneInputConfigBuilder {
        PhoneInputConfigBuilder::default()
    }

    /// Whether a caller-supplied error message is present.
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Builder for PhoneInputConfig.
#[derive(Debug, Clone, Default)]
pub struct PhoneInputConfigBuilder {
    config: PhoneInputConfig,
}

impl PhoneInputConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Disable the input.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the text direction.
    pub fn dir(mut self, dir: Direction) -> Self {
        self.config.dir = dir;
        self
    }

    /// Set the caller-supplied error message.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.config.error_message = Some(message.into());
        self
    }

    /// Build the PhoneInputConfig.
    pub fn build(self) -> PhoneInputConfig {
        self.config
    }
}
