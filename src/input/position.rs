//! Popover placement relative to the selector button.

/// Vertical gap between the anchor and the popover, in host pixels.
const ANCHOR_GAP: f64 = 4.0;

/// Bounding box of the anchor element, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

impl Rect {
    /// Create a rect from position and size.
    pub fn new(top: f64, left: f64, height: f64, width: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            width,
        }
    }
}

/// Resolved placement of the open country list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverPosition {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl PopoverPosition {
    /// Place the popover just below the anchor, left-aligned and matching
    /// its width.
    pub fn below(anchor: &Rect) -> Self {
        Self {
            top: anchor.bottom + ANCHOR_GAP,
            left: anchor.left,
            width: anchor.width,
        }
    }
}
