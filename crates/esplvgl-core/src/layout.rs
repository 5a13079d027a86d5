//! Canvas geometry and anchor clamping.

use serde::{Deserialize, Serialize};

/// Logical canvas width in device pixels.
pub const CANVAS_WIDTH: i32 = 320;
/// Logical canvas height in device pixels.
pub const CANVAS_HEIGHT: i32 = 240;

/// Size of the design surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    /// The fixed 320x240 display surface.
    pub const DISPLAY: Self = Self {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DISPLAY
    }
}

/// A widget's top-left placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Anchor for a widget dropped under `pointer`, offset so the default box
    /// sits under the cursor. Never negative.
    pub fn from_drop(pointer: Anchor) -> Self {
        Self {
            x: (pointer.x - DROP_OFFSET.x).max(0),
            y: (pointer.y - DROP_OFFSET.y).max(0),
        }
    }
}

/// Offset applied between the pointer and the anchor of a freshly dropped widget.
pub const DROP_OFFSET: Anchor = Anchor::new(25, 15);

/// Axis-aligned widget rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WidgetRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle lies entirely on the canvas.
    pub fn fits(&self, canvas: CanvasSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width <= canvas.width
            && self.y + self.height <= canvas.height
    }
}

/// Constrain a rectangle's anchor so it stays on the canvas.
///
/// Only the anchor moves; the size is passed through. A rectangle larger than
/// the canvas pins to 0 and overflows the right/bottom edge.
pub fn clamp(rect: WidgetRect, canvas: CanvasSize) -> WidgetRect {
    WidgetRect {
        x: clamp_axis(rect.x, rect.width, canvas.width),
        y: clamp_axis(rect.y, rect.height, canvas.height),
        ..rect
    }
}

fn clamp_axis(offset: i32, extent: i32, limit: i32) -> i32 {
    // Not `i32::clamp`: the upper bound may be negative for oversized widgets.
    offset.min(limit.saturating_sub(extent)).max(0)
}
