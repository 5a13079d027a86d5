//! esplvgl Core Library
//!
//! Widget data model, canvas layout rules and the ESPHome LVGL exporter for the
//! esplvgl display designer. Presentation (drag handling, colour pickers, the
//! property form) lives outside this crate and drives it through [`Canvas`].

pub mod canvas;
pub mod color;
pub mod export;
pub mod layout;
pub mod store;
pub mod widget;

pub use canvas::Canvas;
pub use color::{ColorError, Rgb};
pub use export::{DisplayConfig, serialize, serialize_with};
pub use layout::{Anchor, CANVAS_HEIGHT, CANVAS_WIDTH, CanvasSize, WidgetRect, clamp};
pub use store::WidgetStore;
pub use widget::{
    OptionList, PatchError, Property, PropertyValue, ValueRange, Widget, WidgetColors, WidgetId,
    WidgetKind, WidgetProps,
};
