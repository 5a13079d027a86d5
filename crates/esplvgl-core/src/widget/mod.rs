//! Widget definitions for the display canvas.

mod defaults;
mod property;

pub use defaults::{default_colors, default_props, default_size};
pub use property::{PatchError, Property, PropertyValue, parse_int_prefix};

use crate::color::Rgb;
use crate::layout::{Anchor, WidgetRect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for widgets.
///
/// Generated ids look like `widget_<32 hex digits>` so they are valid LVGL ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generate a fresh, never reused id.
    pub fn generate() -> Self {
        Self(format!("widget_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The closed set of widget types the designer can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Label,
    Button,
    Slider,
    Checkbox,
    Switch,
    Image,
    Arc,
    Bar,
    Roller,
    Dropdown,
}

impl WidgetKind {
    /// Every kind, in palette order.
    pub const ALL: [WidgetKind; 10] = [
        WidgetKind::Label,
        WidgetKind::Button,
        WidgetKind::Slider,
        WidgetKind::Checkbox,
        WidgetKind::Switch,
        WidgetKind::Image,
        WidgetKind::Arc,
        WidgetKind::Bar,
        WidgetKind::Roller,
        WidgetKind::Dropdown,
    ];

    /// Key used for the widget block in the exported document.
    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::Label => "label",
            WidgetKind::Button => "button",
            WidgetKind::Slider => "slider",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Switch => "switch",
            WidgetKind::Image => "image",
            WidgetKind::Arc => "arc",
            WidgetKind::Bar => "bar",
            WidgetKind::Roller => "roller",
            WidgetKind::Dropdown => "dropdown",
        }
    }

    /// Human readable name shown in the palette.
    pub fn display_name(self) -> &'static str {
        match self {
            WidgetKind::Label => "Label",
            WidgetKind::Button => "Button",
            WidgetKind::Slider => "Slider",
            WidgetKind::Checkbox => "Checkbox",
            WidgetKind::Switch => "Switch",
            WidgetKind::Image => "Image",
            WidgetKind::Arc => "Arc",
            WidgetKind::Bar => "Bar",
            WidgetKind::Roller => "Roller",
            WidgetKind::Dropdown => "Dropdown",
        }
    }

    /// Kinds with a checked state and a checked background colour.
    pub fn is_checkable(self) -> bool {
        matches!(
            self,
            WidgetKind::Button | WidgetKind::Checkbox | WidgetKind::Switch
        )
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WidgetKind {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PatchError::UnknownKind(s.to_string()))
    }
}

/// Numeric value with its bounds (slider, arc, bar).
///
/// `min < max` and `min <= value <= max` are expected but not enforced; values
/// are exported as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(value: i32, min: i32, max: i32) -> Self {
        Self { value, min, max }
    }
}

/// Option list with a selected index (roller, dropdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList {
    pub options: Vec<String>,
    /// Zero-based index into `options`. Not validated against the list length.
    pub selected: i32,
}

impl OptionList {
    pub fn new<I, S>(options: I, selected: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected,
        }
    }

    /// The currently selected option, if the index is in range.
    pub fn selected_option(&self) -> Option<&str> {
        usize::try_from(self.selected)
            .ok()
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// Kind-specific widget payload. The variant is the widget's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetProps {
    Label { text: String },
    Button { text: String },
    Slider(ValueRange),
    Checkbox { checked: bool },
    Switch { checked: bool },
    Image { src: String },
    Arc {
        range: ValueRange,
        /// Rotation in degrees.
        angle: i32,
    },
    Bar(ValueRange),
    Roller(OptionList),
    Dropdown(OptionList),
}

impl WidgetProps {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetProps::Label { .. } => WidgetKind::Label,
            WidgetProps::Button { .. } => WidgetKind::Button,
            WidgetProps::Slider(_) => WidgetKind::Slider,
            WidgetProps::Checkbox { .. } => WidgetKind::Checkbox,
            WidgetProps::Switch { .. } => WidgetKind::Switch,
            WidgetProps::Image { .. } => WidgetKind::Image,
            WidgetProps::Arc { .. } => WidgetKind::Arc,
            WidgetProps::Bar(_) => WidgetKind::Bar,
            WidgetProps::Roller(_) => WidgetKind::Roller,
            WidgetProps::Dropdown(_) => WidgetKind::Dropdown,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            WidgetProps::Label { text } | WidgetProps::Button { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<&ValueRange> {
        match self {
            WidgetProps::Slider(range) | WidgetProps::Bar(range) => Some(range),
            WidgetProps::Arc { range, .. } => Some(range),
            _ => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self {
            WidgetProps::Checkbox { checked } | WidgetProps::Switch { checked } => Some(*checked),
            _ => None,
        }
    }

    pub fn option_list(&self) -> Option<&OptionList> {
        match self {
            WidgetProps::Roller(list) | WidgetProps::Dropdown(list) => Some(list),
            _ => None,
        }
    }
}

/// Style colours. Any of them may be cleared by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetColors {
    pub bg: Option<Rgb>,
    pub text: Option<Rgb>,
    pub border: Option<Rgb>,
    /// Background while checked. Only exported for checkable kinds.
    pub checked_bg: Option<Rgb>,
}

/// A widget placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub(crate) id: WidgetId,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub colors: WidgetColors,
    pub(crate) props: WidgetProps,
}

impl Widget {
    /// Create a widget of `kind` anchored at `anchor` with the kind's default
    /// size, palette and payload.
    pub fn new(kind: WidgetKind, anchor: Anchor) -> Self {
        let (width, height) = default_size(kind);
        Self {
            id: WidgetId::generate(),
            x: anchor.x,
            y: anchor.y,
            width,
            height,
            colors: default_colors(kind),
            props: default_props(kind),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn kind(&self) -> WidgetKind {
        self.props.kind()
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    pub fn rect(&self) -> WidgetRect {
        WidgetRect::new(self.x, self.y, self.width, self.height)
    }
}
