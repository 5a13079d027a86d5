//! Editable widget properties and single-field patches.

use super::{Widget, WidgetKind, WidgetProps};
use crate::color::{ColorError, Rgb};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while applying a single-field patch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Unknown widget property: {0}")]
    UnknownProperty(String),
    #[error("Unknown widget kind: {0}")]
    UnknownKind(String),
    #[error("Property {property} does not apply to {kind} widgets")]
    NotApplicable {
        property: Property,
        kind: WidgetKind,
    },
    #[error("Property {property} expects {expected} value")]
    WrongValue {
        property: Property,
        expected: &'static str,
    },
    #[error("Invalid colour: {0}")]
    Color(#[from] ColorError),
}

/// A single editable widget field, named the way the property form names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Width,
    Height,
    Text,
    Value,
    Min,
    Max,
    Checked,
    Angle,
    Src,
    Options,
    SelectedOption,
    BgColor,
    TextColor,
    BorderColor,
    CheckedBgColor,
}

impl Property {
    pub const ALL: [Property; 17] = [
        Property::X,
        Property::Y,
        Property::Width,
        Property::Height,
        Property::Text,
        Property::Value,
        Property::Min,
        Property::Max,
        Property::Checked,
        Property::Angle,
        Property::Src,
        Property::Options,
        Property::SelectedOption,
        Property::BgColor,
        Property::TextColor,
        Property::BorderColor,
        Property::CheckedBgColor,
    ];

    /// Form field name (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Property::X => "x",
            Property::Y => "y",
            Property::Width => "width",
            Property::Height => "height",
            Property::Text => "text",
            Property::Value => "value",
            Property::Min => "min",
            Property::Max => "max",
            Property::Checked => "checked",
            Property::Angle => "angle",
            Property::Src => "src",
            Property::Options => "options",
            Property::SelectedOption => "selectedOption",
            Property::BgColor => "bgColor",
            Property::TextColor => "textColor",
            Property::BorderColor => "borderColor",
            Property::CheckedBgColor => "checkedBgColor",
        }
    }

    fn is_integer(self) -> bool {
        matches!(
            self,
            Property::X
                | Property::Y
                | Property::Width
                | Property::Height
                | Property::Value
                | Property::Min
                | Property::Max
                | Property::Angle
                | Property::SelectedOption
        )
    }

    fn is_color(self) -> bool {
        matches!(
            self,
            Property::BgColor | Property::TextColor | Property::BorderColor | Property::CheckedBgColor
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = PatchError;

    /// Accepts the camelCase form names as well as snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_').collect();
        Property::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PatchError::UnknownProperty(s.to_string()))
    }
}

/// New value for a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Int(i32),
    Bool(bool),
    Text(String),
    /// `None` clears the colour.
    Color(Option<Rgb>),
    Options(Vec<String>),
}

impl PropertyValue {
    /// Convert raw form input for `property`.
    ///
    /// Integers follow lenient form semantics: the leading integer is used and
    /// anything unparsable becomes 0. Option lists are one entry per line. An
    /// empty colour clears it.
    pub fn from_text(property: Property, text: &str) -> Result<Self, PatchError> {
        if property.is_integer() {
            return Ok(PropertyValue::Int(parse_int_prefix(text)));
        }
        if property.is_color() {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(PropertyValue::Color(None));
            }
            return Ok(PropertyValue::Color(Some(trimmed.parse()?)));
        }
        Ok(match property {
            Property::Checked => PropertyValue::Bool(matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "on" | "yes"
            )),
            Property::Options => {
                PropertyValue::Options(text.split('\n').map(str::to_string).collect())
            }
            _ => PropertyValue::Text(text.to_string()),
        })
    }

    /// Convert a JSON value for `property`. Strings go through [`Self::from_text`].
    pub fn from_json(property: Property, value: &Value) -> Result<Self, PatchError> {
        let wrong = |expected| PatchError::WrongValue { property, expected };
        match value {
            Value::String(text) => Self::from_text(property, text),
            Value::Number(n) if property.is_integer() => {
                let n = n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                    .unwrap_or(0);
                Ok(PropertyValue::Int(saturate(n)))
            }
            Value::Bool(b) if property == Property::Checked => Ok(PropertyValue::Bool(*b)),
            Value::Null if property.is_color() => Ok(PropertyValue::Color(None)),
            Value::Array(items) if property == Property::Options => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.split('\n').map(str::to_string).collect::<Vec<_>>()),
                    _ => Err(wrong("a list of strings")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|lists| PropertyValue::Options(lists.concat())),
            _ => Err(wrong(expected_shape(property))),
        }
    }
}

fn expected_shape(property: Property) -> &'static str {
    if property.is_integer() {
        "an integer"
    } else if property.is_color() {
        "a colour"
    } else {
        match property {
            Property::Checked => "a boolean",
            Property::Options => "a list of strings",
            _ => "a string",
        }
    }
}

fn saturate(n: i64) -> i32 {
    n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse the leading integer of `text`, returning 0 when there is none.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit, so `"12px"` is 12 and `"3.9"` is 3. Out-of-range values saturate.
pub fn parse_int_prefix(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    saturate(if negative { -magnitude } else { magnitude })
}

impl Widget {
    /// Replace one field. Geometry is stored as given; the store clamps anchors.
    ///
    /// The widget is left untouched when the property does not exist for its
    /// kind or the value has the wrong shape.
    pub fn apply(&mut self, property: Property, value: PropertyValue) -> Result<(), PatchError> {
        let kind = self.kind();
        let not_applicable = PatchError::NotApplicable { property, kind };
        let wrong = PatchError::WrongValue {
            property,
            expected: expected_shape(property),
        };

        match (property, value) {
            (Property::X, PropertyValue::Int(v)) => self.x = v,
            (Property::Y, PropertyValue::Int(v)) => self.y = v,
            (Property::Width, PropertyValue::Int(v)) => self.width = v,
            (Property::Height, PropertyValue::Int(v)) => self.height = v,

            (Property::BgColor, PropertyValue::Color(c)) => self.colors.bg = c,
            (Property::TextColor, PropertyValue::Color(c)) => self.colors.text = c,
            (Property::BorderColor, PropertyValue::Color(c)) => self.colors.border = c,
            (Property::CheckedBgColor, PropertyValue::Color(c)) => {
                if !kind.is_checkable() {
                    return Err(not_applicable);
                }
                self.colors.checked_bg = c;
            }

            (Property::Text, PropertyValue::Text(new_text)) => match &mut self.props {
                WidgetProps::Label { text } | WidgetProps::Button { text } => *text = new_text,
                _ => return Err(not_applicable),
            },
            (Property::Src, PropertyValue::Text(new_src)) => match &mut self.props {
                WidgetProps::Image { src } => *src = new_src,
                _ => return Err(not_applicable),
            },
            (Property::Checked, PropertyValue::Bool(b)) => match &mut self.props {
                WidgetProps::Checkbox { checked } | WidgetProps::Switch { checked } => *checked = b,
                _ => return Err(not_applicable),
            },
            (Property::Value | Property::Min | Property::Max, PropertyValue::Int(v)) => {
                let range = match &mut self.props {
                    WidgetProps::Slider(range) | WidgetProps::Bar(range) => range,
                    WidgetProps::Arc { range, .. } => range,
                    _ => return Err(not_applicable),
                };
                match property {
                    Property::Value => range.value = v,
                    Property::Min => range.min = v,
                    _ => range.max = v,
                }
            }
            (Property::Angle, PropertyValue::Int(v)) => match &mut self.props {
                WidgetProps::Arc { angle, .. } => *angle = v,
                _ => return Err(not_applicable),
            },
            (Property::Options, PropertyValue::Options(options)) => match &mut self.props {
                WidgetProps::Roller(list) | WidgetProps::Dropdown(list) => {
                    // One option per line; embedded line breaks start a new option.
                    list.options = options
                        .iter()
                        .flat_map(|option| option.split('\n'))
                        .map(str::to_string)
                        .collect();
                }
                _ => return Err(not_applicable),
            },
            (Property::SelectedOption, PropertyValue::Int(v)) => match &mut self.props {
                WidgetProps::Roller(list) | WidgetProps::Dropdown(list) => list.selected = v,
                _ => return Err(not_applicable),
            },

            _ => return Err(wrong),
        }
        Ok(())
    }
}
