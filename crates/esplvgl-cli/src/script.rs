//! Widget scripts: a JSON list of designer actions replayed on a canvas.
//!
//! ```json
//! {
//!   "background": "#101010",
//!   "ops": [
//!     { "op": "drop", "kind": "label", "x": 60, "y": 40, "name": "title" },
//!     { "op": "patch", "target": "title", "field": "text", "value": "Hello" },
//!     { "op": "move", "target": "title", "x": 10, "y": 10 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use esplvgl_core::{Anchor, Canvas, DisplayConfig, Property, PropertyValue, Rgb, WidgetId, WidgetKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// A designer action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Create a widget with its anchor at (x, y).
    Create {
        kind: WidgetKind,
        x: i32,
        y: i32,
        #[serde(default)]
        name: Option<String>,
    },
    /// Drop a widget from the palette with the pointer at (x, y); selects it.
    Drop {
        kind: WidgetKind,
        x: i32,
        y: i32,
        #[serde(default)]
        name: Option<String>,
    },
    /// Set one property. String values are treated as form input.
    Patch {
        target: String,
        field: String,
        value: Value,
    },
    /// Drag a widget's anchor to (x, y).
    Move { target: String, x: i32, y: i32 },
    /// Delete a widget.
    Remove { target: String },
    /// Change the canvas background.
    Background { color: Rgb },
}

/// A script file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub background: Option<Rgb>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
    #[serde(default)]
    pub ops: Vec<Op>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid widget script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    /// Apply every op in order.
    ///
    /// Targets are names bound by `create`/`drop`, or raw widget ids. Like the
    /// editor itself, ops on widgets that do not exist are skipped.
    pub fn replay(&self, canvas: &mut Canvas) {
        if let Some(display) = &self.display {
            canvas.set_display(display.clone());
        }
        if let Some(color) = self.background {
            canvas.set_background_color(color);
        }

        let mut names: HashMap<String, WidgetId> = HashMap::new();
        let resolve = |names: &HashMap<String, WidgetId>, target: &str| {
            names
                .get(target)
                .cloned()
                .unwrap_or_else(|| WidgetId::from(target))
        };

        for (index, op) in self.ops.iter().enumerate() {
            log::debug!("op {index}: {op:?}");
            match op {
                Op::Create { kind, x, y, name } => {
                    let id = canvas.create_widget(*kind, Anchor::new(*x, *y));
                    if let Some(name) = name {
                        names.insert(name.clone(), id);
                    }
                }
                Op::Drop { kind, x, y, name } => {
                    let id = canvas.drop_widget(*kind, Anchor::new(*x, *y));
                    if let Some(name) = name {
                        names.insert(name.clone(), id);
                    }
                }
                Op::Patch {
                    target,
                    field,
                    value,
                } => {
                    let id = resolve(&names, target);
                    let parsed = field.parse::<Property>().and_then(|property| {
                        PropertyValue::from_json(property, value).map(|v| (property, v))
                    });
                    match parsed {
                        Ok((property, value)) => canvas.patch(&id, property, value),
                        Err(e) => log::warn!("op {index}: skipping patch of {target}: {e}"),
                    }
                }
                Op::Move { target, x, y } => {
                    canvas.move_widget(&resolve(&names, target), Anchor::new(*x, *y));
                }
                Op::Remove { target } => {
                    canvas.remove_widget(&resolve(&names, target));
                }
                Op::Background { color } => canvas.set_background_color(*color),
            }
        }
    }
}
