//! Ordered widget collection.

use crate::layout::{CanvasSize, clamp};
use crate::widget::{Property, PropertyValue, Widget, WidgetId};

/// Owns every widget on the canvas.
///
/// Insertion order is z-order (back to front) and export order. Mutations by
/// id tolerate ids that no longer exist.
#[derive(Debug, Clone, Default)]
pub struct WidgetStore {
    widgets: Vec<Widget>,
    canvas: CanvasSize,
}

impl WidgetStore {
    /// Create an empty store for the standard display canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store clamping against a different canvas size.
    pub fn with_canvas(canvas: CanvasSize) -> Self {
        Self {
            widgets: Vec::new(),
            canvas,
        }
    }

    /// Canvas size used for clamping.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Append a widget on top of the others.
    ///
    /// Returns false and leaves the store untouched if a widget with the same
    /// id is already present.
    pub fn insert(&mut self, widget: Widget) -> bool {
        if self.contains(widget.id()) {
            log::warn!("Ignoring duplicate widget id {}", widget.id());
            return false;
        }
        log::debug!("Inserting {} {}", widget.kind(), widget.id());
        self.widgets.push(widget);
        true
    }

    /// Replace one field of the widget with `id`.
    ///
    /// `x`/`y` are clamped to the canvas; `width`/`height` are stored as given
    /// and do not move the anchor. Unknown ids and patches that do not fit the
    /// widget's kind are ignored.
    pub fn patch(&mut self, id: &WidgetId, property: Property, value: PropertyValue) {
        let canvas = self.canvas;
        let Some(widget) = self.find_mut(id) else {
            log::debug!("Ignoring patch of {property} on missing widget {id}");
            return;
        };

        if let Err(e) = widget.apply(property, value) {
            log::warn!("Ignoring patch on {id}: {e}");
            return;
        }

        match property {
            Property::X => widget.x = clamp(widget.rect(), canvas).x,
            Property::Y => widget.y = clamp(widget.rect(), canvas).y,
            Property::Width | Property::Height if !widget.rect().fits(canvas) => {
                log::debug!("Widget {id} now extends past the canvas");
            }
            _ => {}
        }
    }

    /// Patch from raw form input, e.g. `("width", "120")`.
    ///
    /// Unknown property names and unparsable colours are logged and ignored;
    /// unparsable numbers become 0.
    pub fn patch_text(&mut self, id: &WidgetId, property: &str, text: &str) {
        let parsed = property
            .parse::<Property>()
            .and_then(|p| PropertyValue::from_text(p, text).map(|v| (p, v)));
        match parsed {
            Ok((property, value)) => self.patch(id, property, value),
            Err(e) => log::warn!("Ignoring patch on {id}: {e}"),
        }
    }

    /// Move a widget's anchor, keeping it on the canvas (drag handling).
    pub fn move_to(&mut self, id: &WidgetId, x: i32, y: i32) {
        let canvas = self.canvas;
        let Some(widget) = self.find_mut(id) else {
            log::debug!("Ignoring move of missing widget {id}");
            return;
        };
        widget.x = x;
        widget.y = y;
        let clamped = clamp(widget.rect(), canvas);
        widget.x = clamped.x;
        widget.y = clamped.y;
    }

    /// Remove the widget with `id`, returning it if it existed.
    pub fn remove(&mut self, id: &WidgetId) -> Option<Widget> {
        let Some(pos) = self.widgets.iter().position(|w| w.id() == id) else {
            log::debug!("Ignoring removal of missing widget {id}");
            return None;
        };
        Some(self.widgets.remove(pos))
    }

    /// Get a widget by ID.
    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Check if a widget with this ID exists.
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// Widgets in z-order (back to front).
    pub fn all(&self) -> &[Widget] {
        &self.widgets
    }

    /// Get the number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Remove every widget.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    fn find_mut(&mut self, id: &WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }
}
