//! Design session: the widgets on the canvas plus background and selection.

use crate::color::Rgb;
use crate::export::{DisplayConfig, serialize_with};
use crate::layout::Anchor;
use crate::store::WidgetStore;
use crate::widget::{Property, PropertyValue, Widget, WidgetId, WidgetKind};

/// The state behind one designer canvas.
///
/// The selection is only an id; it is resolved against the store on use and
/// cleared when the selected widget is removed.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: WidgetStore,
    background: Rgb,
    display: DisplayConfig,
    selected: Option<WidgetId>,
}

impl Canvas {
    /// Create an empty canvas with a white background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty canvas exporting with custom display parameters.
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// Create a widget at `anchor` and put it on top. Returns its id.
    pub fn create_widget(&mut self, kind: WidgetKind, anchor: Anchor) -> WidgetId {
        let widget = Widget::new(kind, anchor);
        let id = widget.id().clone();
        self.store.insert(widget);
        id
    }

    /// Create a widget dropped from the palette at `pointer` and select it.
    pub fn drop_widget(&mut self, kind: WidgetKind, pointer: Anchor) -> WidgetId {
        let id = self.create_widget(kind, Anchor::from_drop(pointer));
        self.selected = Some(id.clone());
        id
    }

    /// Set one property of a widget.
    pub fn patch(&mut self, id: &WidgetId, property: Property, value: PropertyValue) {
        self.store.patch(id, property, value);
    }

    /// Set one property from raw form input.
    pub fn patch_text(&mut self, id: &WidgetId, property: &str, text: &str) {
        self.store.patch_text(id, property, text);
    }

    /// Move a widget, keeping it on the canvas.
    pub fn move_widget(&mut self, id: &WidgetId, anchor: Anchor) {
        self.store.move_to(id, anchor.x, anchor.y);
    }

    /// Remove a widget, dropping the selection if it pointed at it.
    pub fn remove_widget(&mut self, id: &WidgetId) -> Option<Widget> {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.store.remove(id)
    }

    /// Remove the selected widget, if any.
    pub fn remove_selected(&mut self) -> Option<Widget> {
        let id = self.selected.take()?;
        self.store.remove(&id)
    }

    /// Select a widget. Ids not on the canvas clear the selection.
    pub fn select(&mut self, id: &WidgetId) {
        self.selected = self.store.contains(id).then(|| id.clone());
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Get the selected widget ID (if any).
    pub fn selected_id(&self) -> Option<&WidgetId> {
        self.selected.as_ref()
    }

    /// The selected widget, looked up in the store.
    pub fn selected(&self) -> Option<&Widget> {
        self.selected.as_ref().and_then(|id| self.store.get(id))
    }

    /// Get a widget by ID.
    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.store.get(id)
    }

    /// Widgets in z-order (back to front).
    pub fn widgets(&self) -> &[Widget] {
        self.store.all()
    }

    /// Read-only access to the widget store.
    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    /// Get the canvas background colour.
    pub fn background_color(&self) -> Rgb {
        self.background
    }

    /// Set the canvas background colour.
    pub fn set_background_color(&mut self, color: Rgb) {
        self.background = color;
    }

    /// Display parameters used on export.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Replace the display parameters.
    pub fn set_display(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    /// Export the canvas as an ESPHome LVGL YAML document.
    pub fn to_yaml(&self) -> String {
        log::info!("Exporting {} widgets", self.store.len());
        serialize_with(&self.display, self.store.all(), self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_selects_new_widget() {
        let mut canvas = Canvas::new();
        let id = canvas.drop_widget(WidgetKind::Button, Anchor::new(40, 20));
        let selected = canvas.selected().unwrap();
        assert_eq!(selected.id(), &id);
        assert_eq!((selected.x, selected.y), (15, 5));
    }

    #[test]
    fn test_selection_sees_patches() {
        let mut canvas = Canvas::new();
        let id = canvas.drop_widget(WidgetKind::Label, Anchor::new(100, 100));
        canvas.patch_text(&id, "text", "Temp");
        assert_eq!(canvas.selected().unwrap().props().text(), Some("Temp"));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut canvas = Canvas::new();
        let a = canvas.drop_widget(WidgetKind::Label, Anchor::new(50, 50));
        let b = canvas.create_widget(WidgetKind::Bar, Anchor::new(0, 0));
        canvas.remove_widget(&b);
        assert_eq!(canvas.selected_id(), Some(&a));
        canvas.remove_widget(&a);
        assert_eq!(canvas.selected_id(), None);
        assert!(canvas.widgets().is_empty());
    }

    #[test]
    fn test_remove_selected() {
        let mut canvas = Canvas::new();
        assert!(canvas.remove_selected().is_none());
        let id = canvas.drop_widget(WidgetKind::Switch, Anchor::new(60, 60));
        let removed = canvas.remove_selected().unwrap();
        assert_eq!(removed.id(), &id);
        assert!(canvas.selected().is_none());
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut canvas = Canvas::new();
        let id = canvas.drop_widget(WidgetKind::Image, Anchor::new(60, 60));
        canvas.select(&WidgetId::from("widget_missing"));
        assert!(canvas.selected().is_none());
        canvas.select(&id);
        assert!(canvas.selected().is_some());
    }

    #[test]
    fn test_to_yaml_uses_background_and_display() {
        let mut canvas = Canvas::with_display(DisplayConfig {
            id: "lcd".into(),
            ..DisplayConfig::default()
        });
        canvas.set_background_color("#202020".parse().unwrap());
        let yaml = canvas.to_yaml();
        assert!(yaml.contains("    id: lcd\n"));
        assert!(yaml.ends_with("    bg_color: 0x202020\n"));
    }
}
