//! Line-oriented YAML emitter for the LVGL display block.
//!
//! Output is deterministic: the same widgets and background always produce
//! the same text, byte for byte.

use super::DisplayConfig;
use crate::color::Rgb;
use crate::widget::{Widget, WidgetKind, WidgetProps};
use std::fmt::Display;

/// Indent depth of the keys inside the display list item.
const DISPLAY_DEPTH: usize = 2;
/// Indent depth of a widget's list item marker.
const WIDGET_DEPTH: usize = 2;
/// Indent depth of a widget's own keys.
const FIELD_DEPTH: usize = 4;
/// Indent depth of nested widget values (option lines, checked state).
const NESTED_DEPTH: usize = 5;

/// Serialize widgets with the default display parameters.
pub fn serialize(widgets: &[Widget], background: Rgb) -> String {
    serialize_with(&DisplayConfig::default(), widgets, background)
}

/// Serialize widgets under a `display:` block built from `config`.
pub fn serialize_with(config: &DisplayConfig, widgets: &[Widget], background: Rgb) -> String {
    let mut out = Emitter::default();

    out.line(0, "display:");
    out.item(1, "platform", "lvgl");
    out.field(DISPLAY_DEPTH, "id", &config.id);
    out.field(DISPLAY_DEPTH, "rotation", config.rotation);
    out.field(DISPLAY_DEPTH, "buffer_size", &config.buffer_size);
    out.field(DISPLAY_DEPTH, "update_interval", &config.update_interval);
    out.field(DISPLAY_DEPTH, "color_depth", config.color_depth);
    out.field(DISPLAY_DEPTH, "bg_color", background.to_hex_literal());

    if !widgets.is_empty() {
        out.blank();
        for widget in widgets {
            write_widget(&mut out, widget);
        }
    }

    log::debug!("Serialized {} widgets ({} bytes)", widgets.len(), out.buf.len());
    out.buf
}

fn write_widget(out: &mut Emitter, widget: &Widget) {
    let kind = widget.kind();
    out.line(WIDGET_DEPTH, &format!("- {}:", kind.tag()));
    out.field(FIELD_DEPTH, "id", widget.id());
    out.field(FIELD_DEPTH, "x", widget.x);
    out.field(FIELD_DEPTH, "y", widget.y);
    out.field(FIELD_DEPTH, "width", widget.width);
    out.field(FIELD_DEPTH, "height", widget.height);

    let props = widget.props();
    if let Some(text) = props.text() {
        out.field(FIELD_DEPTH, "text", quote(text));
    }
    if kind.is_checkable() {
        // Constant per kind; buttons are not toggles.
        out.field(FIELD_DEPTH, "checkable", kind != WidgetKind::Button);
    }
    if let Some(range) = props.range() {
        out.field(FIELD_DEPTH, "value", range.value);
        out.field(FIELD_DEPTH, "min_value", range.min);
        out.field(FIELD_DEPTH, "max_value", range.max);
    }
    if let WidgetProps::Arc { angle, .. } = props {
        // An angle of 0 is indistinguishable from unset and is left out.
        if *angle != 0 {
            out.field(FIELD_DEPTH, "rotation", angle);
        }
    }
    if let Some(checked) = props.checked() {
        out.field(FIELD_DEPTH, "checked", checked);
    }
    if let Some(list) = props.option_list() {
        if !list.options.is_empty() {
            out.line(FIELD_DEPTH, "options: |");
            for line in list.options.iter().flat_map(|option| option.split('\n')) {
                out.line(NESTED_DEPTH, line);
            }
        }
        out.field(FIELD_DEPTH, "selected", list.selected);
    }

    let colors = &widget.colors;
    for (key, color) in [
        ("bg_color", colors.bg),
        ("text_color", colors.text),
        ("border_color", colors.border),
    ] {
        if let Some(color) = color {
            out.field(FIELD_DEPTH, key, color.to_hex_literal());
        }
    }
    if let Some(checked_bg) = colors.checked_bg.filter(|_| kind.is_checkable()) {
        out.line(FIELD_DEPTH, "checked:");
        out.field(NESTED_DEPTH, "bg_color", checked_bg.to_hex_literal());
    }

    out.blank();
}

/// Double-quote a string value, escaping quotes and backslashes.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Text buffer with two-space indentation per depth level.
#[derive(Default)]
struct Emitter {
    buf: String,
}

impl Emitter {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push_str("  ");
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn field(&mut self, depth: usize, key: &str, value: impl Display) {
        self.indent(depth);
        self.buf.push_str(key);
        self.buf.push_str(": ");
        self.buf.push_str(&value.to_string());
        self.buf.push('\n');
    }

    /// A `- key: value` list item.
    fn item(&mut self, depth: usize, key: &str, value: impl Display) {
        self.indent(depth);
        self.buf.push_str("- ");
        self.field(0, key, value);
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Anchor;
    use crate::widget::{Property, PropertyValue};

    const HEADER: &str = "display:
  - platform: lvgl
    id: tft_display
    rotation: 0
    buffer_size: 32KB
    update_interval: 16ms
    color_depth: 16
    bg_color: 0xffffff
";

    fn widget(kind: WidgetKind, x: i32, y: i32) -> Widget {
        Widget::new(kind, Anchor::new(x, y))
    }

    #[test]
    fn test_empty_is_header_only() {
        assert_eq!(serialize(&[], Rgb::white()), HEADER);
    }

    #[test]
    fn test_background_colour() {
        let out = serialize(&[], Rgb::from_u32(0x102030));
        assert!(out.ends_with("    bg_color: 0x102030\n"));
    }

    #[test]
    fn test_label_block() {
        let label = widget(WidgetKind::Label, 10, 10);
        let expected = format!(
            "{HEADER}
    - label:
        id: {}
        x: 10
        y: 10
        width: 50
        height: 30
        text: \"Label\"
        bg_color: 0xffffff
        text_color: 0x000000
        border_color: 0xcccccc

",
            label.id()
        );
        assert_eq!(serialize(std::slice::from_ref(&label), Rgb::white()), expected);
    }

    #[test]
    fn test_button_block() {
        let button = widget(WidgetKind::Button, 0, 0);
        let out = serialize(std::slice::from_ref(&button), Rgb::white());
        let block = out.split_once("    - button:\n").unwrap().1;
        assert_eq!(
            block,
            format!(
                "        id: {}
        x: 0
        y: 0
        width: 50
        height: 30
        text: \"Button\"
        checkable: false
        bg_color: 0x3b82f6
        text_color: 0xffffff
        border_color: 0x2563eb
        checked:
          bg_color: 0x1d4ed8

",
                button.id()
            )
        );
    }

    #[test]
    fn test_switch_and_checkbox_flags() {
        let mut switch = widget(WidgetKind::Switch, 0, 0);
        switch
            .apply(Property::Checked, PropertyValue::Bool(true))
            .unwrap();
        let checkbox = widget(WidgetKind::Checkbox, 0, 0);
        let out = serialize(&[switch, checkbox], Rgb::white());
        let (switch_block, checkbox_block) = out.split_once("    - checkbox:\n").unwrap();
        assert!(switch_block.contains("        checkable: true\n        checked: true\n"));
        assert!(checkbox_block.contains("        checkable: true\n        checked: false\n"));
        assert!(checkbox_block.contains("        checked:\n          bg_color: 0x3b82f6\n"));
    }

    #[test]
    fn test_arc_block() {
        let arc = widget(WidgetKind::Arc, 5, 6);
        let out = serialize(std::slice::from_ref(&arc), Rgb::white());
        assert!(out.contains(
            "        height: 60
        value: 70
        min_value: 0
        max_value: 100
        rotation: 270
        bg_color: 0xffffff
"
        ));
    }

    #[test]
    fn test_arc_zero_angle_omitted() {
        let mut arc = widget(WidgetKind::Arc, 0, 0);
        arc.apply(Property::Angle, PropertyValue::Int(0)).unwrap();
        let out = serialize(&[arc], Rgb::white());
        assert!(!out.contains("rotation: 0\n        "));
        assert!(out.contains("max_value: 100\n        bg_color"));
    }

    #[test]
    fn test_value_emitted_verbatim() {
        let mut slider = widget(WidgetKind::Slider, 0, 0);
        slider.apply(Property::Value, PropertyValue::Int(150)).unwrap();
        let out = serialize(&[slider], Rgb::white());
        assert!(out.contains("        value: 150\n        min_value: 0\n        max_value: 100\n"));
    }

    #[test]
    fn test_roller_options_and_selected() {
        let roller = widget(WidgetKind::Roller, 0, 0);
        let out = serialize(&[roller], Rgb::white());
        assert!(out.contains(
            "        options: |
          Option 1
          Option 2
          Option 3
        selected: 0
        bg_color: 0xffffff
"
        ));
    }

    #[test]
    fn test_option_lines_stay_in_block() {
        let mut roller = widget(WidgetKind::Roller, 0, 0);
        roller
            .apply(
                Property::Options,
                PropertyValue::Options(vec!["A\nlogger:".into(), "B".into()]),
            )
            .unwrap();
        // Widgets deserialized from elsewhere skip `apply`.
        let mut raw: Widget = serde_json::from_value(serde_json::to_value(&roller).unwrap()).unwrap();
        raw.props = WidgetProps::Dropdown(crate::widget::OptionList::new(["C\nota:", "D"], 0));

        for widget in [roller, raw] {
            let out = serialize(&[widget], Rgb::white());
            let block: Vec<&str> = out
                .lines()
                .skip_while(|l| *l != "        options: |")
                .skip(1)
                .take_while(|l| !l.starts_with("        selected:"))
                .collect();
            assert!(!block.is_empty());
            for line in block {
                assert!(line.starts_with("          "), "{line:?}");
            }
            assert!(!out.lines().any(|l| l == "logger:" || l == "ota:"));
        }
    }

    #[test]
    fn test_empty_options_keep_selected() {
        let mut dropdown = widget(WidgetKind::Dropdown, 0, 0);
        dropdown
            .apply(Property::Options, PropertyValue::Options(Vec::new()))
            .unwrap();
        dropdown
            .apply(Property::SelectedOption, PropertyValue::Int(4))
            .unwrap();
        let out = serialize(&[dropdown], Rgb::white());
        assert!(!out.contains("options:"));
        assert!(out.contains("        height: 30\n        selected: 4\n"));
    }

    #[test]
    fn test_image_has_geometry_and_colours_only() {
        let image = widget(WidgetKind::Image, 0, 0);
        let out = serialize(std::slice::from_ref(&image), Rgb::white());
        assert!(out.contains(
            "        height: 30
        bg_color: 0xf3f4f6
        text_color: 0x000000
        border_color: 0xe5e7eb

"
        ));
    }

    #[test]
    fn test_cleared_colours_are_omitted() {
        let mut bar = widget(WidgetKind::Bar, 0, 0);
        bar.colors.text = None;
        bar.colors.border = None;
        let out = serialize(&[bar], Rgb::white());
        assert!(out.ends_with("        max_value: 100\n        bg_color: 0xe5e7eb\n\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut label = widget(WidgetKind::Label, 0, 0);
        label
            .apply(Property::Text, PropertyValue::Text("say \"hi\"".into()))
            .unwrap();
        let out = serialize(&[label], Rgb::white());
        assert!(out.contains("        text: \"say \\\"hi\\\"\"\n"));
    }

    #[test]
    fn test_custom_display_config() {
        let config = DisplayConfig {
            id: "panel".into(),
            rotation: 90,
            buffer_size: "64KB".into(),
            update_interval: "33ms".into(),
            color_depth: 16,
        };
        let out = serialize_with(&config, &[], Rgb::black());
        assert!(out.starts_with("display:\n  - platform: lvgl\n    id: panel\n    rotation: 90\n"));
        assert!(out.contains("    buffer_size: 64KB\n    update_interval: 33ms\n"));
        assert!(out.ends_with("    bg_color: 0x000000\n"));
    }

    #[test]
    fn test_widgets_in_collection_order() {
        let a = widget(WidgetKind::Bar, 0, 0);
        let b = widget(WidgetKind::Label, 0, 0);
        let out = serialize(&[a.clone(), b.clone()], Rgb::white());
        let pos_a = out.find(a.id().as_str()).unwrap();
        let pos_b = out.find(b.id().as_str()).unwrap();
        assert!(pos_a < pos_b);
        assert!(out.contains("bg_color: 0xffffff\n\n    - bar:\n"));
    }
}
