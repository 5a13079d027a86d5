//! Per-kind defaults applied when a widget is created.

use super::{OptionList, ValueRange, WidgetColors, WidgetKind, WidgetProps};
use crate::color::Rgb;

const fn rgb(hex: u32) -> Option<Rgb> {
    Some(Rgb::from_u32(hex))
}

/// Default `(width, height)` for a new widget.
pub fn default_size(kind: WidgetKind) -> (i32, i32) {
    match kind {
        WidgetKind::Slider => (120, 20),
        WidgetKind::Arc => (60, 60),
        WidgetKind::Bar => (100, 20),
        WidgetKind::Roller => (100, 80),
        WidgetKind::Dropdown => (100, 30),
        WidgetKind::Label
        | WidgetKind::Button
        | WidgetKind::Checkbox
        | WidgetKind::Switch
        | WidgetKind::Image => (50, 30),
    }
}

/// Default palette. Checkable kinds also get a checked background.
pub fn default_colors(kind: WidgetKind) -> WidgetColors {
    let (bg, text, border, checked_bg) = match kind {
        WidgetKind::Label => (0xffffff, 0x000000, 0xcccccc, None),
        WidgetKind::Button => (0x3b82f6, 0xffffff, 0x2563eb, Some(0x1d4ed8)),
        WidgetKind::Slider => (0xe5e7eb, 0x3b82f6, 0xd1d5db, None),
        WidgetKind::Checkbox => (0xffffff, 0x000000, 0x9ca3af, Some(0x3b82f6)),
        WidgetKind::Switch => (0xe5e7eb, 0x3b82f6, 0xd1d5db, Some(0x3b82f6)),
        WidgetKind::Image => (0xf3f4f6, 0x000000, 0xe5e7eb, None),
        WidgetKind::Arc => (0xffffff, 0x3b82f6, 0xd1d5db, None),
        WidgetKind::Bar => (0xe5e7eb, 0x3b82f6, 0xd1d5db, None),
        WidgetKind::Roller | WidgetKind::Dropdown => (0xffffff, 0x000000, 0x9ca3af, None),
    };
    WidgetColors {
        bg: rgb(bg),
        text: rgb(text),
        border: rgb(border),
        checked_bg: checked_bg.map(Rgb::from_u32),
    }
}

/// Default payload for the kind.
pub fn default_props(kind: WidgetKind) -> WidgetProps {
    match kind {
        WidgetKind::Label => WidgetProps::Label {
            text: "Label".to_string(),
        },
        WidgetKind::Button => WidgetProps::Button {
            text: "Button".to_string(),
        },
        WidgetKind::Slider => WidgetProps::Slider(ValueRange::new(50, 0, 100)),
        WidgetKind::Checkbox => WidgetProps::Checkbox { checked: false },
        WidgetKind::Switch => WidgetProps::Switch { checked: false },
        WidgetKind::Image => WidgetProps::Image { src: String::new() },
        WidgetKind::Arc => WidgetProps::Arc {
            range: ValueRange::new(70, 0, 100),
            angle: 270,
        },
        WidgetKind::Bar => WidgetProps::Bar(ValueRange::new(60, 0, 100)),
        WidgetKind::Roller => {
            WidgetProps::Roller(OptionList::new(["Option 1", "Option 2", "Option 3"], 0))
        }
        WidgetKind::Dropdown => {
            WidgetProps::Dropdown(OptionList::new(["Item 1", "Item 2", "Item 3"], 0))
        }
    }
}
