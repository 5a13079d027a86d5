//! Export of the canvas to ESPHome LVGL configuration.

mod yaml;

pub use yaml::{serialize, serialize_with};

use serde::{Deserialize, Serialize};

/// Static parameters of the `display:` block.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display component id.
    pub id: String,
    /// Display rotation in degrees.
    pub rotation: i32,
    /// Draw buffer size, e.g. `32KB`.
    pub buffer_size: String,
    /// Refresh interval, e.g. `16ms`.
    pub update_interval: String,
    /// Bits per pixel.
    pub color_depth: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id: "tft_display".to_string(),
            rotation: 0,
            buffer_size: "32KB".to_string(),
            update_interval: "16ms".to_string(),
            color_depth: 16,
        }
    }
}
