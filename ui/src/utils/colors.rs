//! Shared color constants for the UI.

use egui::Color32;
use pyme_business::list_view::Tone;

/// Forest green color for active/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

pub const COLOR_GRAY: Color32 = Color32::from_rgb(108, 117, 125);

/// Border color for the Typora-like table style.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Neutral => COLOR_GRAY,
        Tone::Info => COLOR_BLUE,
        Tone::Success => COLOR_GREEN,
        Tone::Warning => COLOR_AMBER,
        Tone::Danger => COLOR_RED,
    }
}
