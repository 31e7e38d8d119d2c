use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::RecordLabel;

// ---------------------------------------------------------------------------
// Trace and label colours
// ---------------------------------------------------------------------------

/// Build an egui colour from an HSL triple (hue in degrees).
fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colour of the raw signal trace.
pub fn original_trace() -> Color32 {
    hsl_color(210.0, 0.9, 0.56)
}

/// Colour of the reconstructed (filtered) trace.
pub fn filtered_trace() -> Color32 {
    hsl_color(328.0, 0.9, 0.54)
}

/// Badge colour for a record's annotation.
pub fn label_color(label: RecordLabel) -> Color32 {
    match label {
        RecordLabel::Normal => hsl_color(130.0, 0.6, 0.45),
        RecordLabel::Abnormal => hsl_color(0.0, 0.8, 0.55),
    }
}
