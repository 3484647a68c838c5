use eframe::egui::{Color32, Visuals};

/// Colors for the peg board.
///
/// Peg highlights follow the current `egui::Visuals`; disk colors do not, so a
/// disk keeps its hue across light and dark themes.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) peg_bg_default: Color32,
    pub(crate) peg_bg_selected: Color32,
    pub(crate) peg_bg_hint: Color32,

    pub(crate) border_selected: Color32,
    pub(crate) border_hint_from: Color32,
    pub(crate) border_hint_to: Color32,

    pub(crate) rod: Color32,
    pub(crate) base: Color32,
    pub(crate) disk_shadow: Color32,
}

impl BoardPalette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let hint = visuals.warn_fg_color;
        Self {
            peg_bg_default: visuals.faint_bg_color,
            peg_bg_selected: visuals.selection.bg_fill,
            peg_bg_hint: hint.gamma_multiply(0.15),

            border_selected: visuals.selection.stroke.color,
            border_hint_from: hint,
            border_hint_to: hint.gamma_multiply(0.6),

            rod: visuals.widgets.inactive.fg_stroke.color,
            base: visuals.widgets.noninteractive.fg_stroke.color,
            disk_shadow: Color32::from_black_alpha(40),
        }
    }
}

/// Disk width as a fraction of the peg width, from 20% up to 90% for the
/// largest disk.
#[must_use]
pub(crate) fn disk_width_fraction(size: u8, disk_count: u8) -> f32 {
    0.2 + size_ratio(size, disk_count) * 0.7
}

/// Top and bottom colors of a disk's gradient.
#[must_use]
pub(crate) fn disk_colors(size: u8, disk_count: u8) -> (Color32, Color32) {
    let hue = 30.0 + size_ratio(size, disk_count) * 280.0;
    (hsl(hue, 0.85, 0.65), hsl(hue, 0.85, 0.55))
}

fn size_ratio(size: u8, disk_count: u8) -> f32 {
    f32::from(size) / f32::from(disk_count.max(1))
}

/// Converts HSL (hue in degrees, saturation and lightness in `0..=1`) to RGB.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}
