// Theme
// Applies a light or dark look to the egui context and exposes the
// calendar's paint palette for the current visuals.

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// System preference, defaulting to light when undetectable.
pub fn detect_mode() -> ThemeMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ThemeMode::Dark,
        dark_light::Mode::Light | dark_light::Mode::Default => ThemeMode::Light,
    }
}

pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    visuals.selection.bg_fill = Color32::from_rgb(34, 139, 94);
    visuals.hyperlink_color = Color32::from_rgb(36, 130, 86);
    ctx.set_visuals(visuals);
}

/// Paint colors for the time grid, resolved from the active visuals.
pub struct CalendarPalette {
    pub cell_bg: Color32,
    pub today_cell_bg: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub gutter_text: Color32,
    pub header_text: Color32,
    pub today_text: Color32,
    pub booked: Color32,
    pub booked_text: Color32,
    pub selection_fill: Color32,
    pub selection_stroke: Color32,
}

impl CalendarPalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        if ui.style().visuals.dark_mode {
            Self {
                cell_bg: Color32::from_gray(40),
                today_cell_bg: Color32::from_rgb(46, 62, 54),
                hour_line: Color32::from_gray(62),
                slot_line: Color32::from_gray(50),
                divider: Color32::from_gray(50),
                hover_overlay: Color32::from_rgba_unmultiplied(120, 200, 150, 26),
                gutter_text: Color32::GRAY,
                header_text: Color32::from_gray(220),
                today_text: Color32::from_rgb(120, 210, 160),
                booked: Color32::from_rgb(34, 139, 94),
                booked_text: Color32::WHITE,
                selection_fill: Color32::from_rgba_unmultiplied(120, 200, 150, 40),
                selection_stroke: Color32::from_rgb(120, 200, 150),
            }
        } else {
            Self {
                cell_bg: Color32::from_rgb(248, 248, 248),
                today_cell_bg: Color32::from_rgb(228, 244, 234),
                hour_line: Color32::from_rgb(205, 205, 205),
                slot_line: Color32::from_rgb(228, 228, 228),
                divider: Color32::from_rgb(214, 214, 214),
                hover_overlay: Color32::from_rgba_unmultiplied(60, 160, 110, 22),
                gutter_text: Color32::from_gray(120),
                header_text: Color32::from_gray(60),
                today_text: Color32::from_rgb(24, 118, 76),
                booked: Color32::from_rgb(34, 170, 108),
                booked_text: Color32::WHITE,
                selection_fill: Color32::from_rgba_unmultiplied(60, 170, 115, 36),
                selection_stroke: Color32::from_rgb(44, 150, 100),
            }
        }
    }
}
