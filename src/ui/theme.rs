//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(38, 41, 46);
pub const CELL_BG: Color32 = Color32::from_rgb(48, 51, 58);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 74, 82);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(100, 180, 255);
pub const O_COLOR: Color32 = Color32::from_rgb(255, 170, 90);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);

// Hover preview (can't be const)
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(120, 160, 200, 60)
}

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const CELL_GAP: f32 = 8.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const MARK_STROKE_WIDTH: f32 = 7.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
