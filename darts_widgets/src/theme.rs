use ratatui::style::Color;

/// Pub-board colour theme for the TUI
pub struct Theme;

impl Theme {
    pub const CORK: Color = Color::Rgb(52, 38, 26);

    // Board colours
    pub const BOARD_RED: Color = Color::Rgb(200, 40, 44);
    pub const BOARD_GREEN: Color = Color::Rgb(24, 130, 70);
    pub const BOARD_CREAM: Color = Color::Rgb(236, 224, 196);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);
}

/// Convert a model colour to a terminal colour.
pub fn tui_color(c: darts_core::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Convert a terminal colour back to a model colour, falling back for
/// indexed and named colours.
pub fn model_color(c: Color, fallback: darts_core::Color) -> darts_core::Color {
    match c {
        Color::Rgb(r, g, b) => darts_core::Color::rgb(r, g, b),
        _ => fallback,
    }
}

/// Blend target for cells without an RGB background
pub const BG_MODEL: darts_core::Color = darts_core::Color::rgb(14, 16, 18);
