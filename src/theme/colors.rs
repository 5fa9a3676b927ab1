//! Theme color definitions

use ratatui::style::Color;

use super::ThemeColors;

/// Light theme (default)
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 251, 255),           // near-white background
        bg_secondary: Color::Rgb(236, 253, 245), // mint card background
        text: Color::Rgb(15, 23, 42),            // slate ink
        muted: Color::Rgb(100, 116, 139),        // slate gray
        border: Color::Rgb(203, 213, 225),
        highlight: Color::Rgb(22, 163, 74), // green
        accent: Color::Rgb(5, 150, 105),    // emerald
        error: Color::Rgb(239, 68, 68),     // red
    }
}

/// Dark theme
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(15, 23, 42),          // deep slate background
        bg_secondary: Color::Rgb(30, 41, 59), // raised card background
        text: Color::Rgb(241, 245, 249),     // slate white
        muted: Color::Rgb(148, 163, 184),    // slate gray
        border: Color::Rgb(51, 65, 85),
        highlight: Color::Rgb(74, 222, 128), // bright green
        accent: Color::Rgb(52, 211, 153),    // mint
        error: Color::Rgb(248, 113, 113),    // soft red
    }
}
