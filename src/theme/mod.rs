mod colors;

use ratatui::style::Color;

pub use colors::*;

/// Color theme. Two modes, toggled from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Display name of the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The other theme.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a theme from a name (used for the `--theme` flag).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Color scheme for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Secondary background (cards, selected row)
    pub bg_secondary: Color,
    /// Normal text
    pub text: Color,
    /// De-emphasized text (hints, completed tasks)
    pub muted: Color,
    /// Border color
    pub border: Color,
    /// Highlight (selected item, key hints, progress)
    pub highlight: Color,
    /// Secondary accent (progress bar, checkmarks)
    pub accent: Color,
    /// Destructive actions (delete hint)
    pub error: Color,
}

/// Color scheme for the given theme.
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => light_colors(),
        Theme::Dark => dark_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        // Unknown names fall back to the default
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
    }
}
