//! Theme support for the TUI.
//!
//! The demo ships a dark and a light palette (toggleable at runtime, like
//! the original page's dark-mode switch) plus a high-contrast variant.
//! Config files can override individual colors with hex strings.

use ratatui::style::Color;

/// A complete color theme for the TUI.
///
/// Themes are runtime-only - configuration happens through the config file
/// with hex color strings which are parsed into Theme at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: String,
    /// Primary accent color (header, selected cards, form chips)
    pub primary: Color,
    /// Secondary accent color (fees, checkmarks)
    pub accent: Color,
    /// Main text color
    pub text: Color,
    /// Dimmed text color (descriptions, secondary info)
    pub text_dim: Color,
    /// Muted text color (hints, footers)
    pub text_muted: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Panel/card background
    pub panel_bg: Color,
    /// Border color
    pub border: Color,
    /// Success indicator color (required-permit checkmarks)
    pub success: Color,
    /// Warning color (demo-mode banner)
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme - indigo and purple on near-black, like the original page.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            primary: Color::Rgb(129, 140, 248),  // Indigo-400
            accent: Color::Rgb(52, 211, 153),    // Emerald-400
            text: Color::Rgb(243, 244, 246),     // Gray-100
            text_dim: Color::Rgb(156, 163, 175), // Gray-400
            text_muted: Color::Rgb(107, 114, 128), // Gray-500
            background: Color::Rgb(17, 24, 39),  // Gray-900
            panel_bg: Color::Rgb(31, 41, 55),    // Gray-800
            border: Color::Rgb(75, 85, 99),      // Gray-600
            success: Color::Rgb(34, 197, 94),    // Green-500
            warning: Color::Rgb(250, 204, 21),   // Yellow-400
        }
    }

    /// Light theme - indigo on off-white.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            primary: Color::Rgb(79, 70, 229),    // Indigo-600
            accent: Color::Rgb(5, 150, 105),     // Emerald-600
            text: Color::Rgb(17, 24, 39),        // Gray-900
            text_dim: Color::Rgb(75, 85, 99),    // Gray-600
            text_muted: Color::Rgb(156, 163, 175), // Gray-400
            background: Color::Rgb(238, 242, 255), // Indigo-50
            panel_bg: Color::Rgb(255, 255, 255), // White
            border: Color::Rgb(209, 213, 219),   // Gray-300
            success: Color::Rgb(22, 163, 74),    // Green-600
            warning: Color::Rgb(202, 138, 4),    // Yellow-600
        }
    }

    /// High Contrast theme - maximum readability.
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            primary: Color::Cyan,
            accent: Color::Green,
            text: Color::White,
            text_dim: Color::LightCyan,
            text_muted: Color::Gray,
            background: Color::Black,
            panel_bg: Color::Black,
            border: Color::White,
            success: Color::LightGreen,
            warning: Color::LightYellow,
        }
    }

    /// Get a theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" | "default" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// List all available built-in theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec!["dark", "light", "high-contrast"]
    }

    /// The theme this one toggles to (dark <-> light).
    ///
    /// High-contrast and custom-named themes toggle to light first so the
    /// toggle key always does something visible.
    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

/// Parse a hex color string (#RRGGBB or RRGGBB) into a Color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.name, "dark");
    }

    #[test]
    fn test_theme_by_name() {
        assert!(Theme::by_name("dark").is_some());
        assert!(Theme::by_name("LIGHT").is_some());
        assert!(Theme::by_name("high-contrast").is_some());
        assert!(Theme::by_name("high_contrast").is_some());
        assert!(Theme::by_name("dracula").is_none());
    }

    #[test]
    fn test_all_builtin_themes_valid() {
        for name in Theme::available_themes() {
            let theme =
                Theme::by_name(name).unwrap_or_else(|| panic!("Theme {} should exist", name));
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn test_toggle_round_trips_between_dark_and_light() {
        let dark = Theme::dark();
        let light = dark.toggled();
        assert_eq!(light.name, "light");
        assert_eq!(light.toggled().name, "dark");
        // Anything that is not dark toggles to dark on the second press.
        assert_eq!(Theme::high_contrast().toggled().name, "dark");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#6366f1"), Some(Color::Rgb(99, 102, 241)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_dark_and_light_differ() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
    }
}
