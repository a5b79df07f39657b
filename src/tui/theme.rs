//! Theme support for the TUI.
//!
//! Built-in themes plus per-key hex overrides from the config file.
//! Configuration stays string-based; colors are parsed into `Theme`
//! once at startup.

use ratatui::style::Color;

use crate::core::{MemberColor, UiConfig};

/// A complete color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: String,
    /// Primary accent color (headers, selected items, step indicator)
    pub primary: Color,
    /// Secondary accent color (confirmations, finished work)
    pub secondary: Color,
    /// Main text color
    pub text: Color,
    /// Dimmed text color (descriptions, hints, blank calendar cells)
    pub text_dim: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Selected item background
    pub selected_bg: Color,
    /// Border color
    pub border: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme - works well on both light and dark terminals.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: Color::Rgb(99, 102, 241),     // Indigo
            secondary: Color::Rgb(16, 185, 129),   // Emerald
            text: Color::White,
            text_dim: Color::Rgb(156, 163, 175),   // Gray-400
            background: Color::Reset,
            selected_bg: Color::Rgb(55, 65, 81),   // Gray-700
            border: Color::Rgb(75, 85, 99),        // Gray-600
            warning: Color::Rgb(234, 179, 8),      // Yellow
            error: Color::Rgb(239, 68, 68),        // Red
        }
    }

    /// Dracula theme - dark purple and pink.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(189, 147, 249),    // Purple
            secondary: Color::Rgb(80, 250, 123),   // Green
            text: Color::Rgb(248, 248, 242),       // Foreground
            text_dim: Color::Rgb(98, 114, 164),    // Comment
            background: Color::Rgb(40, 42, 54),    // Background
            selected_bg: Color::Rgb(68, 71, 90),   // Current Line
            border: Color::Rgb(68, 71, 90),        // Selection
            warning: Color::Rgb(255, 184, 108),    // Orange
            error: Color::Rgb(255, 85, 85),        // Red
        }
    }

    /// Nord theme - arctic, bluish colors.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            primary: Color::Rgb(136, 192, 208),    // Nord8 (Frost)
            secondary: Color::Rgb(163, 190, 140),  // Nord14 (Aurora Green)
            text: Color::Rgb(236, 239, 244),       // Nord6 (Snow Storm)
            text_dim: Color::Rgb(76, 86, 106),     // Nord3 (Polar Night)
            background: Color::Rgb(46, 52, 64),    // Nord0
            selected_bg: Color::Rgb(59, 66, 82),   // Nord1
            border: Color::Rgb(67, 76, 94),        // Nord2
            warning: Color::Rgb(235, 203, 139),    // Nord13
            error: Color::Rgb(191, 97, 106),       // Nord11
        }
    }

    /// Gruvbox Dark theme - retro, earthy colors.
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            primary: Color::Rgb(131, 165, 152),    // Aqua
            secondary: Color::Rgb(184, 187, 38),   // Green
            text: Color::Rgb(235, 219, 178),       // Foreground
            text_dim: Color::Rgb(146, 131, 116),   // Dark Gray
            background: Color::Rgb(40, 40, 40),    // Background
            selected_bg: Color::Rgb(60, 56, 54),   // BG1
            border: Color::Rgb(80, 73, 69),        // BG2
            warning: Color::Rgb(250, 189, 47),     // Yellow
            error: Color::Rgb(251, 73, 52),        // Red
        }
    }

    /// High Contrast theme - maximum readability.
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            primary: Color::Cyan,
            secondary: Color::Green,
            text: Color::White,
            text_dim: Color::Gray,
            background: Color::Black,
            selected_bg: Color::Blue,
            border: Color::White,
            warning: Color::LightYellow,
            error: Color::LightRed,
        }
    }

    /// Get a theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Some(Self::gruvbox_dark()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// List all available built-in theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "dracula", "nord", "gruvbox-dark", "high-contrast"]
    }

    /// Build the active theme from UI configuration.
    ///
    /// Unknown theme names fall back to the default theme. Custom hex
    /// overrides are applied on top, skipping any that fail to parse.
    pub fn resolve(ui: &UiConfig) -> Self {
        let mut theme = Self::by_name(&ui.theme).unwrap_or_default();

        if let Some(custom) = &ui.custom_colors {
            let overrides = [
                (&custom.primary, &mut theme.primary),
                (&custom.secondary, &mut theme.secondary),
                (&custom.text, &mut theme.text),
                (&custom.text_dim, &mut theme.text_dim),
                (&custom.border, &mut theme.border),
                (&custom.error, &mut theme.error),
            ];
            for (hex, slot) in overrides {
                if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
                    *slot = color;
                }
            }
        }

        theme
    }
}

/// Terminal color for a roster badge color.
///
/// Matches the web palette the badges originated from, so exported
/// screenshots and the browser view stay visually consistent.
pub fn member_color(color: MemberColor) -> Color {
    match color {
        MemberColor::Red => Color::Rgb(239, 68, 68),
        MemberColor::Green => Color::Rgb(34, 197, 94),
        MemberColor::Blue => Color::Rgb(59, 130, 246),
        MemberColor::Yellow => Color::Rgb(234, 179, 8),
        MemberColor::Purple => Color::Rgb(168, 85, 247),
        MemberColor::Pink => Color::Rgb(236, 72, 153),
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
    use crate::core::CustomColorsConfig;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
    }

    #[test]
    fn test_theme_by_name() {
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("DRACULA").is_some());
        assert!(Theme::by_name("Nord").is_some());
        assert!(Theme::by_name("gruvbox_dark").is_some());
        assert!(Theme::by_name("unknown-theme").is_none());
    }

    #[test]
    fn test_available_themes() {
        let themes = Theme::available_themes();
        assert!(themes.contains(&"default"));
        assert!(themes.contains(&"dracula"));
        for name in themes {
            assert!(Theme::by_name(name).is_some(), "theme {name} should exist");
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#282a36"), Some(Color::Rgb(40, 42, 54)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let ui = UiConfig {
            theme: "no-such-theme".to_string(),
            custom_colors: None,
        };
        assert_eq!(Theme::resolve(&ui).name, "default");
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let ui = UiConfig {
            theme: "nord".to_string(),
            custom_colors: Some(CustomColorsConfig {
                primary: Some("#ff0000".to_string()),
                error: Some("not-a-color".to_string()),
                ..CustomColorsConfig::default()
            }),
        };
        let theme = Theme::resolve(&ui);
        assert_eq!(theme.name, "nord");
        assert_eq!(theme.primary, Color::Rgb(255, 0, 0));
        assert_eq!(theme.error, Theme::nord().error);
    }

    #[test]
    fn test_member_colors_distinct() {
        use crate::core::PALETTE;
        let mut seen = Vec::new();
        for color in PALETTE {
            let c = member_color(color);
            assert!(!seen.contains(&c));
            seen.push(c);
        }
    }
}
