use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Focused-row accent
    pub focused: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            focused: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            selection_bg: Color::Rgb(0x2E, 0x1C, 0x3A),
            accent: Color::Rgb(0x44, 0xDD, 0xFF),
            error: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

impl Theme {
    /// Build a theme from config color overrides, keeping defaults for
    /// anything absent or unparseable.
    pub fn from_config(ui: &UiConfig) -> Theme {
        let mut theme = Theme::default();
        for (name, hex) in &ui.colors {
            let Some(color) = parse_hex_color(hex) else {
                continue;
            };
            match name.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "focused" => theme.focused = color,
                "dim" => theme.dim = color,
                "selection_bg" => theme.selection_bg = color,
                "accent" => theme.accent = color,
                "error" => theme.error = color,
                _ => {}
            }
        }
        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
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
    use std::collections::HashMap;

    #[test]
    fn overrides_apply_and_bad_values_are_ignored() {
        let mut colors = HashMap::new();
        colors.insert("focused".to_string(), "#00FF00".to_string());
        colors.insert("dim".to_string(), "not-a-color".to_string());
        let theme = Theme::from_config(&UiConfig { colors });
        assert_eq!(theme.focused, Color::Rgb(0, 0xFF, 0));
        assert_eq!(theme.dim, Theme::default().dim);
    }

    #[test]
    fn parse_hex_requires_hash_and_six_digits() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }
}
