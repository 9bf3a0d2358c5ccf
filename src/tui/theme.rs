use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Completed task text
    pub done: Color,
    pub selection_bg: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x18),
            text: Color::Rgb(0xC8, 0xD3, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3F, 0xB6, 0xA8),
            dim: Color::Rgb(0x5C, 0x6B, 0x78),
            done: Color::Rgb(0x4A, 0x58, 0x64),
            selection_bg: Color::Rgb(0x1D, 0x2A, 0x33),
            red: Color::Rgb(0xE0, 0x5E, 0x5E),
            green: Color::Rgb(0x7F, 0xD1, 0x8C),
            yellow: Color::Rgb(0xE8, 0xC1, 0x5A),
        }
    }
}

/// Parse a hex color string like "#3FB6A8" into an RGB Color
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

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "done" => theme.done = color,
                    "selection_bg" => theme.selection_bg = color,
                    "red" => theme.red = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
