//! Palette conversion for the iced UI.

use iced::Color;

use crate::theme::{parse_hex_color, Palette, Theme};

/// The active palette as iced colours.
#[derive(Debug, Clone, Copy)]
pub struct UiTheme {
    pub dark: bool,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub button: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_text: Color,
}

impl UiTheme {
    /// Parse a hex color string like "#c7231a" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        match parse_hex_color(hex) {
            Some((r, g, b)) => Color::from_rgb8(r, g, b),
            None => Color::from_rgb(0.5, 0.5, 0.5),
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    /// Palette for `theme`, with the configured accent colour.
    pub fn new(theme: Theme, accent: &str) -> Self {
        let palette: Palette = theme.palette();
        Self {
            dark: theme.is_dark(),
            background: Self::from_hex(palette.background),
            surface: Self::from_hex(palette.surface),
            text: Self::from_hex(palette.text),
            subtext: Self::from_hex(palette.subtext),
            button: Self::from_hex(palette.button),
            border: Self::from_hex(palette.border),
            accent: Self::from_hex(accent),
            accent_text: Self::from_hex(palette.accent_text),
        }
    }

    /// Built-in iced theme closest to this palette, for widgets left unstyled.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = UiTheme::from_hex("#ff0000");
        assert_eq!((c.r, c.g, c.b), (1.0, 0.0, 0.0));
        let fallback = UiTheme::from_hex("nope");
        assert_eq!(fallback.r, 0.5);
    }

    #[test]
    fn test_accent_override() {
        let ui = UiTheme::new(Theme::Dark, "#00ff00");
        assert!(ui.dark);
        assert_eq!(ui.accent.g, 1.0);
    }
}
