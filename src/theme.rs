//! Light/dark theme state and the colour palettes for each.
//!
//! The palette is plain data (hex strings) so that both the terminal shell and
//! the iced frontend can consume it; `ui::theme` converts it to iced colours.

use std::fmt;
use std::str::FromStr;

use crate::error::ExtmanError;

/// Presentation theme. Persisted as a boolean flag, `true` meaning dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ExtmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ExtmanError::InvalidTheme(other.to_string())),
        }
    }
}

/// Colour definitions for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub button: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ebf2fc",
            surface: "#fcfdff",
            text: "#09153e",
            subtext: "#535868",
            button: "#fafcfd",
            border: "#d1d5db",
            accent: "#c7231a",
            accent_text: "#ffffff",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#040918",
            surface: "#1f2535",
            text: "#fbfdfe",
            subtext: "#c6c6c6",
            button: "#2f354b",
            border: "#52596f",
            accent: "#c7231a",
            accent_text: "#ffffff",
        }
    }
}

/// Parse a hex color string like "#c7231a" to (r, g, b).
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        assert_eq!(Theme::from_flag(true), Theme::Dark);
        assert_eq!(Theme::from_flag(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palettes_are_valid_hex() {
        for theme in [Theme::Light, Theme::Dark] {
            let p = theme.palette();
            for color in [
                p.background,
                p.surface,
                p.text,
                p.subtext,
                p.button,
                p.border,
                p.accent,
                p.accent_text,
            ] {
                assert!(parse_hex_color(color).is_some(), "bad color {}", color);
            }
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#c7231a"), Some((0xc7, 0x23, 0x1a)));
        assert_eq!(parse_hex_color("fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
