//! Custom styles for extman UI widgets.

use super::theme::UiTheme;
use iced::widget::{button, container, toggler};
use iced::{Background, Border, Color, Shadow, Vector};

/// Style for the window background.
pub fn main_container(theme: &UiTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.background)),
        text_color: Some(theme.text),
        ..Default::default()
    }
}

/// Style for the header bar and the extension cards.
pub fn panel(theme: &UiTheme) -> container::Style {
    let shadow = if theme.dark {
        Shadow::default()
    } else {
        Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        }
    };

    container::Style {
        background: Some(Background::Color(theme.surface)),
        border: Border {
            color: if theme.dark {
                theme.border
            } else {
                UiTheme::with_alpha(theme.border, 0.6)
            },
            width: 1.0,
            radius: 20.0.into(),
        },
        shadow,
        ..Default::default()
    }
}

/// Style for the logo badge on a card.
pub fn logo_badge(theme: &UiTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(UiTheme::with_alpha(theme.accent, 0.15))),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a filter pill. The selected pill is filled with the accent.
pub fn filter_pill(theme: &UiTheme, selected: bool, status: button::Status) -> button::Style {
    if selected {
        return button::Style {
            background: Some(Background::Color(theme.accent)),
            text_color: theme.accent_text,
            border: Border {
                radius: 30.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };
    }

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            UiTheme::with_alpha(theme.border, 0.5)
        }
        _ => theme.button,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.text,
        border: Border {
            color: theme.border,
            width: 2.0,
            radius: 30.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the sun/moon theme switch.
pub fn theme_button(theme: &UiTheme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => theme.border,
        _ => theme.button,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.text,
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a card's Remove button.
pub fn remove_button(theme: &UiTheme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (theme.accent, theme.accent_text),
        _ => (Color::TRANSPARENT, theme.text),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 30.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the active switch on a card.
pub fn active_toggler(theme: &UiTheme, status: toggler::Status) -> toggler::Style {
    let is_toggled = match status {
        toggler::Status::Active { is_toggled } | toggler::Status::Hovered { is_toggled } => {
            is_toggled
        }
        #[allow(unreachable_patterns)]
        _ => false,
    };

    toggler::Style {
        background: if is_toggled { theme.accent } else { theme.border },
        background_border_width: 0.0,
        background_border_color: Color::TRANSPARENT,
        foreground: Color::WHITE,
        foreground_border_width: 0.0,
        foreground_border_color: Color::TRANSPARENT,
    }
}
