//! Main extman application using iced.

use super::style;
use super::theme::UiTheme;
use crate::config::Config;
use crate::extension::{ExtensionId, ExtensionRecord};
use crate::filter::FilterMode;
use crate::prefs::ThemePreference;
use crate::store::ExtensionStore;
use crate::view::ViewController;

use iced::font::{self, Font};
use iced::keyboard::{self, Key};
use iced::widget::{
    button, column, container, row, scrollable, svg, text, toggler, Column, Row, Space,
};
use iced::{Alignment, Element, Length, Subscription, Task};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// The extension manager application state.
pub struct ManagerApp {
    view: ViewController,
    config: Config,
    theme: UiTheme,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    SetFilter(FilterMode),
    Toggle(ExtensionId),
    Remove(ExtensionId),
    ToggleTheme,
}

impl ManagerApp {
    /// Create the application from a loaded config.
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let prefs = ThemePreference::open(config.general.preferences_path.clone());
        let view = ViewController::new(
            ExtensionStore::seeded(),
            config.general.default_filter,
            prefs,
        );
        let theme = UiTheme::new(view.theme(), &config.appearance.accent_color);

        (
            Self {
                view,
                config,
                theme,
            },
            Task::none(),
        )
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SetFilter(mode) => self.view.set_filter(mode),
            Message::Toggle(id) => self.view.on_toggle(id),
            Message::Remove(id) => self.view.on_remove(id),
            Message::ToggleTheme => {
                let theme = self.view.toggle_theme();
                self.theme = UiTheme::new(theme, &self.config.appearance.accent_color);
            }
        }
        Task::none()
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![self.build_header(), self.build_filters(), self.build_grid()]
            .spacing(24)
            .padding(24);

        let theme = self.theme;
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| style::main_container(&theme))
            .into()
    }

    /// Keyboard shortcuts: Ctrl/Cmd+D switches theme, 1-3 pick a filter.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| match key.as_ref() {
            Key::Character("d") if modifiers.command() => Some(Message::ToggleTheme),
            Key::Character("1") => Some(Message::SetFilter(FilterMode::All)),
            Key::Character("2") => Some(Message::SetFilter(FilterMode::Active)),
            Key::Character("3") => Some(Message::SetFilter(FilterMode::Inactive)),
            _ => None,
        })
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        "Extensions".to_string()
    }

    /// iced base theme for unstyled widgets.
    pub fn theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }

    // --- Private methods ---

    fn build_header(&self) -> Element<'_, Message> {
        let theme = self.theme;

        let logo = text("Extensions").size(24).font(BOLD).color(theme.text);

        let icon = if theme.dark { "\u{2600}" } else { "\u{263E}" };
        let switch = button(text(icon).size(18))
            .padding([8, 12])
            .on_press(Message::ToggleTheme)
            .style(move |_, status| style::theme_button(&theme, status));

        let bar = row![logo, Space::with_width(Length::Fill), switch]
            .align_y(Alignment::Center)
            .padding([12, 16]);

        container(bar)
            .width(Length::Fill)
            .style(move |_| style::panel(&theme))
            .into()
    }

    fn build_filters(&self) -> Element<'_, Message> {
        let theme = self.theme;
        let counts = self.view.counts();
        let current = self.view.filter_mode();

        let pills = FilterMode::ALL.iter().fold(Row::new().spacing(12), |pills, &mode| {
            let selected = mode == current;
            let label = format!("{} ({})", mode.label(), counts.get(mode));
            pills.push(
                button(text(label).size(16))
                    .padding([6, 20])
                    .on_press(Message::SetFilter(mode))
                    .style(move |_, status| style::filter_pill(&theme, selected, status)),
            )
        });

        let title = text("Extensions List").size(28).font(BOLD).color(theme.text);

        row![title, Space::with_width(Length::Fill), pills]
            .align_y(Alignment::Center)
            .into()
    }

    fn build_grid(&self) -> Element<'_, Message> {
        let theme = self.theme;
        let columns = self.config.appearance.columns.max(1) as usize;
        let displayed = self.view.displayed();

        if displayed.is_empty() {
            return container(text("No extensions to show").size(16).color(theme.subtext))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(40)
                .into();
        }

        let rows = displayed.chunks(columns).map(|chunk| {
            let mut cards = Row::new().spacing(12);
            for record in chunk {
                cards = cards.push(self.build_card(record));
            }
            for _ in chunk.len()..columns {
                cards = cards.push(Space::with_width(Length::FillPortion(1)));
            }
            Element::from(cards)
        });

        scrollable(Column::with_children(rows).spacing(12))
            .height(Length::Fill)
            .into()
    }

    fn build_card(&self, record: &ExtensionRecord) -> Element<'static, Message> {
        let theme = self.theme;
        let id = record.id;

        let badge: Element<'static, Message> =
            match record.logo_path(&self.config.appearance.assets_dir) {
                Some(path) => svg(svg::Handle::from_path(path))
                    .width(Length::Fixed(52.0))
                    .height(Length::Fixed(52.0))
                    .into(),
                None => {
                    let initial = text(record.initial().to_string())
                        .size(22)
                        .font(BOLD)
                        .color(theme.accent);
                    container(initial)
                        .center_x(Length::Fixed(52.0))
                        .center_y(Length::Fixed(52.0))
                        .style(move |_| style::logo_badge(&theme))
                        .into()
                }
            };

        let details = column![
            text(record.name.clone()).size(18).font(BOLD).color(theme.text),
            text(record.description.clone()).size(14).color(theme.subtext),
        ]
        .spacing(6);

        let top = row![badge, details].spacing(16);

        let remove = button(text("Remove").size(14))
            .padding([6, 16])
            .on_press(Message::Remove(id))
            .style(move |_, status| style::remove_button(&theme, status));

        let switch = toggler(record.is_active)
            .on_toggle(move |_| Message::Toggle(id))
            .size(22)
            .style(move |_, status| style::active_toggler(&theme, status));

        let bottom =
            row![remove, Space::with_width(Length::Fill), switch].align_y(Alignment::Center);

        container(column![top, Space::with_height(Length::Fill), bottom].spacing(20))
            .padding(20)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(200.0))
            .style(move |_| style::panel(&theme))
            .into()
    }
}
