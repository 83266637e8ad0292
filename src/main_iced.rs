//! extman - iced UI entry point.
//!
//! Build with: cargo build --features iced-ui

use extman::ui::ManagerApp;
use extman::Config;
use iced::{window, Size};

fn main() -> iced::Result {
    extman::logging::init();

    let config = Config::load();
    tracing::info!("Starting extman with iced UI");

    let window_settings = window::Settings {
        size: Size::new(
            config.appearance.window_width as f32,
            config.appearance.window_height as f32,
        ),
        position: window::Position::Centered,
        min_size: Some(Size::new(480.0, 400.0)),
        ..Default::default()
    };

    iced::application(ManagerApp::title, ManagerApp::update, ManagerApp::view)
        .subscription(ManagerApp::subscription)
        .theme(ManagerApp::theme)
        .window(window_settings)
        .run_with(move || ManagerApp::new(config))
}
