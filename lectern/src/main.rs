mod app;
mod components;
mod config;
mod geometry;
mod routers;
mod shared;
mod store;
mod style;
mod widgets;

use env_logger::Env;
use iced::window;

use crate::app::App;
use crate::config::AppConfig;

fn main() -> iced::Result {
    let config = AppConfig::default();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(config.log_filter),
    )
    .format_timestamp_millis()
    .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: config.window_size,
            min_size: Some(config.min_window_size),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
