//! Circular loading indicator demo
//! An iced window hosting the indicator next to a panel of live controls

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod indicator;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Initialize tracing for logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Run as a daemon so the close request can stop the animation thread first
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
