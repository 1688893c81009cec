//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_window_size(state::WINDOW_SIZE);

        // Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: state::WINDOW_SIZE,
            min_size: Some(state::MIN_WINDOW_SIZE),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "loading-indicator".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(helpers::load_preset(), |result| match result {
                Ok(Some(preset)) => Message::PresetLoaded(preset),
                Ok(None) => Message::Noop,
                Err(e) => {
                    tracing::warn!("Failed to load preset: {:#}", e);
                    Message::ShowErrorToast(format!("Preset ignored: {}", e))
                }
            }),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        Theme::Dark
    }

    /// Window title reflecting the animation state
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        if self.indicator.is_running() {
            "Circular Loading Indicator - Running".to_string()
        } else {
            "Circular Loading Indicator".to_string()
        }
    }

    /// Subscriptions for animation frames and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Animation frames while the indicator runs
        let animation_sub =
            if subscription_logic::needs_frame_subscription(self.indicator.is_running()) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        // 2. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, close_request_sub, resize_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The animation thread only flags redraws; frames are what consume them
    pub fn needs_frame_subscription(is_running: bool) -> bool {
        is_running
    }
}
