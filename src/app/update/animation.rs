// src/app/update/animation.rs
//! Start/stop and frame tick handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::indicator::IndicatorError;

impl App {
    /// Handle animation-related messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Start => match self.indicator.start() {
                Ok(()) => Some(Task::none()),
                Err(IndicatorError::AlreadyRunning) => {
                    tracing::debug!("Start ignored, indicator already running");
                    Some(Task::none())
                }
                Err(e) => Some(Task::done(Message::ShowErrorToast(e.to_string()))),
            },

            Message::Stop => {
                self.indicator.stop();
                Some(Task::none())
            }

            // Redraw requests are consumed after every update
            Message::AnimationTick => Some(Task::none()),

            _ => None,
        }
    }
}
