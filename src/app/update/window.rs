// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.window_size = *size;
                let (width, height) = self.indicator_area();
                self.indicator.resize(width, height);
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Close requested, stopping indicator");
                self.indicator.stop();
                Some(iced::exit())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
