//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod controls;
mod toast;
mod window;

use iced::Task;

use super::{App, Message};

/// Shown when a change is rejected because the indicator is running
pub const RUNNING_WARNING: &str =
    "The indicator is running. Please stop the indicator to change the settings.";

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(&message);
        self.sync_indicator();
        task
    }

    fn dispatch(&mut self, message: &Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_animation(message) {
            return task;
        }
        if let Some(task) = self.handle_controls(message) {
            return task;
        }
        if let Some(task) = self.handle_window(message) {
            return task;
        }
        if let Some(task) = self.handle_toast(message) {
            return task;
        }

        // Default: no task
        Task::none()
    }

    /// Drain change notifications and consume a pending redraw request
    fn sync_indicator(&mut self) {
        while let Ok(event) = self.indicator_events.try_recv() {
            tracing::trace!("Indicator changed: {:?}", event);
            self.last_event = Some(event);
        }
        if self.indicator.take_redraw() {
            self.indicator_cache.clear();
        }
    }
}
