// src/app/update/toast.rs
//! Toast notification handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle toast messages
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowErrorToast(msg) => Some(self.show_toast(Toast::error(msg.clone()))),
            Message::HideToast(id) => {
                self.toast.hide(*id);
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Show a toast and schedule its auto-hide
    pub fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        let hide_after = toast.style.display_duration();
        let id = self.toast.show(toast);
        Task::perform(
            async move {
                tokio::time::sleep(hide_after).await;
            },
            move |_| Message::HideToast(id),
        )
    }
}

