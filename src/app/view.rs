// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, container, row, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use super::state::{CONTENT_PADDING, PANEL_WIDTH};
use crate::ui::primitives::loading_indicator;
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        // Indicator area: the canvas fills exactly the space the indicator was resized to
        let indicator_area = container(loading_indicator::view(
            &self.indicator,
            &self.indicator_cache,
        ))
        .width(Fill)
        .height(Fill)
        .style(theme::group_box);

        let panel = container(components::control_panel::view(
            &self.indicator,
            self.indicator_area(),
            self.last_event.as_ref(),
        ))
        .width(PANEL_WIDTH)
        .height(Fill)
        .padding([12, 0])
        .style(theme::panel);

        let main_layout: Element<'_, Message> = row![indicator_area, panel]
            .spacing(CONTENT_PADDING)
            .padding(CONTENT_PADDING)
            .width(Fill)
            .height(Fill)
            .into();

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.toast.current {
            container(widgets::view_toast(toast))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        // Always use consistent stack structure
        container(stack![main_layout, toast_overlay].width(Fill).height(Fill))
            .style(theme::main_content)
            .into()
    }
}
