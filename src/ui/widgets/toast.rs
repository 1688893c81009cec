//! Toast notifications
//!
//! The demo raises a toast when a control is rejected (warning), when
//! startup fails (error) and when a preset was applied (info).

use std::time::Duration;

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Fill};

use crate::ui::theme;

/// Longest line before the message wraps
const MAX_TOAST_WIDTH: f32 = 460.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Error,
    Warning,
    Info,
}

impl ToastStyle {
    pub fn accent(self) -> Color {
        match self {
            ToastStyle::Error => theme::DANGER,
            ToastStyle::Warning => theme::WARNING,
            ToastStyle::Info => theme::INFO,
        }
    }

    /// Short heading above the message
    pub fn title(self) -> &'static str {
        match self {
            ToastStyle::Error => "✗ Error",
            ToastStyle::Warning => "⚠ Warning",
            ToastStyle::Info => "ℹ Info",
        }
    }

    /// How long the toast stays before auto-hiding
    pub fn display_duration(self) -> Duration {
        match self {
            ToastStyle::Info => Duration::from_secs(3),
            ToastStyle::Warning | ToastStyle::Error => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Warning,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Info,
        }
    }
}

/// Card with an accent strip, a heading and the wrapped message
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let accent = toast.style.accent();

    let strip = container(Space::new().width(3).height(32))
        .style(move |_theme| container::Style {
            background: Some(accent.into()),
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let body = column![
        text(toast.style.title()).size(12).color(accent),
        text(toast.message.clone())
            .size(13)
            .color(theme::TEXT_PRIMARY)
            .width(Fill),
    ]
    .spacing(4);

    let card = row![strip, body]
        .spacing(12)
        .align_y(Alignment::Center);

    container(card)
        .padding([12, 16])
        .max_width(MAX_TOAST_WIDTH)
        .style(theme::toast_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_style() {
        assert_eq!(Toast::warning("w").style, ToastStyle::Warning);
        assert_eq!(Toast::error("e").style, ToastStyle::Error);
        assert_eq!(Toast::info("i").style, ToastStyle::Info);
    }

    #[test]
    fn test_warnings_outlast_info() {
        assert!(ToastStyle::Warning.display_duration() > ToastStyle::Info.display_duration());
        assert_eq!(
            ToastStyle::Error.display_duration(),
            ToastStyle::Warning.display_duration()
        );
    }

    #[test]
    fn test_each_style_has_its_own_accent() {
        assert_ne!(ToastStyle::Warning.accent(), ToastStyle::Error.accent());
        assert_ne!(ToastStyle::Info.accent(), ToastStyle::Warning.accent());
    }
}
