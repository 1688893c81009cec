//! Numeric stepper widget
//!
//! A value label between decrement/increment buttons. Buttons at a bound are
//! disabled. The step helpers compute the value each button sends.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme;

/// Width of the value label
const VALUE_WIDTH: f32 = 56.0;

/// Next integer value, or `None` when `value` already sits at the bound
pub fn step_i32(value: i32, delta: i32, min: i32, max: i32) -> Option<i32> {
    let next = value.saturating_add(delta).clamp(min, max);
    (next != value).then_some(next)
}

/// Next speed value, rounded to one decimal, or `None` at the bound
pub fn step_f64(value: f64, delta: f64, min: f64, max: f64) -> Option<f64> {
    let next = (((value + delta) * 10.0).round() / 10.0).clamp(min, max);
    ((next - value).abs() > f64::EPSILON).then_some(next)
}

/// Build a stepper
///
/// `None` for either message disables that button.
pub fn stepper<'a, Message: Clone + 'a>(
    value: String,
    on_decrement: Option<Message>,
    on_increment: Option<Message>,
) -> Element<'a, Message> {
    let step_button = |label: &'static str, message: Option<Message>| {
        button(
            container(text(label).size(14))
                .width(Fill)
                .align_x(Alignment::Center),
        )
        .width(30)
        .padding([4, 0])
        .style(theme::secondary_button)
        .on_press_maybe(message)
    };

    let value_label = container(text(value).size(14).color(theme::TEXT_PRIMARY))
    .width(VALUE_WIDTH)
    .align_x(Alignment::Center);

    row![
        step_button("−", on_decrement),
        value_label,
        step_button("+", on_increment),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}
