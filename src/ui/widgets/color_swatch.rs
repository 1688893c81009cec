//! Color swatch button
//!
//! A small filled square showing a color. Pressing it advances to the next
//! entry of `SWATCHES`.

use iced::widget::{button, container, Space};
use iced::{Background, Border, Color, Element, color};

use crate::ui::theme;

/// Palette cycled by swatch buttons
pub const SWATCHES: [Color; 8] = [
    color!(0x498bd1),
    color!(0x44475a),
    color!(0xff5555),
    color!(0x50fa7b),
    color!(0xf1fa8c),
    color!(0xbd93f9),
    color!(0xff79c6),
    color!(0xf8f8f2),
];

const SWATCH_SIZE: f32 = 24.0;

/// Palette entry after `current`; colors outside the palette restart it
pub fn next_swatch(current: Color) -> Color {
    match SWATCHES.iter().position(|c| *c == current) {
        Some(index) => SWATCHES[(index + 1) % SWATCHES.len()],
        None => SWATCHES[0],
    }
}

/// Build a swatch button filled with `fill`
pub fn color_swatch<'a, Message: Clone + 'a>(fill: Color, on_press: Message) -> Element<'a, Message> {
    let swatch = container(Space::new().width(SWATCH_SIZE).height(SWATCH_SIZE)).style(
        move |_theme| container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: theme::BORDER,
            },
            ..Default::default()
        },
    );

    button(swatch)
        .padding(2)
        .style(theme::secondary_button)
        .on_press(on_press)
        .into()
}
