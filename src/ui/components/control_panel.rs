//! Indicator control panel
//!
//! Right-hand column of the demo window. Every control shows the value read
//! from the indicator's getters, so a change the indicator rejected never
//! sticks in the UI.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, text_input, toggler};
use iced::{Alignment, Background, Color, Element, Fill};

use crate::app::Message;
use crate::indicator::{Alignment as IndicatorAlignment, Indicator, IndicatorEvent};
use crate::ui::theme;
use crate::ui::widgets::{color_swatch, step_f64, step_i32, stepper};

/// Speed stepper increment
const SPEED_STEP: f64 = 0.1;
const MIN_SPEED: f64 = 0.1;
const MAX_SPEED: f64 = 50.0;
const MAX_PROGRESS_WIDTH: i32 = 100;

/// Build the control panel
///
/// `area` is the space currently offered to the indicator; width, height
/// and margins cannot exceed it.
pub fn view<'a>(
    indicator: &'a Indicator,
    area: (i32, i32),
    last_event: Option<&IndicatorEvent>,
) -> Element<'a, Message> {
    let running = indicator.is_running();

    let actions = row![
        button(text("Start").size(14))
            .padding([8, 20])
            .style(theme::primary_button)
            .on_press(Message::Start),
        button(text("Stop").size(14))
            .padding([8, 20])
            .style(theme::secondary_button)
            .on_press(Message::Stop),
        Space::new().width(Fill),
        status_badge(running),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content = column![
        actions,
        section_header("Shape"),
        flags_section(indicator),
        section_header("Size"),
        size_section(indicator, area),
        section_header("Speed"),
        speed_section(indicator),
        section_header("Appearance"),
        appearance_section(indicator),
        divider(),
        event_footer(last_event),
    ]
    .spacing(8)
    .padding([0, 12]);

    scrollable(content)
        .style(theme::dark_scrollable)
        .height(Fill)
        .into()
}

fn flags_section(indicator: &Indicator) -> Element<'static, Message> {
    let flag = |label: &str, value: bool, on_toggle: fn(bool) -> Message| {
        setting_row(
            label,
            toggler(value).on_toggle(on_toggle).size(20).into(),
        )
    };

    column![
        flag("Square", indicator.square(), Message::SquareToggled),
        flag("Shadow", indicator.shadow(), Message::ShadowToggled),
        flag("Text", indicator.enable_text(), Message::EnableTextToggled),
        flag("Background", indicator.enable_bg(), Message::EnableBgToggled),
        flag(
            "Rounded cap",
            indicator.progress_rounded_cap(),
            Message::RoundedCapToggled
        ),
        setting_row(
            "Alignment",
            styled_pick_list(
                IndicatorAlignment::presets(),
                Some(indicator.progress_alignment()),
                Message::AlignmentSelected,
            ),
        ),
    ]
    .into()
}

fn size_section(indicator: &Indicator, area: (i32, i32)) -> Element<'static, Message> {
    let (max_width, max_height) = (area.0.max(0), area.1.max(0));

    let int_row = |label: &str, value: i32, min: i32, max: i32, on_change: fn(i32) -> Message| {
        setting_row(
            label,
            stepper(
                value.to_string(),
                step_i32(value, -1, min, max).map(on_change),
                step_i32(value, 1, min, max).map(on_change),
            ),
        )
    };

    column![
        int_row(
            "Segment size",
            indicator.segment_size(),
            0,
            359,
            Message::SegmentSizeChanged
        ),
        int_row(
            "Width",
            indicator.width(),
            0,
            max_width,
            Message::WidthChanged
        ),
        int_row(
            "Height",
            indicator.height(),
            0,
            max_height,
            Message::HeightChanged
        ),
        int_row(
            "Progress width",
            indicator.progress_width(),
            1,
            MAX_PROGRESS_WIDTH,
            Message::ProgressWidthChanged
        ),
        int_row(
            "Margin X",
            indicator.margin_x(),
            0,
            max_width,
            Message::MarginXChanged
        ),
        int_row(
            "Margin Y",
            indicator.margin_y(),
            0,
            max_height,
            Message::MarginYChanged
        ),
    ]
    .into()
}

fn speed_section(indicator: &Indicator) -> Element<'static, Message> {
    let speed_row = |label: &str, value: f64, on_change: fn(f64) -> Message| {
        setting_row(
            label,
            stepper(
                format!("{:.1}", value),
                step_f64(value, -SPEED_STEP, MIN_SPEED, MAX_SPEED).map(on_change),
                step_f64(value, SPEED_STEP, MIN_SPEED, MAX_SPEED).map(on_change),
            ),
        )
    };

    column![
        speed_row(
            "Minimum",
            indicator.minimum_speed(),
            Message::MinimumSpeedChanged
        ),
        speed_row(
            "Maximum",
            indicator.maximum_speed(),
            Message::MaximumSpeedChanged
        ),
    ]
    .into()
}

fn appearance_section(indicator: &Indicator) -> Element<'_, Message> {
    let caption = text_input("Caption", indicator.text())
        .on_input(Message::TextChanged)
        .size(14)
        .padding([6, 10])
        .width(160);

    column![
        setting_row(
            "Progress color",
            color_swatch(indicator.progress_color(), Message::CycleProgressColor),
        ),
        setting_row(
            "Background color",
            color_swatch(indicator.bg_color(), Message::CycleBgColor),
        ),
        setting_row(
            "Text color",
            color_swatch(indicator.text_color(), Message::CycleTextColor),
        ),
        setting_row("Text", caption.into()),
    ]
    .into()
}

fn status_badge(running: bool) -> Element<'static, Message> {
    let (label, color) = if running {
        ("Running", theme::SUCCESS)
    } else {
        ("Idle", theme::TEXT_MUTED)
    };

    container(text(label).size(12).color(color))
        .padding([4, 10])
        .style(move |_theme| container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..color })),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn event_footer(last_event: Option<&IndicatorEvent>) -> Element<'static, Message> {
    let label = match last_event {
        Some(event) => format!("Last change: {:?}", event),
        None => "No changes yet".to_string(),
    };

    text(label).size(12).color(theme::TEXT_MUTED).into()
}

fn section_header(title: &str) -> Element<'static, Message> {
    container(text(title.to_string()).size(16).color(theme::SECTION_TITLE))
        .padding([8, 0])
        .into()
}

/// Setting row with label on left and control on right
fn setting_row<'a>(label: &str, control: Element<'a, Message>) -> Element<'a, Message> {
    let label_text = text(label.to_string())
        .size(14)
        .color(theme::TEXT_SECONDARY);

    container(
        row![label_text, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([4, 0])
    .into()
}

fn divider() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .style(theme::divider)
        .width(Fill)
        .into()
}

/// Styled pick list (dropdown) with custom appearance
fn styled_pick_list<'a, T, F>(
    options: Vec<T>,
    selected: Option<T>,
    on_selected: F,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
    F: Fn(T) -> Message + 'a,
{
    pick_list(options, selected, on_selected)
        .style(theme::panel_pick_list)
        .menu_style(theme::panel_pick_list_menu)
        .padding([6, 10])
        .text_size(14)
        .into()
}
