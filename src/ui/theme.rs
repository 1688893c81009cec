//! Demo window palette and widget styles
//!
//! The demo always runs on iced's dark theme, so the palette is a fixed set
//! of constants. Style functions keep the `&Theme` parameter iced expects.

use iced::color;
use iced::widget::{button, container, pick_list, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============ Palette ============

pub const BACKGROUND: Color = color!(0x121212);
pub const PANEL: Color = color!(0x1a1a1a);
pub const SURFACE: Color = color!(0x242424);
/// Toast background, slightly lifted from the panel
pub const SURFACE_ELEVATED: Color = color!(0x1e1e24);
pub const BORDER: Color = color!(0x2e2e2e);

pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
pub const TEXT_MUTED: Color = color!(0x888888);
pub const SECTION_TITLE: Color = color!(0xb3b3b3);

/// Matches the indicator's default progress color
pub const ACCENT: Color = color!(0x498bd1);
pub const ACCENT_HOVER: Color = color!(0x5d9ee0);

pub const DANGER: Color = color!(0xe64d4d);
pub const SUCCESS: Color = color!(0x4dcc80);
pub const WARNING: Color = color!(0xf2bf4d);
pub const INFO: Color = color!(0x66b3f2);

/// Drop shadow under floating surfaces
pub const SHADOW: Shadow = Shadow {
    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
    offset: Vector::new(0.0, 4.0),
    blur_radius: 12.0,
};

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

fn outlined(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 1.0,
        color: BORDER,
    }
}

// ============ Containers ============

/// Window background behind everything
pub fn main_content(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Control panel column
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        text_color: Some(TEXT_PRIMARY),
        border: outlined(12.0),
        ..Default::default()
    }
}

/// Framed area hosting the indicator
pub fn group_box(_theme: &Theme) -> container::Style {
    container::Style {
        border: outlined(12.0),
        ..Default::default()
    }
}

/// Floating toast card
pub fn toast_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_ELEVATED)),
        border: outlined(8.0),
        shadow: SHADOW,
        ..Default::default()
    }
}

/// Thin horizontal rule
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BORDER)),
        ..Default::default()
    }
}

// ============ Buttons ============

/// Filled accent button (Start)
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => ACCENT_HOVER,
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: rounded(24.0),
        ..Default::default()
    }
}

/// Outlined button (Stop, stepper arrows); dims when disabled
pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color, border_color) = match status {
        button::Status::Hovered => (SURFACE, TEXT_PRIMARY, TEXT_MUTED),
        button::Status::Disabled => (Color::TRANSPARENT, TEXT_MUTED, BORDER),
        _ => (Color::TRANSPARENT, TEXT_PRIMARY, BORDER),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            ..outlined(24.0)
        },
        ..Default::default()
    }
}

// ============ Pick list ============

pub fn panel_pick_list(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let alpha = match status {
        pick_list::Status::Active => 0.08,
        pick_list::Status::Hovered => 0.12,
        pick_list::Status::Opened { .. } => 0.15,
    };
    pick_list::Style {
        text_color: TEXT_PRIMARY,
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_SECONDARY,
        background: Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha)),
        border: outlined(8.0),
    }
}

pub fn panel_pick_list_menu(_theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: TEXT_PRIMARY,
        background: Background::Color(SURFACE),
        border: outlined(8.0),
        selected_text_color: TEXT_PRIMARY,
        selected_background: Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1)),
        shadow: SHADOW,
    }
}

// ============ Scrollable ============

/// Panel scrollbar: invisible rail, border-colored scroller
pub fn dark_scrollable(_theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(BORDER),
            border: rounded(4.0),
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(SURFACE),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: TEXT_MUTED,
        },
    }
}
