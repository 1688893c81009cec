//! Geometry resolver
//!
//! Maps the space offered by the host to the indicator box. In square mode
//! the box takes the minimum of the available width/height and is placed by
//! the alignment flags; otherwise it fills the space with zero margins.

use iced::alignment::{Horizontal, Vertical};

use super::alignment::Alignment;

/// Box size and offset inside the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub margin_x: i32,
    pub margin_y: i32,
}

/// Candidate extent on one axis
///
/// Grows to the available size when it exceeds the current box plus margin
/// cushion, otherwise shrinks to it. Saturates so that any stored size or
/// margin resolves without overflow.
fn candidate(available: i32, size: i32, margin: i32) -> i32 {
    let occupied = size.saturating_add(margin.saturating_mul(2));
    if available > occupied {
        available.max(occupied) // expand
    } else {
        available.min(occupied) // shrink
    }
}

fn horizontal_margin(alignment: Alignment, leftover: i32) -> i32 {
    match alignment.horizontal() {
        Some(Horizontal::Center) => leftover / 2,
        Some(Horizontal::Right) => leftover,
        Some(Horizontal::Left) | None => 0,
    }
}

fn vertical_margin(alignment: Alignment, leftover: i32) -> i32 {
    match alignment.vertical() {
        Some(Vertical::Center) => leftover / 2,
        Some(Vertical::Bottom) => leftover,
        Some(Vertical::Top) | None => 0,
    }
}

/// Resolve the box for a new available size
pub fn resolve(current: Layout, available: (i32, i32), square: bool, alignment: Alignment) -> Layout {
    let (available_w, available_h) = (available.0.max(0), available.1.max(0));
    let width = candidate(available_w, current.width, current.margin_x);
    let height = candidate(available_h, current.height, current.margin_y);

    if square {
        let side = width.min(height);
        let (leftover_x, leftover_y) = (width - side, height - side);
        let (margin_x, margin_y) = if alignment.is_center() {
            (leftover_x / 2, leftover_y / 2)
        } else {
            (
                horizontal_margin(alignment, leftover_x),
                vertical_margin(alignment, leftover_y),
            )
        };
        Layout {
            width: side,
            height: side,
            margin_x,
            margin_y,
        }
    } else {
        Layout {
            width,
            height,
            margin_x: 0,
            margin_y: 0,
        }
    }
}
