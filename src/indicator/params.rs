//! Parameter store
//!
//! All visual and behavioral configuration of the indicator, with one
//! guarded setter and one getter per attribute.
//!
//! Setter contract:
//! - while the animation runs, guarded setters return `IndicatorError::Running`
//!   and leave everything untouched
//! - setting the current value is a no-op (no event, no redraw)
//! - an accepted change stores the value, emits its `IndicatorEvent`, then
//!   requests a redraw; `width`, `height` and `square` re-run the geometry
//!   resolver in between

use iced::{Color, color};

use super::alignment::Alignment;
use super::driver::FULL_TURN;
use super::error::IndicatorError;
use super::events::IndicatorEvent;
use super::geometry::Layout;
use super::Indicator;

pub const DEFAULT_MIN_SPEED: f64 = 1.0;
pub const DEFAULT_MAX_SPEED: f64 = 3.0;
pub const DEFAULT_SEGMENT_SIZE: i32 = 12;
pub const DEFAULT_SIZE: i32 = 200;
pub const DEFAULT_PROGRESS_WIDTH: i32 = 10;
pub const DEFAULT_BG_COLOR: Color = color!(0x44475a);
pub const DEFAULT_PROGRESS_COLOR: Color = color!(0x498bd1);
pub const DEFAULT_TEXT_COLOR: Color = color!(0x498bd1);
pub const DEFAULT_TEXT: &str = "Loading...";

/// Indicator configuration owned by the UI thread
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    pub min_speed: f64,
    pub max_speed: f64,
    /// Arc length in degrees, always in `0..360`
    pub segment_size: i32,
    pub width: i32,
    pub height: i32,
    pub margin_x: i32,
    pub margin_y: i32,
    pub progress_width: i32,
    pub square: bool,
    pub shadow: bool,
    pub progress_rounded_cap: bool,
    pub enable_bg: bool,
    pub enable_text: bool,
    pub progress_alignment: Alignment,
    pub bg_color: Color,
    pub progress_color: Color,
    pub text_color: Color,
    pub text: String,
    /// Last size offered by the host
    pub bounds: (i32, i32),
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            segment_size: DEFAULT_SEGMENT_SIZE,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            margin_x: 0,
            margin_y: 0,
            progress_width: DEFAULT_PROGRESS_WIDTH,
            square: false,
            shadow: false,
            progress_rounded_cap: true,
            enable_bg: true,
            enable_text: false,
            progress_alignment: Alignment::CENTER,
            bg_color: DEFAULT_BG_COLOR,
            progress_color: DEFAULT_PROGRESS_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            text: DEFAULT_TEXT.to_string(),
            bounds: (DEFAULT_SIZE, DEFAULT_SIZE),
        }
    }
}

impl IndicatorState {
    pub fn layout(&self) -> Layout {
        Layout {
            width: self.width,
            height: self.height,
            margin_x: self.margin_x,
            margin_y: self.margin_y,
        }
    }

    pub fn apply_layout(&mut self, layout: Layout) {
        self.width = layout.width;
        self.height = layout.height;
        self.margin_x = layout.margin_x;
        self.margin_y = layout.margin_y;
    }
}

impl Indicator {
    // ============ Guard & commit helpers ============

    fn guard(&self, attribute: &'static str) -> Result<(), IndicatorError> {
        if self.is_running() {
            let err = IndicatorError::Running { attribute };
            tracing::warn!("{}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Guard applied only while the attribute is visible
    fn guard_visible(&self, attribute: &'static str, visible: bool) -> Result<(), IndicatorError> {
        if visible {
            self.guard(attribute)
        } else {
            Ok(())
        }
    }

    fn commit(&self, event: IndicatorEvent) {
        self.events.emit(event);
        self.shared.request_redraw();
    }

    fn commit_geometry(&mut self, event: IndicatorEvent) {
        self.events.emit(event);
        self.relayout();
        self.shared.request_redraw();
    }

    // ============ Speed ============

    pub fn set_maximum_speed(&mut self, speed: f64) -> Result<(), IndicatorError> {
        self.guard("maximum speed")?;
        if !speed.is_finite() || speed < self.state.min_speed {
            let err = IndicatorError::InvalidRange {
                attribute: "maximum speed",
                value: speed,
                bound: self.state.min_speed,
            };
            tracing::warn!("{}", err);
            return Err(err);
        }
        if self.state.max_speed != speed {
            self.state.max_speed = speed;
            self.commit(IndicatorEvent::MaximumSpeed(speed));
        }
        Ok(())
    }

    pub fn set_minimum_speed(&mut self, speed: f64) -> Result<(), IndicatorError> {
        self.guard("minimum speed")?;
        if !speed.is_finite() || speed > self.state.max_speed {
            let err = IndicatorError::InvalidRange {
                attribute: "minimum speed",
                value: speed,
                bound: self.state.max_speed,
            };
            tracing::warn!("{}", err);
            return Err(err);
        }
        if self.state.min_speed != speed {
            self.state.min_speed = speed;
            self.commit(IndicatorEvent::MinimumSpeed(speed));
        }
        Ok(())
    }

    // ============ Segment & box ============

    /// Set the arc length; values are normalized into `0..360`
    ///
    /// Negative input wraps upward: `-30` is stored as `330`.
    pub fn set_segment_size(&mut self, segment_size: i32) -> Result<(), IndicatorError> {
        self.guard("segment size")?;
        let normalized = segment_size.rem_euclid(FULL_TURN as i32);
        if self.state.segment_size != normalized {
            self.state.segment_size = normalized;
            self.commit(IndicatorEvent::SegmentSize(normalized));
        }
        Ok(())
    }

    pub fn set_width(&mut self, width: i32) -> Result<(), IndicatorError> {
        self.guard("width")?;
        if self.state.width != width {
            self.state.width = width;
            self.commit_geometry(IndicatorEvent::Width(width));
        }
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<(), IndicatorError> {
        self.guard("height")?;
        if self.state.height != height {
            self.state.height = height;
            self.commit_geometry(IndicatorEvent::Height(height));
        }
        Ok(())
    }

    /// Set both margins at once: one event, one redraw
    pub fn set_margin(&mut self, x: i32, y: i32) -> Result<(), IndicatorError> {
        self.guard("margin")?;
        if self.state.margin_x != x || self.state.margin_y != y {
            self.state.margin_x = x;
            self.state.margin_y = y;
            self.commit(IndicatorEvent::Margin { x, y });
        }
        Ok(())
    }

    pub fn set_margin_x(&mut self, x: i32) -> Result<(), IndicatorError> {
        self.guard("margin")?;
        if self.state.margin_x != x {
            self.state.margin_x = x;
            self.commit(IndicatorEvent::MarginX(x));
        }
        Ok(())
    }

    pub fn set_margin_y(&mut self, y: i32) -> Result<(), IndicatorError> {
        self.guard("margin")?;
        if self.state.margin_y != y {
            self.state.margin_y = y;
            self.commit(IndicatorEvent::MarginY(y));
        }
        Ok(())
    }

    pub fn set_progress_width(&mut self, width: i32) -> Result<(), IndicatorError> {
        self.guard("progress width")?;
        if self.state.progress_width != width {
            self.state.progress_width = width;
            self.commit(IndicatorEvent::ProgressWidth(width));
        }
        Ok(())
    }

    // ============ Flags ============

    pub fn set_square(&mut self, enable: bool) -> Result<(), IndicatorError> {
        self.guard("square")?;
        if self.state.square != enable {
            self.state.square = enable;
            self.commit_geometry(IndicatorEvent::Square(enable));
        }
        Ok(())
    }

    /// Toggle the drop shadow; allowed while running
    pub fn set_shadow(&mut self, enable: bool) -> Result<(), IndicatorError> {
        if self.state.shadow != enable {
            self.state.shadow = enable;
            self.commit(IndicatorEvent::Shadow(enable));
        }
        Ok(())
    }

    pub fn set_progress_rounded_cap(&mut self, enable: bool) -> Result<(), IndicatorError> {
        self.guard("progress rounded cap")?;
        if self.state.progress_rounded_cap != enable {
            self.state.progress_rounded_cap = enable;
            self.commit(IndicatorEvent::ProgressRoundedCap(enable));
        }
        Ok(())
    }

    pub fn set_enable_bg(&mut self, enable: bool) -> Result<(), IndicatorError> {
        self.guard("enable background")?;
        if self.state.enable_bg != enable {
            self.state.enable_bg = enable;
            self.commit(IndicatorEvent::EnableBg(enable));
        }
        Ok(())
    }

    pub fn set_enable_text(&mut self, enable: bool) -> Result<(), IndicatorError> {
        self.guard("enable text")?;
        if self.state.enable_text != enable {
            self.state.enable_text = enable;
            self.commit(IndicatorEvent::EnableText(enable));
        }
        Ok(())
    }

    pub fn set_progress_alignment(&mut self, alignment: Alignment) -> Result<(), IndicatorError> {
        self.guard("progress alignment")?;
        if self.state.progress_alignment != alignment {
            self.state.progress_alignment = alignment;
            self.commit(IndicatorEvent::ProgressAlignment(alignment));
        }
        Ok(())
    }

    // ============ Colors & text ============

    /// Guarded only while the background track is visible
    pub fn set_bg_color(&mut self, color: Color) -> Result<(), IndicatorError> {
        self.guard_visible("background color", self.state.enable_bg)?;
        if self.state.bg_color != color {
            self.state.bg_color = color;
            self.commit(IndicatorEvent::BgColor(color));
        }
        Ok(())
    }

    pub fn set_progress_color(&mut self, color: Color) -> Result<(), IndicatorError> {
        self.guard("progress color")?;
        if self.state.progress_color != color {
            self.state.progress_color = color;
            self.commit(IndicatorEvent::ProgressColor(color));
        }
        Ok(())
    }

    /// Guarded only while the caption is visible
    pub fn set_text_color(&mut self, color: Color) -> Result<(), IndicatorError> {
        self.guard_visible("text color", self.state.enable_text)?;
        if self.state.text_color != color {
            self.state.text_color = color;
            self.commit(IndicatorEvent::TextColor(color));
        }
        Ok(())
    }

    /// Guarded only while the caption is visible
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), IndicatorError> {
        self.guard_visible("text", self.state.enable_text)?;
        let text = text.into();
        if self.state.text != text {
            self.state.text = text.clone();
            self.commit(IndicatorEvent::Text(text));
        }
        Ok(())
    }

    /// Overwrite the accumulated angle; allowed while running
    pub fn set_current_angle(&mut self, angle: f64) -> Result<(), IndicatorError> {
        if !angle.is_finite() {
            let err = IndicatorError::InvalidRange {
                attribute: "current angle",
                value: angle,
                bound: 0.0,
            };
            tracing::warn!("{}", err);
            return Err(err);
        }
        if self.shared.current_angle() != angle {
            self.shared.set_current_angle(angle);
            self.commit(IndicatorEvent::CurrentAngle(angle));
        }
        Ok(())
    }

    // ============ Getters ============

    pub fn maximum_speed(&self) -> f64 {
        self.state.max_speed
    }

    pub fn minimum_speed(&self) -> f64 {
        self.state.min_speed
    }

    pub fn segment_size(&self) -> i32 {
        self.state.segment_size
    }

    pub fn width(&self) -> i32 {
        self.state.width
    }

    pub fn height(&self) -> i32 {
        self.state.height
    }

    pub fn margin_x(&self) -> i32 {
        self.state.margin_x
    }

    pub fn margin_y(&self) -> i32 {
        self.state.margin_y
    }

    pub fn progress_width(&self) -> i32 {
        self.state.progress_width
    }

    pub fn square(&self) -> bool {
        self.state.square
    }

    pub fn shadow(&self) -> bool {
        self.state.shadow
    }

    pub fn progress_rounded_cap(&self) -> bool {
        self.state.progress_rounded_cap
    }

    pub fn enable_bg(&self) -> bool {
        self.state.enable_bg
    }

    pub fn enable_text(&self) -> bool {
        self.state.enable_text
    }

    pub fn progress_alignment(&self) -> Alignment {
        self.state.progress_alignment
    }

    pub fn bg_color(&self) -> Color {
        self.state.bg_color
    }

    pub fn progress_color(&self) -> Color {
        self.state.progress_color
    }

    pub fn text_color(&self) -> Color {
        self.state.text_color
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn current_angle(&self) -> f64 {
        self.shared.current_angle()
    }
}
