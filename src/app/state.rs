// src/app/state.rs
//! Application state definitions

use iced::Size;
use iced::widget::canvas;

use crate::indicator::{Alignment, Indicator, IndicatorEvent, IndicatorEventReceiver};
use crate::ui::widgets::Toast;

/// Initial window size
pub const WINDOW_SIZE: Size = Size::new(960.0, 640.0);
/// Smallest window the control panel still fits in
pub const MIN_WINDOW_SIZE: Size = Size::new(640.0, 560.0);
/// Fixed width of the control panel on the right
pub const PANEL_WIDTH: f32 = 340.0;
/// Outer padding and gap between the indicator area and the panel
pub const CONTENT_PADDING: f32 = 16.0;

/// Main application state
pub struct App {
    /// The widget under demonstration
    pub indicator: Indicator,
    /// Canvas geometry, cleared whenever the indicator asks for a redraw
    pub indicator_cache: canvas::Cache,
    /// Change notifications from the indicator
    pub indicator_events: IndicatorEventReceiver,
    /// Most recent notification, shown in the panel footer
    pub last_event: Option<IndicatorEvent>,
    pub window_size: Size,
    pub toast: ToastState,
}

/// Toast notification slot
///
/// Each toast gets a fresh id so a stale auto-hide timer cannot dismiss a
/// newer toast.
#[derive(Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Replace the current toast, returning its id
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        self.current = Some(toast);
        self.next_id
    }

    /// Hide the toast if `id` is still the latest one
    pub fn hide(&mut self, id: u64) {
        if id == self.next_id {
            self.current = None;
        }
    }
}

impl App {
    /// Build the state for a window of the given size
    pub fn with_window_size(window_size: Size) -> Self {
        let mut indicator = Indicator::new();
        let indicator_events = indicator.subscribe();

        // Idle indicator: these cannot be rejected
        let _ = indicator.set_square(true);
        let _ = indicator.set_progress_alignment(Alignment::CENTER);

        let (width, height) = indicator_area(window_size);
        indicator.resize(width, height);

        Self {
            indicator,
            indicator_cache: canvas::Cache::new(),
            indicator_events,
            last_event: None,
            window_size,
            toast: ToastState::default(),
        }
    }

    /// Space offered to the indicator for the current window
    pub fn indicator_area(&self) -> (i32, i32) {
        indicator_area(self.window_size)
    }
}

/// Window size minus the control panel and padding
pub fn indicator_area(window_size: Size) -> (i32, i32) {
    let width = window_size.width - PANEL_WIDTH - CONTENT_PADDING * 3.0;
    let height = window_size.height - CONTENT_PADDING * 2.0;
    (width.max(0.0) as i32, height.max(0.0) as i32)
}
