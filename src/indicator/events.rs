//! Indicator change notifications
//!
//! Every accepted, value-changing update emits one `IndicatorEvent` carrying
//! the new value. Events are fanned out to all subscribers over unbounded
//! channels, strictly after the state mutation and before the redraw request.
//!
//! ## Architecture
//! ```text
//! Setter (UI thread) --[mutate]--> IndicatorState
//!                    --[IndicatorEvent]--> EventBus --> subscriber channels
//!                    --[request]--> redraw slot
//! ```

use iced::Color;
use parking_lot::Mutex;

use super::alignment::Alignment;

/// Change notification, one variant per attribute
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorEvent {
    MaximumSpeed(f64),
    MinimumSpeed(f64),
    SegmentSize(i32),
    Width(i32),
    Height(i32),
    /// Both margins set together via `set_margin`
    Margin { x: i32, y: i32 },
    MarginX(i32),
    MarginY(i32),
    ProgressWidth(i32),
    Square(bool),
    Shadow(bool),
    ProgressRoundedCap(bool),
    EnableBg(bool),
    EnableText(bool),
    ProgressAlignment(Alignment),
    BgColor(Color),
    ProgressColor(Color),
    TextColor(Color),
    Text(String),
    CurrentAngle(f64),
    /// Geometry resolver changed the box after a resize
    Geometry {
        width: i32,
        height: i32,
        margin_x: i32,
        margin_y: i32,
    },
    /// Animation driver entered or left the active state
    Running(bool),
}

// ============ Channel Types ============

/// Sender for indicator events (held by the event bus)
pub type IndicatorEventSender = tokio::sync::mpsc::UnboundedSender<IndicatorEvent>;

/// Receiver for indicator events (held by observers)
pub type IndicatorEventReceiver = tokio::sync::mpsc::UnboundedReceiver<IndicatorEvent>;

/// Create a new indicator event channel
pub fn indicator_event_channel() -> (IndicatorEventSender, IndicatorEventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// Fan-out of indicator events to registered observers
///
/// Subscribers whose receiver was dropped are pruned on the next emit.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<IndicatorEventSender>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new observer
    pub fn subscribe(&self) -> IndicatorEventReceiver {
        let (tx, rx) = indicator_event_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Deliver an event to every live subscriber
    pub fn emit(&self, event: IndicatorEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
