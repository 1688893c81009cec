//! Circular loading indicator
//!
//! A stateful indicator that owns its parameters, a background animation
//! thread, a geometry resolver and a renderer.
//!
//! # Design
//!
//! - **Parameter store** (`params`): guarded setters, pure getters
//! - **Animation driver** (`driver`): named thread stepping the angle every 10 ms
//! - **Geometry resolver** (`geometry`): available size → box size and margins
//! - **Renderer** (`render`): pure draw-call sequence against a `Painter`
//!
//! The UI thread owns `IndicatorState`. The animation thread writes only the
//! angle and the redraw slot in `AnimationShared`; all other mutation is
//! rejected while running, which keeps the two sides from tearing.

pub mod alignment;
pub mod driver;
pub mod error;
pub mod events;
pub mod geometry;
pub mod params;
pub mod render;

use std::sync::Arc;

pub use alignment::Alignment;
pub use error::IndicatorError;
pub use events::{IndicatorEvent, IndicatorEventReceiver};
pub use params::IndicatorState;
pub use render::{ArcStroke, CapStyle, Painter, RenderView};

use driver::{AnimationDriver, AnimationShared};
use events::EventBus;

/// The loading indicator
pub struct Indicator {
    state: IndicatorState,
    shared: Arc<AnimationShared>,
    driver: AnimationDriver,
    events: EventBus,
}

impl std::fmt::Debug for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indicator")
            .field("state", &self.state)
            .field("running", &self.is_running())
            .field("current_angle", &self.current_angle())
            .finish()
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator {
    /// Create an idle indicator with the documented defaults
    pub fn new() -> Self {
        let shared = Arc::new(AnimationShared::new());
        Self {
            state: IndicatorState::default(),
            driver: AnimationDriver::new(Arc::clone(&shared)),
            shared,
            events: EventBus::new(),
        }
    }

    /// Register an observer for change notifications
    pub fn subscribe(&self) -> IndicatorEventReceiver {
        self.events.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Start the animation thread
    ///
    /// Returns `IndicatorError::AlreadyRunning` (non-fatal) when active.
    pub fn start(&mut self) -> Result<(), IndicatorError> {
        self.driver
            .start(self.state.min_speed, self.state.max_speed)?;
        self.events.emit(IndicatorEvent::Running(true));
        Ok(())
    }

    /// Stop the animation thread and wait for it to exit
    pub fn stop(&mut self) {
        let was_running = self.is_running();
        self.driver.stop();
        if was_running {
            self.events.emit(IndicatorEvent::Running(false));
        }
    }

    /// Consume the pending redraw request
    ///
    /// Called from the UI thread's frame loop; multiple requests made since
    /// the last call collapse into one.
    pub fn take_redraw(&self) -> bool {
        self.shared.take_redraw()
    }

    /// Last size offered by the host
    pub fn bounds(&self) -> (i32, i32) {
        self.state.bounds
    }

    /// Host resized: recompute the box and request a redraw
    pub fn resize(&mut self, width: i32, height: i32) {
        self.state.bounds = (width, height);
        self.relayout();
        self.shared.request_redraw();
    }

    /// Re-run the geometry resolver against the current bounds
    fn relayout(&mut self) {
        let before = self.state.layout();
        let after = geometry::resolve(
            before,
            self.state.bounds,
            self.state.square,
            self.state.progress_alignment,
        );
        if after != before {
            tracing::debug!(
                "Indicator geometry {}x{} at ({}, {})",
                after.width,
                after.height,
                after.margin_x,
                after.margin_y
            );
            self.state.apply_layout(after);
            self.events.emit(IndicatorEvent::Geometry {
                width: after.width,
                height: after.height,
                margin_x: after.margin_x,
                margin_y: after.margin_y,
            });
        }
    }

    /// Snapshot for the renderer
    pub fn render_view(&self) -> RenderView<'_> {
        RenderView {
            width: self.state.width,
            height: self.state.height,
            margin_x: self.state.margin_x,
            margin_y: self.state.margin_y,
            progress_width: self.state.progress_width,
            segment_size: self.state.segment_size,
            current_angle: self.shared.current_angle(),
            rounded_cap: self.state.progress_rounded_cap,
            enable_bg: self.state.enable_bg,
            enable_text: self.state.enable_text,
            bg_color: self.state.bg_color,
            progress_color: self.state.progress_color,
            text_color: self.state.text_color,
            text: &self.state.text,
        }
    }

    /// Paint the current state onto `painter`
    pub fn draw(&self, painter: &mut impl Painter) {
        render::render(&self.render_view(), painter);
    }
}

impl Drop for Indicator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use iced::Color;

    use super::render::tests::{DrawCall, RecordingPainter};
    use super::*;

    fn drain(rx: &mut IndicatorEventReceiver) -> Vec<IndicatorEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    mod property_running_guard {
        use super::*;

        #[test]
        fn guarded_setters_rejected_while_running() {
            let mut indicator = Indicator::new();
            indicator.set_enable_text(true).unwrap();
            let before = indicator.state.clone();
            let mut rx = indicator.subscribe();

            indicator.start().unwrap();
            assert_eq!(drain(&mut rx), vec![IndicatorEvent::Running(true)]);

            let results = [
                indicator.set_maximum_speed(5.0),
                indicator.set_minimum_speed(0.5),
                indicator.set_segment_size(90),
                indicator.set_width(50),
                indicator.set_height(50),
                indicator.set_margin(3, 4),
                indicator.set_margin_x(3),
                indicator.set_margin_y(4),
                indicator.set_progress_width(2),
                indicator.set_square(true),
                indicator.set_progress_rounded_cap(false),
                indicator.set_enable_bg(false),
                indicator.set_enable_text(false),
                indicator.set_progress_alignment(Alignment::LEFT),
                indicator.set_bg_color(Color::WHITE),
                indicator.set_progress_color(Color::WHITE),
                indicator.set_text_color(Color::WHITE),
                indicator.set_text("changed"),
            ];
            indicator.stop();

            for result in results {
                assert!(
                    matches!(result, Err(IndicatorError::Running { .. })),
                    "expected running guard, got {:?}",
                    result
                );
            }
            assert_eq!(indicator.state, before, "no field may change");
            assert_eq!(drain(&mut rx), vec![IndicatorEvent::Running(false)]);
        }

        #[test]
        fn hidden_colors_and_shadow_allowed_while_running() {
            let mut indicator = Indicator::new();
            indicator.set_enable_bg(false).unwrap();
            let mut rx = indicator.subscribe();

            indicator.start().unwrap();
            let red = Color::from_rgb(1.0, 0.0, 0.0);
            let shadow = indicator.set_shadow(true);
            let bg = indicator.set_bg_color(red);
            let text_color = indicator.set_text_color(red);
            let text = indicator.set_text("Still loading");
            indicator.stop();

            assert!(shadow.is_ok() && bg.is_ok() && text_color.is_ok() && text.is_ok());
            assert!(indicator.shadow());
            assert_eq!(indicator.bg_color(), red);
            assert_eq!(indicator.text_color(), red);
            assert_eq!(indicator.text(), "Still loading");
            assert!(drain(&mut rx).contains(&IndicatorEvent::Shadow(true)));
        }

        #[test]
        fn redundant_start_is_reported() {
            let mut indicator = Indicator::new();
            indicator.start().unwrap();
            let second = indicator.start();
            indicator.stop();
            assert_eq!(second, Err(IndicatorError::AlreadyRunning));
        }

        #[test]
        fn setters_accepted_again_after_stop() {
            let mut indicator = Indicator::new();
            indicator.start().unwrap();
            indicator.stop();
            assert!(indicator.set_segment_size(45).is_ok());
            assert_eq!(indicator.segment_size(), 45);
        }
    }

    mod property_animation {
        use super::*;

        #[test]
        fn no_angle_change_after_stop() {
            let mut indicator = Indicator::new();
            indicator.start().unwrap();
            indicator.stop();

            let snapshot = indicator.current_angle();
            thread::sleep(Duration::from_millis(50));
            assert_eq!(indicator.current_angle(), snapshot);
        }

        #[test]
        fn running_indicator_requests_redraws() {
            let mut indicator = Indicator::new();
            indicator.take_redraw();
            indicator.start().unwrap();
            thread::sleep(Duration::from_millis(50));
            let angle = indicator.current_angle();
            indicator.stop();

            assert!(angle > 0.0);
            assert!(indicator.take_redraw());
        }

        #[test]
        fn current_angle_adjustable_while_running() {
            let mut indicator = Indicator::new();
            let mut rx = indicator.subscribe();
            indicator.start().unwrap();
            let result = indicator.set_current_angle(720.0);
            indicator.stop();

            assert!(result.is_ok());
            assert!(drain(&mut rx).contains(&IndicatorEvent::CurrentAngle(720.0)));
        }

        #[test]
        fn drop_joins_thread() {
            let mut indicator = Indicator::new();
            indicator.start().unwrap();
            let shared = Arc::clone(&indicator.shared);
            drop(indicator);

            assert!(!shared.is_running());
            let snapshot = shared.current_angle();
            thread::sleep(Duration::from_millis(30));
            assert_eq!(shared.current_angle(), snapshot);
        }
    }

    mod property_resize {
        use super::*;

        #[test]
        fn square_center_resize() {
            let mut indicator = Indicator::new();
            indicator.set_square(true).unwrap();
            indicator.resize(300, 200);

            assert_eq!((indicator.width(), indicator.height()), (200, 200));
            assert_eq!((indicator.margin_x(), indicator.margin_y()), (50, 0));
        }

        #[test]
        fn non_square_shrink() {
            let mut indicator = Indicator::new();
            indicator.resize(300, 300);
            indicator.resize(150, 150);

            assert_eq!((indicator.width(), indicator.height()), (150, 150));
            assert_eq!((indicator.margin_x(), indicator.margin_y()), (0, 0));
        }

        #[test]
        fn resize_always_requests_redraw() {
            let mut indicator = Indicator::new();
            indicator.take_redraw();
            indicator.resize(200, 200);
            assert!(indicator.take_redraw());
        }

        #[test]
        fn resize_allowed_while_running() {
            let mut indicator = Indicator::new();
            indicator.start().unwrap();
            indicator.resize(400, 300);
            indicator.stop();
            assert_eq!((indicator.width(), indicator.height()), (400, 300));
        }

        #[test]
        fn extreme_margin_resizes_without_panic() {
            let mut indicator = Indicator::new();
            indicator.set_square(true).unwrap();
            indicator.set_margin_x(i32::MAX / 2 + 1).unwrap();
            indicator.resize(300, 300);

            assert_eq!((indicator.width(), indicator.height()), (300, 300));
            assert_eq!((indicator.margin_x(), indicator.margin_y()), (0, 0));
        }

        #[test]
        fn extreme_stroke_and_margin_draw_without_panic() {
            let mut indicator = Indicator::new();
            indicator.set_progress_width(-10).unwrap();
            indicator.set_margin_x(i32::MAX).unwrap();

            let mut painter = RecordingPainter::default();
            indicator.draw(&mut painter);
            assert_eq!(painter.calls.len(), 3);
        }
    }

    mod property_render {
        use super::*;

        #[test]
        fn text_only_scenario() {
            let mut indicator = Indicator::new();
            indicator.set_enable_bg(false).unwrap();
            indicator.set_enable_text(true).unwrap();
            indicator.set_text("X").unwrap();

            let mut painter = RecordingPainter::default();
            indicator.draw(&mut painter);

            let kinds: Vec<&str> = painter
                .calls
                .iter()
                .map(|call| match call {
                    DrawCall::Rect(_) => "rect",
                    DrawCall::Arc(_) => "arc",
                    DrawCall::Text { .. } => "text",
                })
                .collect();
            assert_eq!(kinds, vec!["rect", "text", "arc"]);
        }

        #[test]
        fn progress_arc_follows_angle() {
            let mut indicator = Indicator::new();
            indicator.set_current_angle(100.0).unwrap();

            let mut painter = RecordingPainter::default();
            indicator.draw(&mut painter);

            match painter.calls.last() {
                Some(DrawCall::Arc(arc)) => assert_eq!(arc.start_degrees, 10.0),
                other => panic!("expected progress arc, got {:?}", other),
            }
        }
    }
}
