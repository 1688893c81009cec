//! Animation driver
//!
//! Runs the progress loop in a dedicated thread. The thread only ever writes
//! the accumulated angle and raises the single-slot redraw flag; painting
//! happens on the UI thread when it consumes that flag.
//!
//! ## Architecture
//! ```text
//! UI Thread  --[start/stop]--> AnimationDriver --spawn/join--> "loading-indicator" thread
//! UI Thread  <--[redraw_pending]-- loading thread (coalesced, fire-and-forget)
//! UI Thread  <--[current_angle]--- loading thread (atomic f64 bits)
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::error::IndicatorError;

/// Interval between two progress steps
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Offset so that angle 0 sits at 12 o'clock
pub const ANGLE_OFFSET: f64 = 270.0;

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Compute the angle after one progress step
///
/// The speed follows a normalized sine of the current position, so the arc
/// eases between `min_speed` and `max_speed` instead of rotating uniformly.
pub fn next_angle(current: f64, min_speed: f64, max_speed: f64) -> f64 {
    let angle = (current + ANGLE_OFFSET).rem_euclid(FULL_TURN);
    let speed_factor = (angle.to_radians().sin() + 1.0) / 2.0; // [0, 1]
    let dynamic_speed = min_speed + speed_factor * (max_speed - min_speed);
    current + dynamic_speed
}

/// State shared between the UI thread and the animation thread
#[derive(Debug, Default)]
pub struct AnimationShared {
    running: AtomicBool,
    current_angle: AtomicU64,
    redraw_pending: AtomicBool,
}

impl AnimationShared {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Release);
    }

    /// Accumulated angle in degrees (unbounded)
    pub fn current_angle(&self) -> f64 {
        f64::from_bits(self.current_angle.load(Ordering::Acquire))
    }

    pub fn set_current_angle(&self, angle: f64) {
        self.current_angle.store(angle.to_bits(), Ordering::Release);
    }

    /// Mark the surface as needing a repaint
    ///
    /// Multiple requests before the next consume collapse into one.
    pub fn request_redraw(&self) {
        self.redraw_pending.store(true, Ordering::Release);
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw(&self) -> bool {
        self.redraw_pending.swap(false, Ordering::AcqRel)
    }
}

/// Owner of the animation thread
#[derive(Debug)]
pub struct AnimationDriver {
    shared: Arc<AnimationShared>,
    thread_handle: Option<JoinHandle<()>>,
}

impl AnimationDriver {
    pub fn new(shared: Arc<AnimationShared>) -> Self {
        Self {
            shared,
            thread_handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Spawn the animation thread with a snapshot of the speed bounds
    ///
    /// Speed setters are rejected while running, so the snapshot stays valid
    /// for the whole active period.
    pub fn start(&mut self, min_speed: f64, max_speed: f64) -> Result<(), IndicatorError> {
        if self.shared.is_running() {
            tracing::debug!("Indicator is already running");
            return Err(IndicatorError::AlreadyRunning);
        }

        // Reap a thread left over from a previous period
        self.join();

        self.shared.set_running(true);
        let shared = Arc::clone(&self.shared);

        let spawned = thread::Builder::new()
            .name("loading-indicator".to_string())
            .spawn(move || animation_thread_main(shared, min_speed, max_speed));

        match spawned {
            Ok(handle) => {
                self.thread_handle = Some(handle);
                tracing::info!(
                    "Animation started (speed {:.2}..{:.2})",
                    min_speed,
                    max_speed
                );
                Ok(())
            }
            Err(e) => {
                self.shared.set_running(false);
                tracing::error!("Failed to spawn animation thread: {}", e);
                Err(IndicatorError::Spawn(e.to_string()))
            }
        }
    }

    /// Clear the running flag and wait for the thread to exit
    ///
    /// No progress step runs after this returns.
    pub fn stop(&mut self) {
        let was_running = self.shared.is_running();
        self.shared.set_running(false);
        self.join();
        if was_running {
            tracing::info!("Animation stopped at {:.1}°", self.shared.current_angle());
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                tracing::error!("Animation thread panicked");
            }
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn animation_thread_main(shared: Arc<AnimationShared>, min_speed: f64, max_speed: f64) {
    while shared.is_running() {
        let angle = next_angle(shared.current_angle(), min_speed, max_speed);
        shared.set_current_angle(angle);
        shared.request_redraw();
        thread::sleep(TICK_INTERVAL);
    }
}
