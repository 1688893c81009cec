//! Indicator error types
//!
//! None of these are fatal. Every rejected operation leaves the indicator
//! untouched, logs the reason and hands the error back so the caller can
//! revert whatever it changed optimistically.

/// Errors reported by indicator setters and the animation driver
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// A guarded attribute was modified while the animation is running
    Running { attribute: &'static str },
    /// The value would break an ordering invariant (e.g. max speed < min speed)
    InvalidRange {
        attribute: &'static str,
        value: f64,
        bound: f64,
    },
    /// `start()` was called while the driver is already active
    AlreadyRunning,
    /// The animation thread could not be spawned
    Spawn(String),
}

impl IndicatorError {
    /// Whether this error came from the running-state guard
    pub fn is_running_guard(&self) -> bool {
        matches!(self, IndicatorError::Running { .. })
    }
}

impl std::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorError::Running { attribute } => write!(
                f,
                "Cannot change {} while running. Please stop the indicator before changing the {}.",
                attribute, attribute
            ),
            IndicatorError::InvalidRange {
                attribute,
                value,
                bound,
            } => write!(f, "Invalid {}: {} (bound is {})", attribute, value, bound),
            IndicatorError::AlreadyRunning => write!(f, "Indicator is already running."),
            IndicatorError::Spawn(e) => write!(f, "Failed to spawn animation thread: {}", e),
        }
    }
}

impl std::error::Error for IndicatorError {}
