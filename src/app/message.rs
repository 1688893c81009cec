//! Application messages

use iced::Size;

use crate::features::Preset;
use crate::indicator::Alignment;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for discarded task results
    Noop,

    // ============ Animation ============
    /// Start the indicator
    Start,
    /// Stop the indicator
    Stop,
    /// Frame tick while the indicator runs
    AnimationTick,

    // ============ Flags ============
    SquareToggled(bool),
    ShadowToggled(bool),
    EnableTextToggled(bool),
    EnableBgToggled(bool),
    RoundedCapToggled(bool),

    // ============ Steppers ============
    SegmentSizeChanged(i32),
    WidthChanged(i32),
    HeightChanged(i32),
    ProgressWidthChanged(i32),
    MarginXChanged(i32),
    MarginYChanged(i32),
    MinimumSpeedChanged(f64),
    MaximumSpeedChanged(f64),

    // ============ Appearance ============
    /// Caption text edited
    TextChanged(String),
    /// Advance the progress color to the next swatch
    CycleProgressColor,
    /// Advance the background color to the next swatch
    CycleBgColor,
    /// Advance the text color to the next swatch
    CycleTextColor,
    AlignmentSelected(Alignment),

    // ============ Preset ============
    /// Preset file read at startup
    PresetLoaded(Preset),

    // ============ Window ============
    /// Window resized
    WindowResized(Size),
    /// Window close requested
    RequestClose,

    // ============ Toast ============
    /// Show error toast notification
    ShowErrorToast(String),
    /// Hide the toast with the given id
    HideToast(u64),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            Self::Start => simple!("Start"),
            Self::Stop => simple!("Stop"),

            Self::SquareToggled(b) => simple!("SquareToggled", "{}", b),
            Self::ShadowToggled(b) => simple!("ShadowToggled", "{}", b),
            Self::EnableTextToggled(b) => simple!("EnableTextToggled", "{}", b),
            Self::EnableBgToggled(b) => simple!("EnableBgToggled", "{}", b),
            Self::RoundedCapToggled(b) => simple!("RoundedCapToggled", "{}", b),

            Self::SegmentSizeChanged(v) => simple!("SegmentSizeChanged", "{}", v),
            Self::WidthChanged(v) => simple!("WidthChanged", "{}", v),
            Self::HeightChanged(v) => simple!("HeightChanged", "{}", v),
            Self::ProgressWidthChanged(v) => simple!("ProgressWidthChanged", "{}", v),
            Self::MarginXChanged(v) => simple!("MarginXChanged", "{}", v),
            Self::MarginYChanged(v) => simple!("MarginYChanged", "{}", v),
            Self::MinimumSpeedChanged(v) => simple!("MinimumSpeedChanged", "{:.1}", v),
            Self::MaximumSpeedChanged(v) => simple!("MaximumSpeedChanged", "{:.1}", v),

            // Caption can be long - only show length
            Self::TextChanged(s) => simple!("TextChanged", "{} chars", s.chars().count()),
            Self::CycleProgressColor => simple!("CycleProgressColor"),
            Self::CycleBgColor => simple!("CycleBgColor"),
            Self::CycleTextColor => simple!("CycleTextColor"),
            Self::AlignmentSelected(a) => simple!("AlignmentSelected", "{}", a),

            Self::PresetLoaded(_) => simple!("PresetLoaded"),

            Self::WindowResized(size) => simple!("WindowResized", "{}x{}", size.width, size.height),
            Self::RequestClose => simple!("RequestClose"),

            Self::ShowErrorToast(_) => simple!("ShowErrorToast"),
            Self::HideToast(id) => simple!("HideToast", "{}", id),
        }
    }
}
