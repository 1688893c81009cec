//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on primitives and iced's built-in widgets

pub mod color_swatch;
mod stepper;
pub mod toast;

pub use color_swatch::{color_swatch, next_swatch};
pub use stepper::{step_f64, step_i32, stepper};
pub use toast::{Toast, view_toast};
