//! UI module for the loading indicator demo
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Canvas programs and other low-level elements
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod primitives;
pub mod theme;
pub mod widgets;
