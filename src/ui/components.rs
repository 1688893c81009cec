//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod control_panel;
