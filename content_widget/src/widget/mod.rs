// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for the entire `widget` module. The logs only show up
/// if a tracing subscriber is installed, eg: via [`crate::try_initialize_logging`].
pub const DEBUG_CONTENT_WIDGET: bool = true;
/// Enable or disable the (very chatty) per line logging in the placement engine.
pub const DEBUG_PLACEMENT_ENGINE: bool = false;

// Attach sources.
pub mod content_widget;
pub mod content_widget_config;
pub mod global_constants;
pub mod host;
pub mod placement;
pub mod visibility_gate;

// Re-export.
pub use content_widget::*;
pub use content_widget_config::*;
pub use global_constants::*;
pub use host::*;
pub use placement::*;
pub use visibility_gate::*;

// Test fixtures, public so that hosts can drive the widget in their own tests.
pub mod test_fixtures;
