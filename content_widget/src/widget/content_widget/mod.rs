// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod base_content_widget;
pub mod content_widget_impl;
pub mod overlay_node;
pub mod widget_event;
pub mod widget_options;

// Re-export.
pub use base_content_widget::*;
pub use content_widget_impl::*;
pub use overlay_node::*;
pub use widget_event::*;
pub use widget_options::*;
