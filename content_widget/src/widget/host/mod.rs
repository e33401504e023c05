// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod host_surface;
pub mod inline_chat_service;
pub mod text_model;

// Re-export.
pub use host_surface::*;
pub use inline_chat_service::*;
pub use text_model::*;
