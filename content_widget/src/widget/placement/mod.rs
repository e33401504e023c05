// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod line_metrics;
pub mod placement_engine;
pub mod side_preference;

// Re-export.
pub use line_metrics::*;
pub use placement_engine::*;
pub use side_preference::*;
