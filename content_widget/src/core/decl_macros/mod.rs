// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources. The macros are `#[macro_export]`ed, so they live at the crate root.
pub mod macros;
