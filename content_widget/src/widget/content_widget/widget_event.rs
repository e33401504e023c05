// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display};

/// Emitted when the user clicks one of the actions rendered in the overlay (eg:
/// "explain", "comment", "optimize"). The widget only relays the name, it does not know
/// what any action means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickActionEvent {
    pub action_name: String,
}

impl ClickActionEvent {
    #[must_use]
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
        }
    }
}

/// ```text
///            show()              dispose()
/// Hidden ─────────────► Shown ───────────────► Disposed
///   ▲                     │                       ▲
///   ╰──────── hide() ─────╯                       │
///   ╰─────────────────── dispose() ───────────────╯
/// ```
///
/// [`WidgetLifecycleState::Disposed`] is terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum WidgetLifecycleState {
    #[default]
    Hidden,
    Shown,
    Disposed,
}
