// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display};

/// Status of the inline chat interaction, owned by the chat layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum InlineChatStatus {
    /// Idle, nothing in flight. The widget resets the chat to this when it is disposed.
    #[default]
    Ready,
    Thinking,
    Done,
    Error,
}

/// Abstraction for the chat service for dependency injection. The widget only ever tells
/// it that the interaction went back to [`InlineChatStatus::Ready`]. This trait is
/// implemented by the real chat layer and by
/// [`crate::test_fixtures::TestInlineChatService`].
///
/// Methods take `&self` since everything runs on the host's single UI thread, and the
/// service is shared with the chat UI. Implementations use interior mutability.
pub trait InlineChatService {
    fn launch_chat_status(&self, status: InlineChatStatus);
}
