// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::WidgetStyle;

/// The node the host renders the chat UI into. The widget owns it. The host writes back
/// the vertical offset it rendered the node at into `top`, and the widget moves it from
/// there with [`crate::ContentWidget::offset_top`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayNode {
    /// Rendered vertical offset in pixels, [`None`] until the host has laid it out.
    pub top: Option<i32>,
    pub style: WidgetStyle,
}

impl OverlayNode {
    #[must_use]
    pub fn new(style: WidgetStyle) -> Self { Self { top: None, style } }
}
