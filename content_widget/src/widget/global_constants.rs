// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words minimap

/// Stable identifier that the host uses to key / track the widget.
pub const CONTENT_WIDGET_ID: &str = "AI-Inline-Chat-Content-Widget";

/// The overlay is not shown if the editor area is narrower than this. The gutter on the
/// left (line numbers, etc.) and the minimap on the right are not counted. Same unit as
/// [`crate::LayoutInfo`].
pub const MIN_VISIBLE_WIDTH: f64 = 270.0;

/// If the two lines next to the cursor line (above it when the cursor is at the start of
/// the selection, below it when at the end) don't reach further right than the cursor
/// line plus this many columns, then the widget is placed right there without scanning
/// the selection.
pub const SHORTCUT_COLUMN_THRESHOLD: usize = 10;

/// Capacity of the broadcast channel that carries click action events.
pub const CLICK_ACTION_CHANNEL_CAPACITY: usize = 16;

/// Styling applied to the overlay node.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefaultWidgetStyle {
    PaddingPx = 6,
    PaddingRightPx = 50,
    ZIndex = 999,
}
