// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words minimap

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::TryRecvError};

use super::TextModel;

/// Snapshot of the editor's horizontal layout metrics. All widths are in the same unit
/// (pixels for a GUI host, cells for a terminal host).
///
/// ```text
/// ╭─────────┬──────────────────────────────────┬─────────╮
/// │ gutter  │ visible content area             │ minimap │
/// ╰─────────┴──────────────────────────────────┴─────────╯
/// ├─────────┤                                  ├─────────┤
/// content_left_offset                          minimap_width
/// ├──────────────────── total_width ─────────────────────┤
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub total_width: f64,
    pub content_left_offset: f64,
    pub minimap_width: f64,
}

impl LayoutInfo {
    #[must_use]
    pub const fn new(total_width: f64, content_left_offset: f64, minimap_width: f64) -> Self {
        Self {
            total_width,
            content_left_offset,
            minimap_width,
        }
    }

    /// Width left for content once the gutter and the minimap are taken out.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.total_width - self.content_left_offset - self.minimap_width
    }
}

/// Fired by the host every time its layout changes (window resize, minimap toggled,
/// gutter grew, etc).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutChangedEvent {
    pub layout_info: LayoutInfo,
}

/// Handle returned by [`HostSurface::on_layout_changed`]. Dropping it unsubscribes.
///
/// The host owns the [`broadcast::Sender`] side. Since everything runs on the host's UI
/// thread, the receiving side is drained synchronously with
/// [`LayoutChangedSubscription::drain`] and never awaited.
#[derive(Debug)]
pub struct LayoutChangedSubscription {
    receiver: broadcast::Receiver<LayoutChangedEvent>,
}

/// What [`LayoutChangedSubscription::drain`] found. When the receiver fell behind, the
/// channel dropped the oldest `skipped` events, and only the newer ones are in `events`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LayoutChangedBatch {
    pub events: Vec<LayoutChangedEvent>,
    pub skipped: u64,
}

impl LayoutChangedBatch {
    /// `true` if the host's layout did not change since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.events.is_empty() && self.skipped == 0 }

    #[must_use]
    pub fn has_lagged(&self) -> bool { self.skipped > 0 }
}

impl LayoutChangedSubscription {
    #[must_use]
    pub fn new(receiver: broadcast::Receiver<LayoutChangedEvent>) -> Self {
        Self { receiver }
    }

    /// Collects every event that arrived since the last call, oldest first, and counts
    /// the ones the channel dropped because this receiver lagged behind.
    pub fn drain(&mut self) -> LayoutChangedBatch {
        let mut return_it = LayoutChangedBatch::default();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return_it.events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    return_it.skipped = return_it.skipped.saturating_add(skipped);
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "LayoutChangedSubscription lagged",
                        skipped = %skipped
                    );
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        return_it
    }
}

/// Everything the widget consumes from the editor it lives in. The widget holds the host
/// in an [`Rc`] and only reads from it, except for the content widget hooks and the one
/// "inline chat visible" context flag.
///
/// Methods take `&self` because the host is shared by the whole UI thread.
/// Implementations use interior mutability where they need to record things.
pub trait HostSurface {
    /// The layout right now. A [`LayoutChangedEvent`] only says that this changed, the
    /// widget reads the current value from here.
    fn layout_info(&self) -> LayoutInfo;

    /// Read only snapshot of the document, [`None`] if no document is attached.
    fn model(&self) -> Option<Rc<dyn TextModel>>;

    /// Subscribe to layout changes.
    fn on_layout_changed(&self) -> LayoutChangedSubscription;

    /// Ask the host to (re)position the widget with this id. The host calls back into
    /// `get_position()` to find out where.
    fn layout_content_widget(&self, widget_id: &str);

    /// Ask the host to remove the widget with this id, and free whatever it allocated for
    /// it.
    fn remove_content_widget(&self, widget_id: &str);

    /// Set the context key that tells the rest of the editor (keybindings, menus) that
    /// the inline chat is showing.
    fn set_inline_chat_visible(&self, visible: bool);
}
