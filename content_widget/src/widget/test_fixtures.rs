// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory stand-ins for the host editor and the chat service, so that the widget can
//! be driven (and asserted on) without a GUI.

use std::{cell::{Cell, RefCell},
          fmt::{Debug, Formatter},
          rc::Rc};

use tokio::sync::broadcast;

use crate::{HostSurface, InlineChatService, InlineChatStatus, LayoutChangedEvent,
            LayoutChangedSubscription, LayoutInfo, LinesTextModel, TextModel};

/// Every call the widget makes into a [`TestHostSurface`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    LayoutContentWidget(String),
    RemoveContentWidget(String),
    SetInlineChatVisible(bool),
}

pub struct TestHostSurface {
    layout_info: Cell<LayoutInfo>,
    maybe_model: RefCell<Option<Rc<dyn TextModel>>>,
    layout_changed_sender: broadcast::Sender<LayoutChangedEvent>,
    inline_chat_visible: Cell<bool>,
    calls: RefCell<Vec<HostCall>>,
}

impl Debug for TestHostSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHostSurface")
            .field("layout_info", &self.layout_info.get())
            .field("has_model", &self.maybe_model.borrow().is_some())
            .field("inline_chat_visible", &self.inline_chat_visible.get())
            .field("calls", &self.calls.borrow())
            .finish()
    }
}

impl TestHostSurface {
    const LAYOUT_CHANGED_CHANNEL_CAPACITY: usize = 16;

    #[must_use]
    pub fn new(layout_info: LayoutInfo, maybe_model: Option<Rc<dyn TextModel>>) -> Self {
        let (layout_changed_sender, _) =
            broadcast::channel(Self::LAYOUT_CHANGED_CHANNEL_CAPACITY);
        Self {
            layout_info: Cell::new(layout_info),
            maybe_model: RefCell::new(maybe_model),
            layout_changed_sender,
            inline_chat_visible: Cell::new(false),
            calls: RefCell::new(vec![]),
        }
    }

    #[must_use]
    pub fn from_text(layout_info: LayoutInfo, text: &str) -> Self {
        Self::new(layout_info, Some(Rc::new(LinesTextModel::from_text(text))))
    }

    /// See [`LinesTextModel::from_columns`].
    #[must_use]
    pub fn from_columns(
        layout_info: LayoutInfo,
        columns: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self::new(
            layout_info,
            Some(Rc::new(LinesTextModel::from_columns(columns))),
        )
    }

    /// No document is attached.
    #[must_use]
    pub fn without_model(layout_info: LayoutInfo) -> Self { Self::new(layout_info, None) }

    pub fn set_model(&self, maybe_model: Option<Rc<dyn TextModel>>) {
        *self.maybe_model.borrow_mut() = maybe_model;
    }

    /// Update the layout and notify every subscriber, like a window resize would.
    pub fn fire_layout_changed(&self, layout_info: LayoutInfo) {
        self.set_layout_info(layout_info);
        self.send_layout_changed(LayoutChangedEvent { layout_info });
    }

    /// Change what [`HostSurface::layout_info`] returns, without notifying anyone.
    pub fn set_layout_info(&self, layout_info: LayoutInfo) { self.layout_info.set(layout_info); }

    /// Notify every subscriber with `event`, leaving the current layout alone. The
    /// payload can be stale, like an event that was queued before a later resize.
    pub fn send_layout_changed(&self, event: LayoutChangedEvent) {
        // No subscribers is not an error here.
        self.layout_changed_sender.send(event).ok();
    }

    #[must_use]
    pub fn layout_changed_receiver_count(&self) -> usize {
        self.layout_changed_sender.receiver_count()
    }

    #[must_use]
    pub fn is_inline_chat_visible(&self) -> bool { self.inline_chat_visible.get() }

    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> { self.calls.borrow().clone() }
}

impl HostSurface for TestHostSurface {
    fn layout_info(&self) -> LayoutInfo { self.layout_info.get() }

    fn model(&self) -> Option<Rc<dyn TextModel>> { self.maybe_model.borrow().clone() }

    fn on_layout_changed(&self) -> LayoutChangedSubscription {
        LayoutChangedSubscription::new(self.layout_changed_sender.subscribe())
    }

    fn layout_content_widget(&self, widget_id: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::LayoutContentWidget(widget_id.to_string()));
    }

    fn remove_content_widget(&self, widget_id: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::RemoveContentWidget(widget_id.to_string()));
    }

    fn set_inline_chat_visible(&self, visible: bool) {
        self.inline_chat_visible.set(visible);
        self.calls
            .borrow_mut()
            .push(HostCall::SetInlineChatVisible(visible));
    }
}

#[derive(Debug, Default)]
pub struct TestInlineChatService {
    statuses: RefCell<Vec<InlineChatStatus>>,
}

impl TestInlineChatService {
    /// Every status launched so far, oldest first.
    #[must_use]
    pub fn statuses(&self) -> Vec<InlineChatStatus> { self.statuses.borrow().clone() }
}

impl InlineChatService for TestInlineChatService {
    fn launch_chat_status(&self, status: InlineChatStatus) {
        self.statuses.borrow_mut().push(status);
    }
}

/// A [`TextModel`] that remembers which lines it was asked about. Unlike
/// [`LinesTextModel::from_columns`], an empty list really has 0 lines.
#[derive(Debug, Default)]
pub struct RecordingTextModel {
    columns: Vec<usize>,
    queried_lines: RefCell<Vec<usize>>,
}

impl RecordingTextModel {
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            queried_lines: RefCell::new(vec![]),
        }
    }

    #[must_use]
    pub fn queried_lines(&self) -> Vec<usize> { self.queried_lines.borrow().clone() }
}

impl TextModel for RecordingTextModel {
    fn line_count(&self) -> usize { self.columns.len() }

    fn last_non_whitespace_column(&self, line: usize) -> usize {
        self.queried_lines.borrow_mut().push(line);
        line.checked_sub(1)
            .and_then(|index| self.columns.get(index))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_fire_layout_changed_reaches_subscribers() {
        let host = TestHostSurface::without_model(LayoutInfo::default());
        host.fire_layout_changed(LayoutInfo::new(1.0, 0.0, 0.0));

        let mut subscription = host.on_layout_changed();
        assert_eq2!(host.layout_changed_receiver_count(), 1);
        host.fire_layout_changed(LayoutInfo::new(2.0, 0.0, 0.0));

        let batch = subscription.drain();
        assert_eq2!(batch.events.len(), 1);
        assert_eq2!(batch.events[0].layout_info.total_width, 2.0);
        assert_eq2!(host.layout_info().total_width, 2.0);
    }

    #[test]
    fn test_send_layout_changed_keeps_current_layout() {
        let host = TestHostSurface::without_model(LayoutInfo::new(1.0, 0.0, 0.0));
        let mut subscription = host.on_layout_changed();

        host.send_layout_changed(LayoutChangedEvent {
            layout_info: LayoutInfo::new(2.0, 0.0, 0.0),
        });
        host.set_layout_info(LayoutInfo::new(3.0, 0.0, 0.0));

        assert_eq2!(subscription.drain().events[0].layout_info.total_width, 2.0);
        assert_eq2!(host.layout_info().total_width, 3.0);
    }
}
