// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use tokio::sync::broadcast;

use super::{BaseContentWidget, ClickActionEvent, OverlayNode, ShowContentOptions,
            WidgetLifecycleState};
use crate::{CLICK_ACTION_CHANNEL_CAPACITY, CONTENT_WIDGET_ID, ContentWidgetConfig,
            DEBUG_CONTENT_WIDGET, HostSurface, InlineChatService, InlineChatStatus,
            LayoutChangedSubscription, PlacementEngine,
            VisibilityGate, WidgetPosition};

/// The inline chat overlay. It composes a [`BaseContentWidget`] with the
/// [`PlacementEngine`] (to anchor next to a selection) and the [`VisibilityGate`] (to tear
/// itself down when the editor gets too narrow).
///
/// Everything runs on the host's UI thread, so there is no locking. Once
/// [`ContentWidget::dispose`] has run, every other method is a no-op and
/// [`ContentWidget::get_position`] returns [`None`].
///
/// The host forwards its events to the widget:
/// - Layout changes arrive on the subscription taken in [`ContentWidget::new`], and are
///   processed by [`ContentWidget::poll_layout_changes`].
/// - Clicks in the rendered chat UI are relayed with
///   [`ContentWidget::emit_click_action`], and closing it with
///   [`ContentWidget::request_close`].
pub struct ContentWidget<H: HostSurface, S: InlineChatService> {
    base: BaseContentWidget<H>,
    chat_service: Rc<S>,
    config: ContentWidgetConfig,
    gate: VisibilityGate,
    state: WidgetLifecycleState,
    /// Captured on the first [`ContentWidget::offset_top`] call.
    maybe_origin_top_offset: Option<i32>,
    maybe_layout_subscription: Option<LayoutChangedSubscription>,
    maybe_click_action_sender: Option<broadcast::Sender<ClickActionEvent>>,
}

impl<H: HostSurface, S: InlineChatService> std::fmt::Debug for ContentWidget<H, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentWidget")
            .field("id", &self.base.id())
            .field("state", &self.state)
            .field("options", &self.base.options())
            .field("node", self.base.get_dom_node())
            .field("origin_top_offset", &self.maybe_origin_top_offset)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<H: HostSurface, S: InlineChatService> ContentWidget<H, S> {
    #[must_use]
    pub fn new(host: Rc<H>, chat_service: Rc<S>) -> Self {
        Self::new_with_config(host, chat_service, ContentWidgetConfig::default())
    }

    /// Subscribes to the host's layout changes right away, so no change is missed
    /// between construction and the first [`Self::show`].
    #[must_use]
    pub fn new_with_config(
        host: Rc<H>,
        chat_service: Rc<S>,
        config: ContentWidgetConfig,
    ) -> Self {
        let layout_subscription = host.on_layout_changed();
        let (click_action_sender, _) = broadcast::channel(CLICK_ACTION_CHANNEL_CAPACITY);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget::new",
                id = %CONTENT_WIDGET_ID,
                config = ?config
            );
        });

        Self {
            base: BaseContentWidget::new(CONTENT_WIDGET_ID, host, config.style),
            chat_service,
            config,
            gate: VisibilityGate::new(config.min_visible_width),
            state: WidgetLifecycleState::Hidden,
            maybe_origin_top_offset: None,
            maybe_layout_subscription: Some(layout_subscription),
            maybe_click_action_sender: Some(click_action_sender),
        }
    }

    /// Always [`CONTENT_WIDGET_ID`], even after dispose.
    #[must_use]
    pub fn id(&self) -> &'static str { self.base.id() }

    #[must_use]
    pub fn lifecycle_state(&self) -> WidgetLifecycleState { self.state }

    #[must_use]
    pub fn is_disposed(&self) -> bool { self.state == WidgetLifecycleState::Disposed }

    #[must_use]
    pub fn config(&self) -> &ContentWidgetConfig { &self.config }

    /// The origin that [`Self::offset_top`] is relative to. `0` until the first call.
    #[must_use]
    pub fn origin_top_offset(&self) -> i32 { self.maybe_origin_top_offset.unwrap_or(0) }

    /// Host level show first, then tell the rest of the editor that the inline chat is
    /// visible.
    pub fn show(&mut self, options: ShowContentOptions) {
        if self.ignore_when_disposed("show") {
            return;
        }
        self.base.show(options);
        self.base.host().set_inline_chat_visible(true);
        self.state = WidgetLifecycleState::Shown;
    }

    /// Clear the "inline chat visible" flag first, then host level hide.
    pub fn hide(&mut self) {
        if self.ignore_when_disposed("hide") {
            return;
        }
        self.base.host().set_inline_chat_visible(false);
        self.base.hide();
        self.state = WidgetLifecycleState::Hidden;
    }

    /// Replace the options without asking the host to lay the widget out again.
    pub fn set_options(&mut self, options: ShowContentOptions) {
        if self.ignore_when_disposed("set_options") {
            return;
        }
        self.base.set_options(options);
    }

    /// Called by the host when it lays the widget out.
    ///
    /// 1. An explicit [`ShowContentOptions::position`] wins, see
    ///    [`BaseContentWidget::get_position`].
    /// 2. Else the [`PlacementEngine`] runs on [`ShowContentOptions::selection`].
    /// 3. [`None`] when there are no options, no selection, no document, or the widget
    ///    is disposed.
    #[must_use]
    pub fn get_position(&self) -> Option<WidgetPosition> {
        if self.ignore_when_disposed("get_position") {
            return None;
        }

        if let Some(position) = self.base.get_position() {
            return Some(position);
        }

        let selection = self.base.options()?.selection?;
        let model = self.base.host().model()?;
        let position = PlacementEngine::try_new(Some(&*model))?
            .with_shortcut_column_threshold(self.config.shortcut_column_threshold)
            .compute_position(&selection);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget::get_position",
                selection = ?selection,
                position = %position
            );
        });

        Some(position)
    }

    /// Move the rendered node vertically by `delta` pixels from where it was first
    /// rendered. Calls are not cumulative: `offset_top(5)` then `offset_top(8)` leaves
    /// the node at `origin + 8`.
    ///
    /// The origin is read from the node on the first call. If the host hasn't rendered
    /// the node yet, the origin is `0`.
    pub fn offset_top(&mut self, delta: i32) {
        if self.ignore_when_disposed("offset_top") {
            return;
        }

        let node = self.base.get_dom_node_mut();
        let origin = *self
            .maybe_origin_top_offset
            .get_or_insert_with(|| node.top.unwrap_or(0));
        node.top = Some(origin.saturating_add(delta));

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget::offset_top",
                origin = %origin,
                delta = %delta,
                top = ?node.top
            );
        });
    }

    /// The overlay node, with the configured padding and z-index applied.
    #[must_use]
    pub fn get_dom_node(&self) -> &OverlayNode { self.base.get_dom_node() }

    /// Lets the host write back the vertical offset it rendered the node at.
    pub fn get_dom_node_mut(&mut self) -> &mut OverlayNode { self.base.get_dom_node_mut() }

    /// Reset the chat to [`InlineChatStatus::Ready`], then release the host resources,
    /// stop listening to layout changes, and close the click action channel.
    ///
    /// Safe to call more than once, only the first call does anything.
    pub fn dispose(&mut self) {
        if self.ignore_when_disposed("dispose") {
            return;
        }
        self.state = WidgetLifecycleState::Disposed;

        self.chat_service
            .launch_chat_status(InlineChatStatus::Ready);
        self.base.dispose();
        self.maybe_layout_subscription = None;
        self.maybe_click_action_sender = None;

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "ContentWidget::dispose", id = %self.id());
        });
    }

    /// Run the [`VisibilityGate`] on the host's current [`HostSurface::layout_info`],
    /// disposing the widget if the editor is now too narrow. Returns `true` if the
    /// widget got disposed.
    pub fn handle_layout_changed(&mut self) -> bool {
        if self.ignore_when_disposed("handle_layout_changed") {
            return false;
        }
        let layout_info = self.base.host().layout_info();
        let is_out_of_area = self.gate.is_out_of_area(&layout_info);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget::handle_layout_changed",
                visible_width = %layout_info.visible_width(),
                is_out_of_area = %is_out_of_area
            );
        });

        if is_out_of_area {
            self.dispose();
        }
        is_out_of_area
    }

    /// If the host fired any layout change since the last call, run
    /// [`Self::handle_layout_changed`] once. The payloads are not looked at, so events
    /// the subscription dropped after lagging behind still count. Returns `true` if the
    /// widget got disposed.
    pub fn poll_layout_changes(&mut self) -> bool {
        let Some(subscription) = self.maybe_layout_subscription.as_mut() else {
            return false;
        };
        let batch = subscription.drain();
        if batch.is_empty() {
            return false;
        }

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget::poll_layout_changes",
                events = %batch.events.len(),
                skipped = %batch.skipped
            );
        });

        self.handle_layout_changed()
    }

    /// The "on close" hook of the rendered chat UI. Closing the chat disposes the
    /// widget.
    pub fn request_close(&mut self) {
        DEBUG_CONTENT_WIDGET.then(|| {
            tracing::debug!(message = "ContentWidget::request_close");
        });
        self.dispose();
    }

    /// Relay a click on an action in the rendered chat UI to every subscriber. Returns
    /// how many subscribers got it (`0` when there are none, or after dispose).
    pub fn emit_click_action(&self, action_name: impl Into<String>) -> usize {
        let Some(sender) = self.maybe_click_action_sender.as_ref() else {
            self.ignore_when_disposed("emit_click_action");
            return 0;
        };
        let event = ClickActionEvent::new(action_name);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "ContentWidget::emit_click_action", event = ?event);
        });

        sender.send(event).unwrap_or(0)
    }

    /// Each subscriber gets every click that happens after it subscribed. The channel is
    /// closed when the widget is disposed. A receiver taken after that is already
    /// closed.
    #[must_use]
    pub fn subscribe_click_actions(&self) -> broadcast::Receiver<ClickActionEvent> {
        match self.maybe_click_action_sender.as_ref() {
            Some(sender) => sender.subscribe(),
            None => broadcast::channel(1).1,
        }
    }

    fn ignore_when_disposed(&self, operation: &str) -> bool {
        let is_disposed = self.is_disposed();
        (is_disposed && DEBUG_CONTENT_WIDGET).then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ContentWidget is disposed, ignoring call",
                operation = %operation
            );
        });
        is_disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutChangedEvent, LayoutInfo, Position, Selection, Side, SidePreference,
                assert_eq2,
                test_fixtures::{HostCall, TestHostSurface, TestInlineChatService}};

    type TestWidget = ContentWidget<TestHostSurface, TestInlineChatService>;

    fn make_widget(
        columns: impl IntoIterator<Item = usize>,
    ) -> (Rc<TestHostSurface>, Rc<TestInlineChatService>, TestWidget) {
        let host = Rc::new(TestHostSurface::from_columns(WIDE, columns));
        let chat = Rc::new(TestInlineChatService::default());
        let widget = ContentWidget::new(Rc::clone(&host), Rc::clone(&chat));
        (host, chat, widget)
    }

    /// Visible width is 250.
    const NARROW: LayoutInfo = LayoutInfo::new(800.0, 50.0, 500.0);
    /// Visible width is 650.
    const WIDE: LayoutInfo = LayoutInfo::new(800.0, 50.0, 100.0);

    #[test]
    fn test_show_then_flag_and_hide_in_reverse() {
        let (host, _chat, mut widget) = make_widget([4, 8, 12]);

        widget.show(ShowContentOptions::default());
        assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Shown);
        assert!(host.is_inline_chat_visible());

        widget.hide();
        assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Hidden);
        assert!(!host.is_inline_chat_visible());

        let id = CONTENT_WIDGET_ID.to_string();
        assert_eq2!(
            host.calls(),
            vec![
                HostCall::LayoutContentWidget(id.clone()),
                HostCall::SetInlineChatVisible(true),
                HostCall::SetInlineChatVisible(false),
                HostCall::RemoveContentWidget(id),
            ]
        );
    }

    #[test]
    fn test_get_position_runs_engine_on_selection() {
        let (_host, _chat, mut widget) = make_widget([20, 15, 5]);
        assert_eq2!(widget.get_position(), None);

        let cursor = Position::new(2, 4);
        widget.show(Selection::caret(cursor).into());
        let it = widget.get_position().unwrap();
        assert_eq2!(it.anchor, cursor);
        assert_eq2!(it.preference, SidePreference::only(Side::Below));
    }

    #[test]
    fn test_explicit_position_wins_over_selection() {
        let (_host, _chat, mut widget) = make_widget([20, 15, 5]);
        widget.show(ShowContentOptions {
            selection: Some(Selection::caret(Position::new(2, 4))),
            position: Some(Position::new(3, 1)),
        });
        assert_eq2!(widget.get_position(), Some(WidgetPosition::below(3, 1)));
    }

    #[test]
    fn test_get_position_without_document() {
        let host = Rc::new(TestHostSurface::without_model(WIDE));
        let chat = Rc::new(TestInlineChatService::default());
        let mut widget = ContentWidget::new(Rc::clone(&host), chat);
        widget.show(Selection::caret(Position::new(1, 1)).into());
        assert_eq2!(widget.get_position(), None);
    }

    #[test]
    fn test_set_options_does_not_relayout() {
        let (host, _chat, mut widget) = make_widget([20, 15, 5]);
        widget.set_options(ShowContentOptions::with_position(Position::new(1, 3)));
        assert!(host.calls().is_empty());
        assert_eq2!(widget.get_position(), Some(WidgetPosition::below(1, 3)));
    }

    #[test]
    fn test_offset_top_is_relative_to_origin() {
        let (_host, _chat, mut widget) = make_widget([1]);
        widget.get_dom_node_mut().top = Some(100);

        widget.offset_top(5);
        widget.offset_top(8);

        assert_eq2!(widget.get_dom_node().top, Some(108));
        assert_eq2!(widget.origin_top_offset(), 100);
    }

    #[test]
    fn test_offset_top_with_unset_origin() {
        let (_host, _chat, mut widget) = make_widget([1]);
        assert_eq2!(widget.origin_top_offset(), 0);

        widget.offset_top(5);
        widget.offset_top(8);
        widget.offset_top(-3);

        assert_eq2!(widget.get_dom_node().top, Some(-3));
        assert_eq2!(widget.origin_top_offset(), 0);
    }

    #[test]
    fn test_dom_node_style() {
        let (_host, _chat, widget) = make_widget([1]);
        let style = widget.get_dom_node().style;
        assert_eq2!(style.padding_px, 6);
        assert_eq2!(style.padding_right_px, 50);
        assert_eq2!(style.z_index, 999);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (host, chat, mut widget) = make_widget([1]);
        widget.show(ShowContentOptions::default());

        widget.dispose();
        widget.dispose();

        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
        let removes = host
            .calls()
            .into_iter()
            .filter(|it| matches!(it, HostCall::RemoveContentWidget(_)))
            .count();
        assert_eq2!(removes, 1);
        assert!(widget.is_disposed());
    }

    #[test]
    fn test_calls_after_dispose_are_ignored() {
        let (host, _chat, mut widget) = make_widget([20, 15, 5]);
        widget.show(Selection::caret(Position::new(2, 4)).into());
        widget.get_dom_node_mut().top = Some(10);
        widget.dispose();
        let calls_at_dispose = host.calls();

        widget.show(Selection::caret(Position::new(1, 1)).into());
        widget.hide();
        widget.set_options(ShowContentOptions::with_position(Position::new(1, 1)));
        widget.offset_top(7);

        assert_eq2!(widget.get_position(), None);
        assert_eq2!(widget.get_dom_node().top, Some(10));
        assert_eq2!(host.calls(), calls_at_dispose);
        assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Disposed);
        assert_eq2!(widget.id(), CONTENT_WIDGET_ID);
    }

    #[test]
    fn test_narrow_layout_disposes() {
        let (host, chat, mut widget) = make_widget([1]);
        widget.show(ShowContentOptions::default());
        assert!(!widget.poll_layout_changes());

        host.fire_layout_changed(WIDE);
        assert!(!widget.poll_layout_changes());
        assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Shown);

        host.fire_layout_changed(WIDE);
        host.fire_layout_changed(NARROW);
        assert!(widget.poll_layout_changes());
        assert!(widget.is_disposed());
        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);

        // The subscription is gone, so later layout changes are not seen.
        assert_eq2!(host.layout_changed_receiver_count(), 0);
        host.fire_layout_changed(NARROW);
        assert!(!widget.poll_layout_changes());
        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
    }

    #[test]
    fn test_gate_reads_current_layout_not_event_payload() {
        let (host, _chat, mut widget) = make_widget([1]);

        // A stale narrow payload, but the editor is wide by now.
        host.send_layout_changed(LayoutChangedEvent {
            layout_info: NARROW,
        });
        assert!(!widget.poll_layout_changes());
        assert!(!widget.is_disposed());

        // A stale wide payload, but the editor is narrow by now.
        host.set_layout_info(NARROW);
        host.send_layout_changed(LayoutChangedEvent { layout_info: WIDE });
        assert!(widget.poll_layout_changes());
        assert!(widget.is_disposed());
    }

    #[test]
    fn test_lagged_subscription_still_runs_gate() {
        let (host, chat, mut widget) = make_widget([1]);
        widget.show(ShowContentOptions::default());

        // More events than the channel holds, so the oldest ones are dropped.
        host.fire_layout_changed(NARROW);
        for _ in 0..64 {
            host.send_layout_changed(LayoutChangedEvent { layout_info: WIDE });
        }

        assert!(widget.poll_layout_changes());
        assert!(widget.is_disposed());
        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
    }

    #[test]
    fn test_hidden_widget_is_disposed_by_narrow_layout_too() {
        let (host, chat, mut widget) = make_widget([1]);
        host.set_layout_info(NARROW);
        assert!(widget.handle_layout_changed());
        assert!(!widget.handle_layout_changed());
        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
    }

    #[test]
    fn test_custom_min_visible_width() {
        let host = Rc::new(TestHostSurface::from_columns(WIDE, [1]));
        let chat = Rc::new(TestInlineChatService::default());
        let config = ContentWidgetConfig {
            min_visible_width: 100.0,
            ..Default::default()
        };
        let mut widget = ContentWidget::new_with_config(Rc::clone(&host), chat, config);

        host.fire_layout_changed(NARROW);
        assert!(!widget.poll_layout_changes());
        assert!(!widget.is_disposed());
    }

    #[test]
    fn test_request_close_disposes() {
        let (_host, chat, mut widget) = make_widget([1]);
        widget.show(ShowContentOptions::default());
        widget.request_close();
        assert!(widget.is_disposed());
        assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
    }

    #[test]
    fn test_click_actions() {
        let (_host, _chat, mut widget) = make_widget([1]);
        assert_eq2!(widget.emit_click_action("nobody listening"), 0);

        let mut receiver_1 = widget.subscribe_click_actions();
        let mut receiver_2 = widget.subscribe_click_actions();
        assert_eq2!(widget.emit_click_action("explain"), 2);

        assert_eq2!(
            receiver_1.try_recv().unwrap(),
            ClickActionEvent::new("explain")
        );
        assert_eq2!(receiver_2.try_recv().unwrap().action_name, "explain");

        widget.dispose();
        assert_eq2!(widget.emit_click_action("comment"), 0);
        assert!(matches!(
            receiver_1.try_recv(),
            Err(broadcast::error::TryRecvError::Closed)
        ));
        assert!(matches!(
            widget.subscribe_click_actions().try_recv(),
            Err(broadcast::error::TryRecvError::Closed)
        ));
    }
}
