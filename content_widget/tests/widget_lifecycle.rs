// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The widget's lifecycle, as seen by the host and the chat layer.

use std::rc::Rc;

use r3bl_content_widget::{CONTENT_WIDGET_ID, ContentWidget, ContentWidgetConfig,
                          InlineChatStatus, LayoutInfo, Position, Selection,
                          ShowContentOptions, WidgetLifecycleState, assert_eq2,
                          test_fixtures::{HostCall, TestHostSurface,
                                          TestInlineChatService}};

type TestWidget = ContentWidget<TestHostSurface, TestInlineChatService>;

fn setup(
    layout_info: LayoutInfo,
) -> (Rc<TestHostSurface>, Rc<TestInlineChatService>, TestWidget) {
    let host = Rc::new(TestHostSurface::from_text(
        layout_info,
        "fn main() {\n    let a = 1;\n    println!(\"{a}\");\n}\n",
    ));
    let chat = Rc::new(TestInlineChatService::default());
    let widget = ContentWidget::new(Rc::clone(&host), Rc::clone(&chat));
    (host, chat, widget)
}

#[test]
fn test_narrow_editor_disposes_on_next_layout_event() {
    let (host, chat, mut widget) = setup(LayoutInfo::new(1200.0, 60.0, 120.0));
    widget.show(Selection::caret(Position::new(2, 5)).into());
    assert!(widget.get_position().is_some());

    // Visible width is 800 - 50 - 500 = 250, under 270.
    host.fire_layout_changed(LayoutInfo::new(800.0, 50.0, 500.0));
    assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Shown);
    assert!(widget.poll_layout_changes());

    assert_eq2!(widget.lifecycle_state(), WidgetLifecycleState::Disposed);
    assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
    assert_eq2!(widget.get_position(), None);
    assert!(
        host.calls()
            .contains(&HostCall::RemoveContentWidget(CONTENT_WIDGET_ID.to_string()))
    );
}

#[test]
fn test_layout_event_after_dispose_is_ignored() {
    let (host, chat, mut widget) = setup(LayoutInfo::new(1200.0, 60.0, 120.0));
    widget.show(ShowContentOptions::default());
    widget.request_close();

    host.fire_layout_changed(LayoutInfo::new(10.0, 0.0, 0.0));
    assert!(!widget.poll_layout_changes());
    widget.dispose();

    assert_eq2!(chat.statuses(), vec![InlineChatStatus::Ready]);
}

#[test]
fn test_offset_top_is_not_cumulative() {
    let (_host, _chat, mut widget) = setup(LayoutInfo::new(1200.0, 60.0, 120.0));
    widget.show(Selection::caret(Position::new(2, 5)).into());

    // The host renders the node 40px down.
    widget.get_dom_node_mut().top = Some(40);
    widget.offset_top(5);
    widget.offset_top(8);
    assert_eq2!(widget.get_dom_node().top, Some(48));

    // A later re-render by the host does not move the origin.
    widget.get_dom_node_mut().top = Some(400);
    widget.offset_top(1);
    assert_eq2!(widget.get_dom_node().top, Some(41));
}

#[test]
fn test_reshow_with_new_selection_moves_the_anchor() {
    let (host, _chat, mut widget) = setup(LayoutInfo::new(1200.0, 60.0, 120.0));

    widget.show(Selection::caret(Position::new(2, 5)).into());
    let first = widget.get_position().unwrap();
    widget.hide();
    widget.show(Selection::caret(Position::new(3, 7)).into());
    let second = widget.get_position().unwrap();

    assert_eq2!(first.anchor.line, 2);
    assert_eq2!(second.anchor.line, 3);
    assert!(host.is_inline_chat_visible());
}

#[test]
fn test_config_changes_gate_and_style() {
    let host = Rc::new(TestHostSurface::from_columns(
        LayoutInfo::new(1200.0, 60.0, 120.0),
        [1, 2, 3],
    ));
    let chat = Rc::new(TestInlineChatService::default());
    let config = ContentWidgetConfig::try_from_json_str(
        r#"{ "min_visible_width": 900.0, "style": { "z_index": 10 } }"#,
    )
    .unwrap();
    let mut widget = ContentWidget::new_with_config(Rc::clone(&host), chat, config);
    assert_eq2!(widget.get_dom_node().style.z_index, 10);

    // 1200 - 60 - 120 = 1020 fits, 1000 - 60 - 120 = 820 does not.
    host.fire_layout_changed(LayoutInfo::new(1200.0, 60.0, 120.0));
    assert!(!widget.poll_layout_changes());
    host.fire_layout_changed(LayoutInfo::new(1000.0, 60.0, 120.0));
    assert!(widget.poll_layout_changes());
}

#[test]
fn test_click_actions_reach_every_subscriber() {
    let (_host, _chat, widget) = setup(LayoutInfo::new(1200.0, 60.0, 120.0));
    let mut receivers = [widget.subscribe_click_actions(), widget.subscribe_click_actions()];

    for name in ["explain", "comment"] {
        assert_eq2!(widget.emit_click_action(name), 2);
    }

    for receiver in &mut receivers {
        let names: Vec<String> = std::iter::from_fn(|| receiver.try_recv().ok())
            .map(|it| it.action_name)
            .collect();
        assert_eq2!(names, vec!["explain".to_string(), "comment".to_string()]);
    }
}
