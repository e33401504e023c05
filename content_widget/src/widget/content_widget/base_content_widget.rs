// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use crate::{DEBUG_CONTENT_WIDGET, HostSurface, OverlayNode, ShowContentOptions,
            WidgetPosition, WidgetStyle};

/// A generic overlay placed in the host editor. It knows how to attach itself to and
/// detach itself from the host, and how to resolve an explicit position. It knows
/// nothing about selections or the inline chat; [`crate::ContentWidget`] wraps it and
/// adds those.
#[derive(Debug)]
pub struct BaseContentWidget<H: HostSurface> {
    id: &'static str,
    host: Rc<H>,
    options: Option<ShowContentOptions>,
    node: OverlayNode,
    is_attached: bool,
}

impl<H: HostSurface> BaseContentWidget<H> {
    #[must_use]
    pub fn new(id: &'static str, host: Rc<H>, style: WidgetStyle) -> Self {
        Self {
            id,
            host,
            options: None,
            node: OverlayNode::new(style),
            is_attached: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str { self.id }

    #[must_use]
    pub fn host(&self) -> &Rc<H> { &self.host }

    #[must_use]
    pub fn options(&self) -> Option<&ShowContentOptions> { self.options.as_ref() }

    pub fn set_options(&mut self, options: ShowContentOptions) {
        self.options = Some(options);
    }

    #[must_use]
    pub fn is_attached(&self) -> bool { self.is_attached }

    /// Store the options and ask the host to lay the widget out. The host then calls
    /// back for the position.
    pub fn show(&mut self, options: ShowContentOptions) {
        self.options = Some(options);
        self.is_attached = true;
        self.host.layout_content_widget(self.id);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "BaseContentWidget::show",
                id = %self.id,
                options = ?self.options
            );
        });
    }

    /// Ask the host to remove the widget. The options are kept so that a later
    /// [`Self::show`] can be called with fresh ones.
    pub fn hide(&mut self) { self.detach("BaseContentWidget::hide"); }

    /// Same as [`Self::hide`]. It is a no-op if the widget is not attached.
    pub fn dispose(&mut self) {
        self.detach("BaseContentWidget::dispose");
        self.options = None;
    }

    /// Default position resolver. Only an explicit [`ShowContentOptions::position`] is
    /// resolved here, it is anchored below that position, falling back to above.
    #[must_use]
    pub fn get_position(&self) -> Option<WidgetPosition> {
        let position = self.options?.position?;
        Some(WidgetPosition::below(position.line, position.column))
    }

    #[must_use]
    pub fn get_dom_node(&self) -> &OverlayNode { &self.node }

    pub fn get_dom_node_mut(&mut self) -> &mut OverlayNode { &mut self.node }

    fn detach(&mut self, message: &str) {
        if !self.is_attached {
            return;
        }
        self.is_attached = false;
        self.host.remove_content_widget(self.id);

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = %message, id = %self.id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CONTENT_WIDGET_ID, LayoutInfo, Position, Selection, Side, assert_eq2,
                test_fixtures::{HostCall, TestHostSurface}};

    fn make_base() -> (Rc<TestHostSurface>, BaseContentWidget<TestHostSurface>) {
        let host = Rc::new(TestHostSurface::from_columns(
            LayoutInfo::new(800.0, 50.0, 100.0),
            [4, 8, 12],
        ));
        let base =
            BaseContentWidget::new(CONTENT_WIDGET_ID, Rc::clone(&host), WidgetStyle::default());
        (host, base)
    }

    #[test]
    fn test_explicit_position_is_resolved() {
        let (_host, mut base) = make_base();
        assert_eq2!(base.get_position(), None);

        base.set_options(ShowContentOptions::with_position(Position::new(2, 9)));
        let it = base.get_position().unwrap();
        assert_eq2!(it.anchor, Position::new(2, 9));
        assert_eq2!(it.preference.primary(), Side::Below);
    }

    #[test]
    fn test_selection_only_is_not_resolved() {
        let (_host, mut base) = make_base();
        base.set_options(ShowContentOptions::with_selection(Selection::caret(
            Position::new(1, 1),
        )));
        assert_eq2!(base.get_position(), None);
    }

    #[test]
    fn test_show_hide_attach_and_detach_once() {
        let (host, mut base) = make_base();

        base.hide();
        assert!(host.calls().is_empty());

        base.show(ShowContentOptions::default());
        base.hide();
        base.hide();
        base.dispose();

        assert_eq2!(
            host.calls(),
            vec![
                HostCall::LayoutContentWidget(CONTENT_WIDGET_ID.to_string()),
                HostCall::RemoveContentWidget(CONTENT_WIDGET_ID.to_string()),
            ]
        );
        assert!(!base.is_attached());
    }
}
