// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words minimap

//! # Inline chat content widget
//!
//! This crate positions a floating overlay (a "content widget") next to the user's text
//! selection in a code editor, and manages the small lifecycle that drives it. It answers
//! one question: *given a selection and the surrounding text, where (line, column, above
//! or below) should the overlay anchor, and should it be visible at all?*
//!
//! It never decides *what* gets rendered in the overlay, it never touches conversation
//! or model state, and it does no network I/O. Those concerns belong to the chat layer
//! which plugs in through [`InlineChatService`] and renders into the widget's slot.
//!
//! ## Architecture
//!
//! ```text
//! ╭──────────────╮ layout changed ╭────────────────╮ out of area ╭───────────╮
//! │ HostSurface  ├───────────────►│ VisibilityGate ├────────────►│ dispose() │
//! ╰──────┬───────╯                ╰────────────────╯             ╰───────────╯
//!        │ get_position()
//!        ▼
//! ╭──────────────────────╮  explicit position?  ╭───────────────────╮
//! │ ContentWidget        ├─────────────────────►│ BaseContentWidget │
//! │  (show / hide /      │                      ╰───────────────────╯
//! │   offset_top / ...)  │  else, selection     ╭───────────────────╮
//! │                      ├─────────────────────►│ PlacementEngine   │
//! ╰──────────────────────╯                      ╰───────────────────╯
//! ```
//!
//! - [`VisibilityGate`] checks that the viewport (minus the gutter and the minimap) is at
//!   least [`MIN_VISIBLE_WIDTH`] wide. If it isn't, the widget tears itself down.
//! - [`PlacementEngine`] looks only at "how far right does the text on this line reach"
//!   ([`TextModel::last_non_whitespace_column`]) around the cursor and the selection
//!   endpoints. It never inspects syntax, so it works the same for every language and is
//!   cheap to rerun on each cursor move.
//! - [`ContentWidget`] composes a [`BaseContentWidget`] (default show / hide / position
//!   behavior) with the engine and the gate.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use r3bl_content_widget::{ContentWidget, LayoutInfo, Position, Selection, Side,
//!                           ShowContentOptions,
//!                           test_fixtures::{TestHostSurface, TestInlineChatService}};
//!
//! let host = Rc::new(TestHostSurface::from_text(
//!     LayoutInfo::new(800.0, 50.0, 100.0),
//!     "fn main() {\n    let a = 1;\n    let b = 2;\n}",
//! ));
//! let chat = Rc::new(TestInlineChatService::default());
//! let mut widget = ContentWidget::new(Rc::clone(&host), Rc::clone(&chat));
//!
//! let cursor = Position::new(3, 5);
//! widget.show(ShowContentOptions::with_selection(Selection::new(
//!     cursor, cursor, cursor,
//! )));
//!
//! let position = widget.get_position().unwrap();
//! assert_eq!(position.preference.primary(), Side::Below);
//! assert!(host.is_inline_chat_visible());
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod widget;

// Re-export.
pub use self::core::*;
pub use widget::*;
