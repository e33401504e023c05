// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use super::{Position, PositionParseError};

/// A text selection. `start` is always at or before `end` in document order. The
/// `cursor` (aka the active end, where the caret blinks) normally equals one of them,
/// and the selection is anchored at the opposite end.
///
/// ```text
/// cursor == start              cursor == end
///   ▼
///   ▒elected text on         selected text on
/// more lines here            more lines here▒
///                                           ▲
/// ```
///
/// Nothing stops you from building a selection whose cursor is at neither end with
/// [`Selection::new`]. See [`CursorSide::Neither`] for how that is handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
    pub cursor: Position,
}

/// Which end of a [`Selection`] the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSide {
    Start,
    End,
    /// The cursor equals neither endpoint. The placement engine does not scan for this
    /// case, it falls back to rechecking around the cursor line.
    Neither,
}

impl Selection {
    /// Takes the fields as is, no normalization is done.
    #[must_use]
    pub const fn new(start: Position, end: Position, cursor: Position) -> Self {
        Self { start, end, cursor }
    }

    /// Builds a selection from where the user started selecting (`anchor`) and where the
    /// caret is now (`cursor`), in either order.
    #[must_use]
    pub fn from_anchor_and_cursor(anchor: Position, cursor: Position) -> Self {
        let (start, end) = if anchor <= cursor {
            (anchor, cursor)
        } else {
            (cursor, anchor)
        };
        Self { start, end, cursor }
    }

    /// An empty selection, just a caret.
    #[must_use]
    pub const fn caret(cursor: Position) -> Self { Self::new(cursor, cursor, cursor) }

    #[must_use]
    pub const fn is_single_line(&self) -> bool { self.start.line == self.end.line }

    /// Start is checked before end, so a selection where all three positions are equal
    /// reports [`CursorSide::Start`].
    #[must_use]
    pub fn cursor_side(&self) -> CursorSide {
        if self.cursor == self.start {
            CursorSide::Start
        } else if self.cursor == self.end {
            CursorSide::End
        } else {
            CursorSide::Neither
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SelectionParseError {
    #[error("Expected `line:column-line:column`, got {0:?}")]
    #[diagnostic(
        code(r3bl_content_widget::selection::missing_dash),
        help("Write a selection as `start-end`, eg: `5:1-12:1`")
    )]
    MissingDash(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Position(#[from] PositionParseError),
}

impl Selection {
    /// Parses `start-end` (eg: `"5:1-12:1"`) into a selection. The endpoints can be in
    /// either order. The cursor goes on the end when `cursor_at_end` is `true`, else on
    /// the start.
    ///
    /// # Errors
    ///
    /// If either endpoint is not a valid [`Position`], or the dash is missing.
    pub fn try_parse_range(
        range: &str,
        cursor_at_end: bool,
    ) -> Result<Self, SelectionParseError> {
        let Some((lhs, rhs)) = range.trim().split_once('-') else {
            return Err(SelectionParseError::MissingDash(range.to_string()));
        };
        let (lhs, rhs): (Position, Position) = (lhs.parse()?, rhs.parse()?);
        let (start, end) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
        Ok(Self::new(start, end, if cursor_at_end { end } else { start }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_from_anchor_and_cursor_normalizes() {
        let sel = Selection::from_anchor_and_cursor(
            Position::new(12, 1),
            Position::new(5, 1),
        );
        assert_eq2!(sel.start, Position::new(5, 1));
        assert_eq2!(sel.end, Position::new(12, 1));
        assert_eq2!(sel.cursor_side(), CursorSide::Start);

        let sel = Selection::from_anchor_and_cursor(
            Position::new(5, 1),
            Position::new(12, 1),
        );
        assert_eq2!(sel.cursor_side(), CursorSide::End);
        assert!(!sel.is_single_line());
    }

    #[test]
    fn test_caret_is_single_line() {
        let sel = Selection::caret(Position::new(3, 7));
        assert!(sel.is_single_line());
        assert_eq2!(sel.cursor_side(), CursorSide::Start);
    }

    #[test]
    fn test_cursor_at_neither_end() {
        let sel = Selection::new(
            Position::new(1, 1),
            Position::new(9, 1),
            Position::new(4, 2),
        );
        assert_eq2!(sel.cursor_side(), CursorSide::Neither);
    }

    #[test]
    fn test_try_parse_range() {
        let sel = Selection::try_parse_range("12:1-5:1", false).unwrap();
        assert_eq2!(sel.start, Position::new(5, 1));
        assert_eq2!(sel.end, Position::new(12, 1));
        assert_eq2!(sel.cursor_side(), CursorSide::Start);

        let sel = Selection::try_parse_range("5:1-12:1", true).unwrap();
        assert_eq2!(sel.cursor, Position::new(12, 1));
    }

    #[test]
    fn test_try_parse_range_err() {
        assert!(matches!(
            Selection::try_parse_range("5:1", false),
            Err(SelectionParseError::MissingDash(_))
        ));
        assert!(matches!(
            Selection::try_parse_range("5:1-0:3", false),
            Err(SelectionParseError::Position(PositionParseError::Zero(_)))
        ));
    }
}
