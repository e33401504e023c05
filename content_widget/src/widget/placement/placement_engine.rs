// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::{max, min};

use super::{ClampedLineMetrics, Side, SidePreference, WidgetPosition};
use crate::{CursorSide, DEBUG_PLACEMENT_ENGINE, Position, SHORTCUT_COLUMN_THRESHOLD,
            Selection, TextModel};

/// Works out where the overlay should go for a [`Selection`], using nothing but the last
/// non-whitespace column of the lines around the cursor and the selection endpoints
/// ("how far right does the text on this line reach"). It never looks at tokens or
/// syntax, so it behaves the same for every language, and it is cheap enough to rerun
/// on every cursor move.
///
/// The overlay always goes to the right of the text, the left side is not considered.
///
/// # Algorithm
///
/// 1. Single line selection: [`PlacementEngine::recheck_position`] at the cursor.
/// 2. Multi line selection, cursor at the start: if the 2 lines above the cursor line
///    are not much longer than it (see [`SHORTCUT_COLUMN_THRESHOLD`]), anchor above the
///    cursor line, just right of those 2 lines. Otherwise scan the selection top to
///    bottom for the first line that [protrudes](PlacementEngine::protrudes) above, or
///    else below.
/// 3. Cursor at the end is the mirror image: look at the 2 lines below, anchor below,
///    and scan bottom to top testing below before above.
/// 4. A scan hit anchors just right of the hit line's text, on the side it protrudes.
/// 5. No hit (or a cursor at neither end of the selection): recheck at the cursor line.
///
/// Whichever step produced it, a result anchored on line 1 or 2 only allows BELOW, since
/// the overlay can't fit above those lines.
///
/// ```text
/// ╭─────────────────────────────╮
/// │3│    let x = compute();     │
/// │4│    if x > 10 {            │  ◄── short lines above the cursor line,
/// │5│▒       do_something_long(x, y, z); ◄── anchor ABOVE line 5, col 17
/// │6│        more();            │
/// ╰─────────────────────────────╯
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine<'a> {
    metrics: ClampedLineMetrics<'a>,
    shortcut_column_threshold: usize,
}

/// First line found by the scan, and the side it protrudes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    pub line: usize,
    pub side: Side,
}

impl<'a> PlacementEngine<'a> {
    #[must_use]
    pub fn new(model: &'a dyn TextModel) -> Self {
        Self {
            metrics: ClampedLineMetrics::new(model),
            shortcut_column_threshold: SHORTCUT_COLUMN_THRESHOLD,
        }
    }

    /// Returns [`None`] when there is no document to measure.
    #[must_use]
    pub fn try_new(maybe_model: Option<&'a dyn TextModel>) -> Option<Self> {
        maybe_model.map(Self::new)
    }

    #[must_use]
    pub fn with_shortcut_column_threshold(mut self, threshold: usize) -> Self {
        self.shortcut_column_threshold = threshold;
        self
    }

    #[must_use]
    pub fn compute_position(&self, selection: &Selection) -> WidgetPosition {
        let cursor = selection.cursor;

        if selection.is_single_line() {
            return self.recheck_position(cursor.line, cursor.column);
        }

        let cursor_column = self.metrics.column(cursor.line, 0);

        let maybe_hit = match selection.cursor_side() {
            CursorSide::Start => {
                let max_column_above = max(
                    self.metrics.column(cursor.line, -1),
                    self.metrics.column(cursor.line, -2),
                );
                if max_column_above < cursor_column + self.shortcut_column_threshold {
                    return self.finish(
                        "shortcut above",
                        WidgetPosition::above(cursor.line, max_column_above + 1),
                    );
                }
                self.scan(
                    selection.start.line..=selection.end.line,
                    [Side::Above, Side::Below],
                )
            }
            CursorSide::End => {
                let max_column_below = max(
                    self.metrics.column(cursor.line, 1),
                    self.metrics.column(cursor.line, 2),
                );
                if max_column_below < cursor_column + self.shortcut_column_threshold {
                    return self.finish(
                        "shortcut below",
                        WidgetPosition::below(cursor.line, max_column_below + 1),
                    );
                }
                self.scan(
                    (selection.start.line..=selection.end.line).rev(),
                    [Side::Below, Side::Above],
                )
            }
            CursorSide::Neither => None,
        };

        match maybe_hit {
            Some(ScanHit { line, side }) => self.finish(
                "scan hit",
                WidgetPosition {
                    anchor: Position::new(line, self.metrics.column(line, 0) + 1),
                    preference: SidePreference::prefer(side),
                },
            ),
            None => self.recheck_position(cursor.line, cursor_column),
        }
    }

    /// Picks a side by comparing `line` with the lines right above and below it.
    ///
    /// | condition                     | anchor                           | side  |
    /// | :---------------------------- | :------------------------------- | :---- |
    /// | `cur >= next`                 | `(line, column)`                 | BELOW |
    /// | `cur >= prev`                 | `(line, column)`                 | ABOVE |
    /// | `prev >= next` (cur shortest) | `(line - 1, min(prev, next))`    | BELOW |
    /// | otherwise (cur shortest)      | `(line + 1, min(prev, next))`    | ABOVE |
    ///
    /// If the anchor (or the line being rechecked) is line 1 or 2, the side is forced to
    /// BELOW. The result always has a single side.
    ///
    /// The anchor column is at least 1, even when asked to recheck a blank line at
    /// column 0.
    #[must_use]
    pub fn recheck_position(&self, line: usize, column: usize) -> WidgetPosition {
        let prev = self.metrics.column(line, -1);
        let cur = self.metrics.column(line, 0);
        let next = self.metrics.column(line, 1);

        let (anchor_line, anchor_column, side) = if cur >= next {
            (line, column, Side::Below)
        } else if cur >= prev {
            (line, column, Side::Above)
        } else if prev >= next {
            (line.saturating_sub(1), min(prev, next), Side::Below)
        } else {
            (line + 1, min(prev, next), Side::Above)
        };

        let side = if is_near_document_start(line) || is_near_document_start(anchor_line) {
            Side::Below
        } else {
            side
        };

        self.finish(
            "recheck",
            WidgetPosition {
                anchor: Position::new(anchor_line, max(anchor_column, 1)),
                preference: SidePreference::only(side),
            },
        )
    }

    /// A line protrudes on a side when its text reaches at least as far right as both of
    /// the next 2 lines on that side. The overlay can then sit on that side of it
    /// without covering the (shorter) neighbors.
    #[must_use]
    pub fn protrudes(&self, line: usize, side: Side) -> bool {
        let (near, far) = match side {
            Side::Above => (-1, -2),
            Side::Below => (1, 2),
        };
        let current = self.metrics.column(line, 0);
        current >= self.metrics.column(line, near) && current >= self.metrics.column(line, far)
    }

    /// First line in `lines` that protrudes, testing the sides in `order` on each line.
    fn scan(&self, lines: impl Iterator<Item = usize>, order: [Side; 2]) -> Option<ScanHit> {
        for line in lines {
            for side in order {
                if self.protrudes(line, side) {
                    return Some(ScanHit { line, side });
                }
            }
        }
        None
    }

    /// Every result goes through here before it is returned.
    fn finish(&self, step: &str, mut position: WidgetPosition) -> WidgetPosition {
        if is_near_document_start(position.anchor.line) {
            position.preference = SidePreference::only(Side::Below);
        }

        DEBUG_PLACEMENT_ENGINE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "PlacementEngine",
                step = %step,
                position = %position,
                shortcut_column_threshold = %self.shortcut_column_threshold,
            );
        });
        position
    }
}

fn is_near_document_start(line: usize) -> bool { line <= 2 }
