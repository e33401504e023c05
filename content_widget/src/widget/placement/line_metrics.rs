// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TextModel;

/// Wraps a [`TextModel`] so that the placement engine can freely ask about lines above
/// the first one or below the last one (eg: "2 lines above the cursor" when the cursor
/// is on line 1).
///
/// Line numbers are clamped into `1..=line_count` before the model is queried, so an
/// out of range request is never sent to the host. A line before the start of the
/// document measures the same as line 1, and one past the end measures the same as the
/// last line.
#[derive(Clone, Copy)]
pub struct ClampedLineMetrics<'a> {
    model: &'a dyn TextModel,
}

impl std::fmt::Debug for ClampedLineMetrics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClampedLineMetrics")
            .field("line_count", &self.model.line_count())
            .finish()
    }
}

impl<'a> ClampedLineMetrics<'a> {
    #[must_use]
    pub fn new(model: &'a dyn TextModel) -> Self { Self { model } }

    /// `line + offset`, clamped into `1..=line_count`. Returns [`None`] if the model has
    /// no lines at all.
    #[must_use]
    pub fn clamp_line(&self, line: usize, offset: isize) -> Option<usize> {
        let line_count = self.model.line_count();
        if line_count == 0 {
            return None;
        }
        Some(line.saturating_add_signed(offset).clamp(1, line_count))
    }

    /// Last non-whitespace column of the line at `line + offset`, after clamping. `0`
    /// for blank lines and for a model with no lines.
    #[must_use]
    pub fn column(&self, line: usize, offset: isize) -> usize {
        self.clamp_line(line, offset)
            .map_or(0, |line| self.model.last_non_whitespace_column(line))
    }
}
