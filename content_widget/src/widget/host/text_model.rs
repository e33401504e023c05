// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

/// Read only view of the document, as seen by the placement engine. The only thing the
/// engine needs to know about a line is how far right its text reaches.
///
/// Callers must pass line numbers in `1..=line_count()`. The engine guarantees this by
/// going through [`crate::ClampedLineMetrics`].
pub trait TextModel {
    fn line_count(&self) -> usize;

    /// 1-based column of the last character on `line` that is not whitespace. Returns
    /// `0` when the line is blank.
    fn last_non_whitespace_column(&self, line: usize) -> usize;
}

/// A [`TextModel`] built from plain text. Columns are counted in grapheme clusters, so
/// `"😃"` and `"é"` (even when it is `e` + combining accent) are 1 column each, and a tab
/// is 1 column.
///
/// Lines are split on `\n` (a trailing `\r` is dropped), and a trailing newline starts an
/// empty last line, the same way an editor shows it. Empty text has 1 blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinesTextModel {
    /// Index 0 holds line 1.
    last_non_whitespace_columns: Vec<usize>,
}

impl LinesTextModel {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let last_non_whitespace_columns = text
            .split('\n')
            .map(|line| measure_last_non_whitespace_column(line.trim_end_matches('\r')))
            .collect();
        Self {
            last_non_whitespace_columns,
        }
    }

    /// Skip the text entirely, useful when you already know how long each line is. Each
    /// item is the value [`TextModel::last_non_whitespace_column`] returns for that line.
    /// An empty list is treated as 1 blank line.
    #[must_use]
    pub fn from_columns(columns: impl IntoIterator<Item = usize>) -> Self {
        let mut last_non_whitespace_columns: Vec<usize> = columns.into_iter().collect();
        if last_non_whitespace_columns.is_empty() {
            last_non_whitespace_columns.push(0);
        }
        Self {
            last_non_whitespace_columns,
        }
    }
}

impl TextModel for LinesTextModel {
    fn line_count(&self) -> usize { self.last_non_whitespace_columns.len() }

    fn last_non_whitespace_column(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|index| self.last_non_whitespace_columns.get(index))
            .copied()
            .unwrap_or(0)
    }
}

fn measure_last_non_whitespace_column(line: &str) -> usize {
    line.graphemes(true)
        .enumerate()
        .filter(|(_, grapheme)| !grapheme.chars().all(char::is_whitespace))
        .last()
        .map_or(0, |(index, _)| index + 1)
}
