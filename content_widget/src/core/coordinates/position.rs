// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use serde::{Deserialize, Serialize};

/// A location in a text document. Both fields are 1-based, and the column is measured in
/// characters (grapheme clusters), not bytes.
///
/// ```text
///       column 1   column 5
///            ↓       ↓
/// line 1 →   fn main() {
/// line 2 →       let a = 1;
/// ```
///
/// The derived [`Ord`] compares `line` first, then `column`, which is document order.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self { Self { line, column } }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self { Self::new(line, column) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PositionParseError {
    #[error("Expected `line:column`, got {0:?}")]
    #[diagnostic(
        code(r3bl_content_widget::position::missing_separator),
        help("Write a position as `line:column`, eg: `12:4`")
    )]
    MissingSeparator(String),

    #[error("Could not parse {0:?} as a number")]
    #[diagnostic(code(r3bl_content_widget::position::not_a_number))]
    NotANumber(String),

    #[error("Line and column are 1-based, got {0:?}")]
    #[diagnostic(
        code(r3bl_content_widget::position::zero),
        help("The first line of a document is line 1, and its first column is column 1")
    )]
    Zero(String),
}

/// Parses `line:column`, eg: `"12:4"`.
impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(it: &str) -> std::result::Result<Self, Self::Err> {
        let Some((line, column)) = it.trim().split_once(':') else {
            return Err(PositionParseError::MissingSeparator(it.to_string()));
        };

        let parse = |part: &str| -> std::result::Result<usize, PositionParseError> {
            part.trim()
                .parse::<usize>()
                .map_err(|_| PositionParseError::NotANumber(part.to_string()))
        };

        let (line, column) = (parse(line)?, parse(column)?);
        if line == 0 || column == 0 {
            return Err(PositionParseError::Zero(it.to_string()));
        }

        Ok(Self::new(line, column))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_ordering_is_document_order() {
        assert!(Position::new(3, 10) < Position::new(4, 1));
        assert!(Position::new(4, 1) < Position::new(4, 2));
    }

    #[test]
    fn test_display() {
        assert_eq2!(Position::new(10, 4).to_string(), "(10, 4)");
    }

    #[test]
    fn test_parse_ok() {
        assert_eq2!("12:4".parse::<Position>(), Ok(Position::new(12, 4)));
        assert_eq2!(" 1 : 1 ".parse::<Position>(), Ok(Position::new(1, 1)));
    }

    #[test_case("12" => matches PositionParseError::MissingSeparator(_) ; "no colon")]
    #[test_case("a:4" => matches PositionParseError::NotANumber(_) ; "line not a number")]
    #[test_case("4:-1" => matches PositionParseError::NotANumber(_) ; "negative column")]
    #[test_case("0:4" => matches PositionParseError::Zero(_) ; "zero line")]
    #[test_case("4:0" => matches PositionParseError::Zero(_) ; "zero column")]
    fn test_parse_err(input: &str) -> PositionParseError {
        input.parse::<Position>().unwrap_err()
    }
}
