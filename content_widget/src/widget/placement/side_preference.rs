// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::{SmallVec, smallvec};
use strum_macros::{AsRefStr, Display as StrumDisplay};

use crate::Position;

/// Which side of the anchor line the overlay is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
pub enum Side {
    #[strum(to_string = "ABOVE")]
    Above,
    #[strum(to_string = "BELOW")]
    Below,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
        }
    }
}

/// Ordered list of [`Side`]s that the host's placement resolver tries, first one first.
/// It is never empty, and has at most 2 items, so it lives on the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SidePreference(SmallVec<[Side; 2]>);

impl SidePreference {
    /// Only `side`, the host should not try the other one.
    #[must_use]
    pub fn only(side: Side) -> Self { Self(smallvec![side]) }

    /// `side` first, then fall back to the opposite.
    #[must_use]
    pub fn prefer(side: Side) -> Self { Self(smallvec![side, side.opposite()]) }

    #[must_use]
    pub fn primary(&self) -> Side {
        // The constructors above are the only way to build this, so the list is never
        // empty.
        self.0.first().copied().unwrap_or(Side::Below)
    }

    #[must_use]
    pub fn fallback(&self) -> Option<Side> { self.0.get(1).copied() }

    #[must_use]
    pub fn as_slice(&self) -> &[Side] { &self.0 }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl Display for SidePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sides: Vec<&str> = self.0.iter().map(|it| it.as_ref()).collect();
        write!(f, "[{}]", sides.join(", "))
    }
}

/// The placement engine's only output: where to anchor the overlay, and which sides of
/// the anchor line to try.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetPosition {
    pub anchor: Position,
    pub preference: SidePreference,
}

impl WidgetPosition {
    /// Anchor above `line`, falling back to below it.
    #[must_use]
    pub fn above(line: usize, column: usize) -> Self {
        Self {
            anchor: Position::new(line, column),
            preference: SidePreference::prefer(Side::Above),
        }
    }

    /// Anchor below `line`, falling back to above it.
    #[must_use]
    pub fn below(line: usize, column: usize) -> Self {
        Self {
            anchor: Position::new(line, column),
            preference: SidePreference::prefer(Side::Below),
        }
    }
}

impl Display for WidgetPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.anchor, self.preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_prefer_and_only() {
        let it = SidePreference::prefer(Side::Above);
        assert_eq2!(it.as_slice(), &[Side::Above, Side::Below]);
        assert_eq2!(it.primary(), Side::Above);
        assert_eq2!(it.fallback(), Some(Side::Below));

        let it = SidePreference::only(Side::Below);
        assert_eq2!(it.as_slice(), &[Side::Below]);
        assert_eq2!(it.fallback(), None);
        assert_eq2!(it.len(), 1);
        assert!(!it.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq2!(
            WidgetPosition::below(12, 7).to_string(),
            "(12, 7) [BELOW, ABOVE]"
        );
        assert_eq2!(SidePreference::only(Side::Above).to_string(), "[ABOVE]");
    }
}
