// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Position, Selection};

/// What the caller knows when it asks for the overlay to be shown. An explicit
/// `position` wins over `selection`. With neither, the widget has no position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShowContentOptions {
    pub selection: Option<Selection>,
    pub position: Option<Position>,
}

impl ShowContentOptions {
    #[must_use]
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection: Some(selection),
            position: None,
        }
    }

    #[must_use]
    pub fn with_position(position: Position) -> Self {
        Self {
            selection: None,
            position: Some(position),
        }
    }
}

impl From<Selection> for ShowContentOptions {
    fn from(selection: Selection) -> Self { Self::with_selection(selection) }
}
