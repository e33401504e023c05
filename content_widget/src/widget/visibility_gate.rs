// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words minimap

use crate::{DEBUG_CONTENT_WIDGET, LayoutInfo, MIN_VISIBLE_WIDTH};

/// Decides whether the editor's content area is wide enough to hold the overlay. It is
/// re-evaluated on every layout change, with no hysteresis or debounce: the first
/// layout that is too narrow makes the widget tear itself down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    pub min_visible_width: f64,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self {
            min_visible_width: MIN_VISIBLE_WIDTH,
        }
    }
}

impl VisibilityGate {
    #[must_use]
    pub const fn new(min_visible_width: f64) -> Self { Self { min_visible_width } }

    /// `true` when `total_width - content_left_offset - minimap_width` is less than
    /// [`Self::min_visible_width`]. A width exactly at the minimum still fits.
    #[must_use]
    pub fn is_out_of_area(&self, layout_info: &LayoutInfo) -> bool {
        let visible_width = layout_info.visible_width();
        let is_out_of_area = visible_width < self.min_visible_width;

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "VisibilityGate::is_out_of_area",
                visible_width = %visible_width,
                min_visible_width = %self.min_visible_width,
                is_out_of_area = %is_out_of_area,
            );
        });

        is_out_of_area
    }
}
