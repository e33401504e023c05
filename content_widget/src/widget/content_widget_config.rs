// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{CommonError, CommonErrorType, CommonResult, DEBUG_CONTENT_WIDGET,
            DefaultWidgetStyle, MIN_VISIBLE_WIDTH, SHORTCUT_COLUMN_THRESHOLD};

/// Tunables for [`crate::ContentWidget`]. Every field has a default, so a JSON file only
/// needs the keys it wants to change.
///
/// ```json
/// {
///   "min_visible_width": 320.0,
///   "style": { "padding_right_px": 24 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentWidgetConfig {
    pub min_visible_width: f64,
    pub shortcut_column_threshold: usize,
    pub style: WidgetStyle,
}

impl Default for ContentWidgetConfig {
    fn default() -> Self {
        Self {
            min_visible_width: MIN_VISIBLE_WIDTH,
            shortcut_column_threshold: SHORTCUT_COLUMN_THRESHOLD,
            style: WidgetStyle::default(),
        }
    }
}

/// Styling applied to the overlay node by [`crate::ContentWidget::get_dom_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyle {
    pub padding_px: u16,
    pub padding_right_px: u16,
    pub z_index: u16,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            padding_px: DefaultWidgetStyle::PaddingPx as u16,
            padding_right_px: DefaultWidgetStyle::PaddingRightPx as u16,
            z_index: DefaultWidgetStyle::ZIndex as u16,
        }
    }
}

pub mod config_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ConfigErrorCouldNot {
        #[error("📂 Could not read config file: '{path}'")]
        #[diagnostic(code(r3bl_content_widget::config::read))]
        ReadFile { path: String },

        #[error("🧩 Could not parse config JSON")]
        #[diagnostic(
            code(r3bl_content_widget::config::parse),
            help("Every key is optional, see `ContentWidgetConfig` for the names")
        )]
        ParseJson,
    }
}
pub use config_error::ConfigErrorCouldNot;

impl ContentWidgetConfig {
    /// # Errors
    ///
    /// Returns an error if:
    /// - The JSON is malformed, or a key has the wrong type
    /// - The values do not pass [`Self::validate`]
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let config: Self = serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ParseJson)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The file can't be read (missing, no permission, not UTF-8)
    /// - Its contents fail [`Self::try_from_json_str`]
    pub fn try_load_from_path(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ReadFile {
                path: path.display().to_string(),
            })?;
        let config = Self::try_from_json_str(&json)?;

        DEBUG_CONTENT_WIDGET.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📂 loaded content widget config",
                path = %path.display(),
                config = ?config
            );
        });

        Ok(config)
    }

    /// The minimum visible width must be a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidValue`] if the check fails.
    pub fn validate(&self) -> CommonResult<()> {
        if !self.min_visible_width.is_finite() || self.min_visible_width < 0.0 {
            return CommonError::new_error_result(
                CommonErrorType::InvalidValue,
                &format!(
                    "min_visible_width must be finite and >= 0, got: {}",
                    self.min_visible_width
                ),
            );
        }
        Ok(())
    }
}
