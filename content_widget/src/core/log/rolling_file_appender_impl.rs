// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens the widget's log file for appending, creating it (and its folder) if needed.
/// The file is never rotated, so successive runs of `cwp` share one log.
///
/// A bare file name like `content_widget_log.txt` goes in the current folder.
///
/// Used as a plain blocking writer. Lines written through
/// `tracing_appender::non_blocking` are lost when the process exits before the worker
/// flushes them.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name (eg: `/` or `..`)
/// - The folder can't be created, or the file can't be opened
pub fn try_create(log_file_path: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(log_file_path);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file path '{}' has no file name", path.display())
    })?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .into_diagnostic()
        .wrap_err(format!(
            "Could not open log file '{}' in folder '{}'",
            file_name.to_string_lossy(),
            folder.display()
        ))
}
