// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Background information on miette's architecture:
//! - Miette allows customization how the [`miette::Report`] is displayed to terminal
//!   output (stdout, stderr), when the top-level miette handler in `main() ->
//!   miette::Result<_>` is activated. This hook is only activated at the time that the
//!   error is displayed, not when it is registered, it is lazy.
//! - Using the [`MietteHandlerOpts`] struct you can configure the default
//!   [`miette::MietteHandler`].
//! - The [`miette::set_hook`] function is used to register a custom error report
//!   handler.

use miette::MietteHandlerOpts;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns as usize);
            tracing::debug!(
                message = "miette::set_hook -> terminal_width",
                terminal_width = %it
            );
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
