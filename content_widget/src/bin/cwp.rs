// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words minimap

//! `cwp` (content widget placement) runs the inline chat overlay's placement engine on a
//! text file, and prints where the overlay would be anchored.
//!
//! ```text
//! cwp src/main.rs --selection 5:1-12:1 --cursor end
//! (10, 31) [BELOW, ABOVE]
//! ```

use std::{path::PathBuf, rc::Rc};

use clap::{Args, Parser, ValueEnum};
use miette::{IntoDiagnostic, WrapErr};
use r3bl_content_widget::{ContentWidget, ContentWidgetConfig, HostSurface,
                          InlineChatService, InlineChatStatus, LayoutChangedEvent,
                          LayoutChangedSubscription, LayoutInfo, LinesTextModel,
                          Selection, ShowContentOptions, TextModel, TracingConfig,
                          WidgetPosition,
                          setup_default_miette_global_report_handler, throws,
                          try_initialize_logging};
use tokio::sync::broadcast;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> miette::Result<()> {
    throws!({
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging(
                TracingConfig::new_file(None).with_level(tracing_core::LevelFilter::DEBUG),
            )
            .ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        setup_default_miette_global_report_handler(ISSUES_URL);

        match try_run(&cli_arg)? {
            Some(position) => println!("{position}"),
            None => println!("No position"),
        }

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}

/// Returns [`None`] when the overlay would not be shown at all.
fn try_run(cli_arg: &CLIArg) -> miette::Result<Option<WidgetPosition>> {
    let config = match &cli_arg.config {
        Some(path) => ContentWidgetConfig::try_load_from_path(path)?,
        None => ContentWidgetConfig::default(),
    };

    let text = std::fs::read_to_string(&cli_arg.file_path)
        .into_diagnostic()
        .wrap_err(format!(
            "Could not read file: '{}'",
            cli_arg.file_path.display()
        ))?;

    let selection = Selection::try_parse_range(
        &cli_arg.selection,
        cli_arg.cursor == CursorArg::End,
    )?;

    let layout_info = LayoutInfo::new(
        cli_arg.layout.total_width,
        cli_arg.layout.content_left,
        cli_arg.layout.minimap_width,
    );
    let min_visible_width = config.min_visible_width;
    let host = Rc::new(FileHostSurface::new(
        layout_info,
        Rc::new(LinesTextModel::from_text(&text)),
    ));
    let mut widget =
        ContentWidget::new_with_config(Rc::clone(&host), Rc::new(LogChatService), config);

    // Same check the widget runs when the host's layout changes.
    if widget.handle_layout_changed() {
        eprintln!(
            "Out of area: visible width {} is less than {min_visible_width}",
            layout_info.visible_width(),
        );
        return Ok(None);
    }

    widget.show(ShowContentOptions::with_selection(selection));
    let maybe_position = widget.get_position();
    widget.dispose();

    Ok(maybe_position)
}

/// A host that never changes: the document is the file that was read, and the layout
/// comes from the command line.
struct FileHostSurface {
    layout_info: LayoutInfo,
    model: Rc<dyn TextModel>,
    layout_changed_sender: broadcast::Sender<LayoutChangedEvent>,
}

impl FileHostSurface {
    fn new(layout_info: LayoutInfo, model: Rc<dyn TextModel>) -> Self {
        Self {
            layout_info,
            model,
            layout_changed_sender: broadcast::channel(1).0,
        }
    }
}

impl HostSurface for FileHostSurface {
    fn layout_info(&self) -> LayoutInfo { self.layout_info }

    fn model(&self) -> Option<Rc<dyn TextModel>> { Some(Rc::clone(&self.model)) }

    fn on_layout_changed(&self) -> LayoutChangedSubscription {
        LayoutChangedSubscription::new(self.layout_changed_sender.subscribe())
    }

    fn layout_content_widget(&self, widget_id: &str) {
        tracing::debug!(message = "layout_content_widget", widget_id = %widget_id);
    }

    fn remove_content_widget(&self, widget_id: &str) {
        tracing::debug!(message = "remove_content_widget", widget_id = %widget_id);
    }

    fn set_inline_chat_visible(&self, visible: bool) {
        tracing::debug!(message = "set_inline_chat_visible", visible = %visible);
    }
}

struct LogChatService;

impl InlineChatService for LogChatService {
    fn launch_chat_status(&self, status: InlineChatStatus) {
        tracing::debug!(message = "launch_chat_status", status = %status);
    }
}

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "cwp")]
#[command(about = "🧭 Find where the inline chat overlay goes for a selection in a file")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: PathBuf,

    #[arg(
        long,
        short = 's',
        help = "Selection as `line:column-line:column` (1-based), eg: `5:1-12:1`"
    )]
    pub selection: String,

    #[arg(
        long,
        short = 'c',
        value_enum,
        default_value_t = CursorArg::End,
        help = "Which end of the selection the cursor is on"
    )]
    pub cursor: CursorArg,

    #[arg(long, help = "Path to a JSON file with `ContentWidgetConfig` overrides")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArg,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CursorArg {
    Start,
    End,
}

#[derive(Debug, Args)]
pub struct LayoutArg {
    #[arg(long, default_value_t = 1200.0, help = "Total width of the editor")]
    pub total_width: f64,

    #[arg(long, default_value_t = 60.0, help = "Width of the gutter on the left")]
    pub content_left: f64,

    #[arg(long, default_value_t = 120.0, help = "Width of the minimap on the right")]
    pub minimap_width: f64,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `content_widget_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}
