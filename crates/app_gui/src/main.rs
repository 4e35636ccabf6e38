mod app;

use anyhow::{Context, anyhow};
use app::UiApp;
use eframe::{NativeOptions, egui};
use keep_delete_core::{ReviewConfig, ReviewSession};
use rfd::FileDialog;

const WINDOW_TITLE: &str = "keep-delete";

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = run() {
        tracing::error!("{e:#}");
        eprintln!("keep-delete stopped with error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing::info!("keep-delete {}", env!("KEEP_DELETE_VERSION"));
    let session = ReviewSession::start(&ReviewConfig::default())
        .context("no writable location for the staging directory")?;

    // Blocking pick before the window opens; cancelling leaves no directory.
    let dir = FileDialog::new().set_directory(".").pick_folder();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(
                cc,
                session,
                dir.as_deref(),
            )))
        }),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}
