mod controller;
mod ui;

use anyhow::Context as _;
use board_core::{load_settings, UuidOrderFactory};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    controller::{events::UiEvent, orchestration::UI_EVENT_QUEUE_CAPACITY},
    ui::{
        resolve_settings_path,
        theme::{PersistedBoardSettings, SETTINGS_STORAGE_KEY},
        OrderBoardApp, StartupConfig,
    },
};

fn main() -> anyhow::Result<()> {
    let startup = StartupConfig::parse();
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let settings_path = resolve_settings_path(&startup, &cwd)?;
    let settings = load_settings(Some(&settings_path))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(
        settings = %settings_path.display(),
        tables = settings.tables.len(),
        "starting order board"
    );

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let stored = cc
                .storage
                .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY));
            let persisted = PersistedBoardSettings::from_storage_text(stored.as_deref());
            let mut app = OrderBoardApp::new(
                ui_tx,
                ui_rx,
                settings,
                Box::new(UuidOrderFactory),
                persisted,
            );
            if startup.demo {
                app.seed_demo_orders();
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("order board window failed: {err}"))
}
