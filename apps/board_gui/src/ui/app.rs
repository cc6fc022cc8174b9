use std::path::{Path, PathBuf};

use board_core::{BoardView, OrderFactory, Settings, DEFAULT_SETTINGS_FILE};
use clap::Parser;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::protocol::BoardCommand;

use crate::{
    controller::{
        events::{UiErrorCategory, UiEvent},
        orchestration::EventSink,
        reducer::BoardSession,
    },
    ui::{
        board, dialogs,
        theme::{
            scaled_text_styles, text_scale_range, visuals_for_theme, PersistedBoardSettings,
            ThemePreset, ThemeSettings, SETTINGS_STORAGE_KEY,
        },
    },
};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "board_gui", about = "Kitchen order board")]
pub struct StartupConfig {
    /// Settings file; defaults to ./order_board.toml, then the user config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the per-user config directory.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Start with a few sample orders on the board.
    #[arg(long)]
    pub demo: bool,
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_root: PathBuf,
    pub settings_path: PathBuf,
}

impl AppPaths {
    pub fn from_startup(startup: &StartupConfig) -> anyhow::Result<Self> {
        let root = if let Some(p) = &startup.data_dir {
            p.clone()
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve user config dir"))?
                .join("order_board")
        };

        Ok(Self {
            settings_path: root.join(DEFAULT_SETTINGS_FILE),
            config_root: root,
        })
    }
}

/// `--config` wins, then a settings file in the working directory, then the
/// per-user one.
pub fn resolve_settings_path(startup: &StartupConfig, cwd: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = &startup.config {
        return Ok(path.clone());
    }
    let local = cwd.join(DEFAULT_SETTINGS_FILE);
    if local.exists() {
        return Ok(local);
    }
    let paths = AppPaths::from_startup(startup)?;
    tracing::debug!(root = %paths.config_root.display(), "using per-user settings location");
    Ok(paths.settings_path)
}

const DEMO_ORDERS: [(&str, &str); 3] = [("Burger", "3"), ("Pasta", "5"), ("Caesar salad", "1")];

pub struct OrderBoardApp {
    session: BoardSession,
    settings: Settings,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    queue_status: String,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
}

impl OrderBoardApp {
    pub fn new(
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        settings: Settings,
        factory: Box<dyn OrderFactory>,
        persisted: PersistedBoardSettings,
    ) -> Self {
        let session = BoardSession::new(factory, settings.confirm_delete_message.clone());
        Self {
            session,
            settings,
            ui_tx,
            ui_rx,
            queue_status: String::new(),
            theme: persisted.into_runtime(),
            applied_theme: None,
        }
    }

    pub fn seed_demo_orders(&mut self) {
        for (title, table) in DEMO_ORDERS {
            self.session.handle(BoardCommand::AddToggle.into());
            self.session.handle(
                BoardCommand::AddFill {
                    title: title.to_string(),
                    table: table.to_string(),
                }
                .into(),
            );
            self.session.handle(BoardCommand::AddSubmit.into());
        }
        tracing::info!(orders = self.session.state.len(), "seeded demo orders");
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            tracing::debug!(event = event.name(), "handling ui event");
            self.session.handle(event);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        let text_styles = scaled_text_styles(self.theme.text_scale);
        ctx.style_mut(|style| style.text_styles = text_styles);
        self.applied_theme = Some(self.theme);
    }
}

fn toolbar(
    ui: &mut egui::Ui,
    theme: &mut ThemeSettings,
    focus: Option<board_core::FocusTarget>,
    sink: &mut EventSink<'_>,
) {
    ui.horizontal(|ui| {
        ui.heading("Orders");
        ui.separator();

        let add = ui.button("Add order");
        if focus == Some(board_core::FocusTarget::AddTrigger) {
            add.request_focus();
        }
        if add.clicked() {
            sink.emit(BoardCommand::AddToggle);
        }
        if ui.button("Help").clicked() {
            sink.emit(BoardCommand::HelpToggle);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("Appearance", |ui| {
                for preset in ThemePreset::ALL {
                    ui.selectable_value(&mut theme.preset, preset, preset.label());
                }
                ui.separator();
                ui.add(egui::Slider::new(&mut theme.text_scale, text_scale_range()).text("Text size"));
                ui.add(egui::Slider::new(&mut theme.panel_rounding, 0..=16).text("Rounding"));
                ui.horizontal(|ui| {
                    ui.label("Accent");
                    ui.color_edit_button_srgba(&mut theme.accent_color);
                });
            });
        });
    });
}

impl eframe::App for OrderBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let focus = self.session.take_focus_request();
        let view = BoardView::project(&self.session.state);
        let last_error = self.session.last_error().cloned();
        let status = self.session.status().to_string();
        let theme = self.theme;

        let mut sink = EventSink::new(&self.ui_tx, &mut self.queue_status);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            sink.emit(BoardCommand::Escape);
        }

        egui::TopBottomPanel::top("board_toolbar").show(ctx, |ui| {
            toolbar(ui, &mut self.theme, focus, &mut sink);
        });

        egui::TopBottomPanel::bottom("board_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match last_error.as_ref().map(|error| error.category()) {
                    Some(UiErrorCategory::Declined) => ui.weak(&status),
                    Some(_) => ui.colored_label(ui.visuals().warn_fg_color, &status),
                    None => ui.label(&status),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} orders", view.card_count()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            board::show_board(ui, &view, theme, &mut sink);
        });

        if view.overlays.help {
            dialogs::show_help_dialog(ctx, focus, &mut sink);
        }
        if view.overlays.add {
            dialogs::show_add_dialog(
                ctx,
                &mut self.session.state.add_form,
                &self.settings.tables,
                last_error.as_ref(),
                focus,
                &mut sink,
            );
        }
        if view.overlays.edit {
            dialogs::show_edit_dialog(
                ctx,
                &mut self.session.state.edit_form,
                &self.settings.tables,
                last_error.as_ref(),
                focus,
                &mut sink,
            );
        }
        if self.session.confirm_delete_open() {
            dialogs::show_confirm_delete_dialog(ctx, self.session.delete_prompt(), &mut sink);
        }

        if sink.sent() > 0 {
            ctx.request_repaint();
        }
        if !self.queue_status.is_empty() {
            let message = std::mem::take(&mut self.queue_status);
            *self.session.status_mut() = message;
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&PersistedBoardSettings::from_runtime(self.theme)) {
            Ok(text) => storage.set_string(SETTINGS_STORAGE_KEY, text),
            Err(err) => tracing::warn!(error = %err, "failed to persist appearance settings"),
        }
    }
}
