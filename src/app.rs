//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::image::{ImageMeta, ResultPane};
use crate::processor::{Algorithm, FilterParams};
use egui::{Context, Key};
use egui_file_dialog::FileDialog;
use std::path::{Path, PathBuf};

mod dialogs;
mod processing;
mod ui;

/// Top-level application state for the Grayscope UI.
pub struct GrayscopeApp {
    image_path: Option<PathBuf>,
    image_meta: Option<ImageMeta>,
    algorithm: Algorithm,
    params: FilterParams,
    config: AppConfig,
    panes: Vec<ResultPane>,
    next_pane_id: u64,
    active_dialog: Option<FileDialog>,
    last_image_dir: Option<PathBuf>,
    last_status: Option<String>,
}

impl GrayscopeApp {
    /// Create the app and optionally preselect an image path.
    pub fn new(config: AppConfig, initial_path: Option<&Path>) -> Self {
        let params = config.filter_params();
        let mut app = Self {
            image_path: None,
            image_meta: None,
            algorithm: Algorithm::default(),
            params,
            config,
            panes: Vec::new(),
            next_pane_id: 0,
            active_dialog: None,
            last_image_dir: None,
            last_status: None,
        };
        if let Some(p) = initial_path {
            app.select_image(p.to_owned());
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.last_status = Some(msg.into());
    }

    fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        if let Some(path) = dropped.iter().find_map(|f| f.path.clone()) {
            log::debug!("Dropped file: {}", path.display());
            self.select_image(path);
        } else {
            self.set_status("Drop failed: only files on disk can be selected.");
        }
    }
}

impl eframe::App for GrayscopeApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        let ctx = &ctx;
        self.handle_dropped_files(ctx);

        if !ctx.egui_wants_keyboard_input() && self.active_dialog.is_none() {
            // Ctrl/Cmd + O: select image
            if ctx.input(|i| i.key_pressed(Key::O) && i.modifiers.command) {
                self.open_image_dialog();
            }
            // Ctrl/Cmd + Enter: process
            if ctx.input(|i| i.key_pressed(Key::Enter) && i.modifiers.command) {
                self.process_selected(ctx);
            }
        }

        egui::Panel::bottom("status").show_inside(ui, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(ui.style()).fill(ui::BACKGROUND))
            .show_inside(ui, |ui| self.ui_main_controls(ui));

        self.ui_result_panes(ctx);
        self.poll_open_dialog(ctx);
    }
}
