mod app;
mod config;
mod error;
mod filters;
mod image;
mod processor;
#[cfg(test)]
mod test_util;
mod util;

use app::GrayscopeApp;
use config::AppConfig;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let initial_image_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.main_window_size())
            .with_min_inner_size([240.0, 180.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Grayscope",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(GrayscopeApp::new(config, initial_image_path.as_deref())))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the UI: {err}"))
}
