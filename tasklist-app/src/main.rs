//! Native entry point.

use tasklist_app::{AppConfig, TaskListApp};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let config = AppConfig::from_env();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(path) = &config.prefs_path {
        tracing::info!("preferences at {}", path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(AppConfig::APP_NAME)
            .with_inner_size(AppConfig::WINDOW_SIZE)
            .with_min_inner_size(AppConfig::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        AppConfig::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(TaskListApp::from_config(&config, &cc.egui_ctx)))),
    )
}
