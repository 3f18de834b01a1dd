#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 500.0])
            .with_title("Release Gantt"),
        ..Default::default()
    };

    eframe::run_native(
        "Release Gantt",
        options,
        Box::new(|cc| Ok(Box::new(app::ReleasePlannerApp::new(cc)))),
    )
}
