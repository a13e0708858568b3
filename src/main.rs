// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod export;
mod model;
mod notify;
mod progress;
mod session;
mod settings;
mod state;
mod tasks;
mod ui;
mod view;

use app::ArqApp;
use settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(base_url = %settings.base_url, "starting ARQV30 desktop client");
    let app = ArqApp::new(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("ARQV30 Enhanced"),
        ..Default::default()
    };

    eframe::run_native(
        "ARQV30 Enhanced",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
