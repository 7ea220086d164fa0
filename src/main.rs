// Counselpoint Application
// Main entry point

mod config;
mod models;
mod services;
mod ui_egui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Counselpoint");

    let config = config::PortalConfig::load().unwrap_or_else(|err| {
        log::warn!("Falling back to default configuration: {}", err);
        config::PortalConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Counselpoint")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Counselpoint",
        native_options,
        Box::new(move |cc| Ok(Box::new(ui_egui::PortalApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch Counselpoint: {err}"))
    .context("eframe event loop")
}
