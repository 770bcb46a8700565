// SPARK 2K25 festival page
// Main entry point

use anyhow::{anyhow, Result};
use spark_fest::services::config::FestivalConfig;
use spark_fest::services::registration::LocalAcknowledgement;
use spark_fest::services::timer::SystemClock;
use spark_fest::ui_egui::FestivalApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting SPARK festival page");

    let config = FestivalConfig::load_or_default();
    let app = FestivalApp::from_config(
        &config,
        Box::new(SystemClock),
        Box::new(LocalAcknowledgement::new()),
    )?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.festival.name.clone())
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "spark-fest",
        options,
        Box::new(move |cc| {
            app.install(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("Festival window failed: {err}"))
}
