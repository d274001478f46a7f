mod app;
mod color;
mod data;
mod router;
mod state;
mod ui;
mod view;

use std::path::Path;
use std::process::ExitCode;

use app::HappyGlobeApp;
use eframe::egui;
use state::AppState;

/// Fixed input path, relative to the working directory (run
/// `generate_sample` first if the Kaggle file is not available).
const DATA_PATH: &str = "2015.csv";

fn main() -> ExitCode {
    env_logger::init();

    // The table is loaded once, before the UI starts; a load failure is
    // fatal, there is no fallback.
    let dataset = match data::loader::load_file(Path::new(DATA_PATH)) {
        Ok(ds) => {
            log::info!(
                "Loaded {} countries across {} regions from {DATA_PATH}",
                ds.len(),
                ds.regions().len()
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load {DATA_PATH}: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Happy Globe – World Happiness Report 2015",
        options,
        Box::new(|_cc| Ok(Box::new(HappyGlobeApp::new(AppState::new(dataset))))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI error: {e}");
            ExitCode::FAILURE
        }
    }
}
