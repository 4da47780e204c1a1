// Online Timer Application
// Main entry point

// Hide console window on Windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use online_timer::services::settings::SettingsService;
use online_timer::ui_egui::TimerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Online Timer");

    let settings = SettingsService::from_project_dirs().load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Online Timer")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Online Timer",
        native_options,
        Box::new(move |cc| Ok(Box::new(TimerApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch Online Timer: {err}"))?;

    Ok(())
}
