// Event Tracker Calendar
// Main entry point

use anyhow::{anyhow, Result};
use event_tracker_calendar::models::settings::Settings;
use event_tracker_calendar::services::settings::SettingsService;
use event_tracker_calendar::ui_egui::CalendarApp;

const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Event Tracker Calendar");

    let settings = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Tracker Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Event Tracker Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Calendar window failed: {}", e))
}

fn load_settings() -> Settings {
    let Some(service) = SettingsService::from_project_dirs() else {
        log::warn!("No config directory available, using default settings");
        return Settings::default();
    };

    match service.load_or_init() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(err) => {
            log::warn!("{:#}; using default settings", err);
            Settings::default()
        }
    }
}
