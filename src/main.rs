//! Energizer Rad - Main Entry Point
//!
//! Spin the wheel, get an energizer.

use energizer_rad::app::application::run_app;
use energizer_rad::logging;
use energizer_rad::utils::config_store::load_app_config;

fn main() {
    let config = load_app_config();

    // Keep the file writer alive until exit
    let _log_guard = logging::init(&config.log);

    tracing::info!(
        spin_ms = config.wheel.spin_duration_ms,
        revolutions = config.wheel.revolutions,
        "Starting Energizer Rad..."
    );

    run_app(config);
}
