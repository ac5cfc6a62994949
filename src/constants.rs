//! UI Constants
//!
//! Layout sizes and the fixed Dutch UI text.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Wheel diameter in pixels
pub const WHEEL_DIAMETER: f32 = 420.0;
/// Line segments used to approximate one degree of wheel rim
pub const WHEEL_RIM_STEPS_PER_DEGREE: f32 = 0.5;
/// Pointer triangle size
pub const POINTER_SIZE: f32 = 24.0;

/// Maximum width of the draw button and instructional text
pub const CONTENT_MAX_WIDTH: f32 = 448.0;

/// Result modal size
pub const MODAL_WIDTH: f32 = 384.0;
pub const MODAL_HEIGHT: f32 = 192.0;

/// Confetti frame interval in milliseconds
pub const CONFETTI_FRAME_MS: u64 = 16;

/// Project directory qualifiers for `directories::ProjectDirs`
pub const APP_QUALIFIER: &str = "nl";
pub const APP_ORGANIZATION: &str = "energizer-rad";
pub const APP_NAME: &str = "energizer-rad";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";
/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "energizer-rad.log";

/// User-facing text. The UI is Dutch only.
pub mod text {
    pub const WINDOW_TITLE: &str = "Energizer Rad";
    pub const HEADING: &str = "Energizer Rad 🔋";
    pub const INSTRUCTIONS: &str =
        "Als je energizers toe wilt voegen of andere ideeën hebt, stuur me een appje 🫶🏽.";
    pub const DRAW: &str = "Kies een energizer";
    pub const POOL_EMPTY: &str = "Alle energizers zijn gebruikt.";
    pub const FOOTER: &str = "Made with ❤️ by Arian Joyandeh";
    pub const MODAL_TITLE: &str = "Random Energizer";
    pub const RESULT_PREFIX: &str = "Je gevonden energizer is: ";
    pub const CLOSE: &str = "Sluit";
    pub const EXCLUDE: &str = "Ik wil een andere!";
}
