//! Config - Application Configuration
//!
//! Loaded from `config.toml` in the platform config directory. Every field has
//! a default, so a partial file is valid. The energizer list is not
//! configurable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Wheel animation
    pub wheel: WheelConfig,
    /// Confetti celebration
    pub celebration: CelebrationConfig,
    /// Logging
    pub log: LogConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Wheel spin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Total spin time in milliseconds
    pub spin_duration_ms: u64,
    /// Minimum full turns before landing
    pub revolutions: u32,
    /// Frame interval in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 5000,
            revolutions: 5,
            frame_interval_ms: 16,
        }
    }
}

impl WheelConfig {
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

/// Confetti configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Number of confetti pieces on screen
    pub particle_count: usize,
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            particle_count: 200,
            gravity: 120.0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [wheel]
            spin_duration_ms = 2500

            [log]
            level = "debug"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.wheel.spin_duration(), Duration::from_millis(2500));
        assert_eq!(config.wheel.revolutions, 5);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.file);
        assert_eq!(config.celebration, CelebrationConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").expect("valid toml");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_frame_interval_never_zero() {
        let wheel = WheelConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(wheel.frame_interval(), Duration::from_millis(1));
    }
}
