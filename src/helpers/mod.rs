//! Helpers - Utility Functions

pub mod action;
pub mod fs;

pub use fs::{get_or_create_config_dir, get_or_create_data_dir};
