//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and hold the draw logic's data and math.

pub mod config;
pub mod confetti;
pub mod energizer;
pub mod pool;
pub mod wheel;
