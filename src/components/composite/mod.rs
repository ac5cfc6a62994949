//! Composite Components
//!
//! Wheel, confetti overlay and modal.

pub mod confetti;
pub mod modal;
pub mod wheel;
