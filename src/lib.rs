//! Energizer Rad Library
//!
//! A wheel of fortune that picks a random energizer (an icebreaker activity),
//! shows it in a modal with confetti, and can drop it from later draws.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod logging;
pub mod state;
pub mod theme;
pub mod utils;
