//! Wheel Feature
//!
//! The energizer selector widget and its GPUI bridges.

pub mod controller;
pub mod page;
