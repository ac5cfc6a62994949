//! Components - Reusable UI Elements
//!
//! Stateless `RenderOnce` elements; state and I/O live in features.

pub mod composite;
pub mod layout;
pub mod primitives;
