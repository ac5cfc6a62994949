//! Application Layer
//!
//! Contains app initialization, window management, and the page shell.

pub mod application;
pub mod workspace;
