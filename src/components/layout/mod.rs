//! Layout Components

pub mod shell;
