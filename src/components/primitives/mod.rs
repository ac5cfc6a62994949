//! Primitive Components

pub mod button;
