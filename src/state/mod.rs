//! State - Draw Session State
//!
//! The selector state machine and the capability traits it is driven through.

pub mod capabilities;
pub mod selector_state;
