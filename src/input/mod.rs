//! Input handling module
//!
//! Provides input mapping from raw events to host-level actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
