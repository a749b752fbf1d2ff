//! Sprite Duel - two keyboard-driven rectangles under gravity
//!
//! The game crates live under `crates/`; this crate wires them to a winit
//! window and exposes configuration and the frame driver for testing.

pub mod config;
pub mod input;
pub mod systems;
