//! Keyboard input for the sprite duel
//!
//! Two fighters share one keyboard:
//! - Player: A / D to move, W to jump
//! - Enemy: Left / Right arrows to move, Up arrow to jump
//!
//! [`InputState`] tracks which movement keys are held. Jumps and the
//! most-recent-heading record live on the bodies themselves and are written
//! through the [`BodyControl`] seam.

mod keys;
mod input_state;

pub use keys::{Fighter, Heading, Key, KeyAction};
pub use input_state::{BodyControl, InputState, Roster, DEFAULT_JUMP_IMPULSE, DEFAULT_MOVE_SPEED};
