//! Input mapping from raw events to host actions
//!
//! Maps keyboard input to actions on the window itself (Exit, fullscreen).
//! Game keys (A/D/W, arrows) are NOT mapped here - they go to the frame
//! driver's input tracker.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by host keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Close the window (Escape)
    Exit,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
}

/// Maps raw input events to host actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for host keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        // Only handle fresh presses
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            _ => None, // Game keys handled by the frame driver
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_game_keys_not_mapped() {
        for key in [
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyW,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
        ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, false);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_repeat_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::F11, ElementState::Pressed, true);
        assert_eq!(action, None);
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::F11, ElementState::Pressed, false),
            Some(InputAction::ToggleFullscreen)
        );
    }
}
