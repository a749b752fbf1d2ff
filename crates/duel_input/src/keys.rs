//! Recognized keys and who they belong to

use winit::keyboard::KeyCode;

/// One of the two controlled bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fighter {
    Player,
    Enemy,
}

impl Fighter {
    /// Both fighters in update/draw order
    pub const ALL: [Fighter; 2] = [Fighter::Player, Fighter::Enemy];

    pub fn name(self) -> &'static str {
        match self {
            Fighter::Player => "player",
            Fighter::Enemy => "enemy",
        }
    }
}

/// Horizontal direction of a movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Left,
    Right,
}

/// What a recognized key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Heading),
    Jump,
}

/// The six keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `a`
    PlayerLeft,
    /// `d`
    PlayerRight,
    /// `w`
    PlayerJump,
    /// `ArrowLeft`
    EnemyLeft,
    /// `ArrowRight`
    EnemyRight,
    /// `ArrowUp`
    EnemyJump,
}

impl Key {
    /// Map a physical key to a game key. Everything else is ignored.
    pub fn from_key_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::KeyA => Some(Key::PlayerLeft),
            KeyCode::KeyD => Some(Key::PlayerRight),
            KeyCode::KeyW => Some(Key::PlayerJump),
            KeyCode::ArrowLeft => Some(Key::EnemyLeft),
            KeyCode::ArrowRight => Some(Key::EnemyRight),
            KeyCode::ArrowUp => Some(Key::EnemyJump),
            _ => None,
        }
    }

    /// Map a DOM-style key identifier (`"a"`, `"ArrowLeft"`, ...) to a game key
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "a" => Some(Key::PlayerLeft),
            "d" => Some(Key::PlayerRight),
            "w" => Some(Key::PlayerJump),
            "ArrowLeft" => Some(Key::EnemyLeft),
            "ArrowRight" => Some(Key::EnemyRight),
            "ArrowUp" => Some(Key::EnemyJump),
            _ => None,
        }
    }

    /// DOM-style key identifier
    pub fn name(self) -> &'static str {
        match self {
            Key::PlayerLeft => "a",
            Key::PlayerRight => "d",
            Key::PlayerJump => "w",
            Key::EnemyLeft => "ArrowLeft",
            Key::EnemyRight => "ArrowRight",
            Key::EnemyJump => "ArrowUp",
        }
    }

    /// Fighter this key steers
    pub fn fighter(self) -> Fighter {
        match self {
            Key::PlayerLeft | Key::PlayerRight | Key::PlayerJump => Fighter::Player,
            Key::EnemyLeft | Key::EnemyRight | Key::EnemyJump => Fighter::Enemy,
        }
    }

    pub fn action(self) -> KeyAction {
        match self {
            Key::PlayerLeft | Key::EnemyLeft => KeyAction::Move(Heading::Left),
            Key::PlayerRight | Key::EnemyRight => KeyAction::Move(Heading::Right),
            Key::PlayerJump | Key::EnemyJump => KeyAction::Jump,
        }
    }

    /// Movement key for a fighter and heading
    pub fn movement(fighter: Fighter, heading: Heading) -> Key {
        match (fighter, heading) {
            (Fighter::Player, Heading::Left) => Key::PlayerLeft,
            (Fighter::Player, Heading::Right) => Key::PlayerRight,
            (Fighter::Enemy, Heading::Left) => Key::EnemyLeft,
            (Fighter::Enemy, Heading::Right) => Key::EnemyRight,
        }
    }
}
