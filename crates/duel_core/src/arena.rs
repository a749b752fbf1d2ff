//! The game context: surface and both fighters

use duel_input::{Fighter, Roster};
use duel_physics::{BodyDesc, KinematicBody};

use crate::Surface;

/// Owns the surface and the two bodies for the lifetime of the game
#[derive(Debug, Clone)]
pub struct Arena {
    surface: Surface,
    player: KinematicBody,
    enemy: KinematicBody,
}

impl Arena {
    pub fn new(surface: Surface, player: BodyDesc, enemy: BodyDesc) -> Self {
        let arena = Self {
            surface,
            player: KinematicBody::new(player),
            enemy: KinematicBody::new(enemy),
        };
        log::debug!("Spawned player {:?}", arena.player);
        log::debug!("Spawned enemy {:?}", arena.enemy);
        arena
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Floor line the bodies land on
    pub fn floor_y(&self) -> f32 {
        self.surface.height()
    }

    pub fn body(&self, fighter: Fighter) -> &KinematicBody {
        match fighter {
            Fighter::Player => &self.player,
            Fighter::Enemy => &self.enemy,
        }
    }

    pub fn body_mut(&mut self, fighter: Fighter) -> &mut KinematicBody {
        match fighter {
            Fighter::Player => &mut self.player,
            Fighter::Enemy => &mut self.enemy,
        }
    }

    pub fn player(&self) -> &KinematicBody {
        &self.player
    }

    pub fn enemy(&self) -> &KinematicBody {
        &self.enemy
    }
}

impl Roster for Arena {
    type Body = KinematicBody;

    fn body_mut(&mut self, fighter: Fighter) -> &mut KinematicBody {
        Arena::body_mut(self, fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_input::{InputState, Key};
    use duel_math::Vec2;

    fn arena() -> Arena {
        Arena::new(
            Surface::default(),
            BodyDesc::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)),
            BodyDesc::new(Vec2::new(400.0, 100.0), Vec2::ZERO),
        )
    }

    #[test]
    fn test_spawn() {
        let arena = arena();
        assert_eq!(arena.player().position, Vec2::ZERO);
        assert_eq!(arena.player().velocity, Vec2::new(0.0, 10.0));
        assert_eq!(arena.enemy().position, Vec2::new(400.0, 100.0));
        assert_eq!(arena.floor_y(), 576.0);
    }

    #[test]
    fn test_body_lookup() {
        let mut arena = arena();
        arena.body_mut(Fighter::Enemy).velocity.x = 3.0;
        assert_eq!(arena.body(Fighter::Enemy).velocity.x, 3.0);
        assert_eq!(arena.body(Fighter::Player).velocity.x, 0.0);
    }

    #[test]
    fn test_roster_routes_input_to_owner() {
        let mut arena = arena();
        let mut input = InputState::new();

        input.key_down(Key::EnemyJump, &mut arena);
        input.key_down(Key::PlayerLeft, &mut arena);

        assert_eq!(arena.enemy().velocity.y, -20.0);
        assert_eq!(arena.player().velocity.y, 10.0);
        assert_eq!(arena.player().last_key, Some(duel_input::Heading::Left));
        assert_eq!(arena.enemy().last_key, None);
    }
}
