use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::game::{PROJECTILE_ENERGY, PROJECTILE_STEP_MILLIS};
use crate::game::entities::Projectile;
use crate::game::types::{Direction, Position};

/// The player entity. Position here is the source of truth; the grid's
/// Player marker mirrors it through the movement system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub gold: u32,
    pub facing: Direction,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            gold: 0,
            facing: Direction::Right,
        }
    }

    /// Candidate position one step in `direction`. Pure: no grid knowledge,
    /// the result may be off-grid or inside a wall.
    pub fn next_position(&self, direction: Direction) -> Position {
        self.pos.offset(direction)
    }

    pub fn acquire_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Spawn a projectile from the player's current position and facing,
    /// with lifetime and step delay from config.
    pub fn fire_projectile(&self) -> Projectile {
        Projectile::new(
            self.pos,
            self.facing,
            PROJECTILE_ENERGY,
            Duration::from_millis(PROJECTILE_STEP_MILLIS),
        )
    }
}
