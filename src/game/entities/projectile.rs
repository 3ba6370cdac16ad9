//! Projectile entity.
//!
//! A projectile is owned exclusively by the task simulating it; nothing else
//! holds a reference to a live projectile. It dies when it hits a wall or
//! runs out of energy.

use std::time::Duration;

use uuid::Uuid;

use crate::game::types::{Direction, Position};

#[derive(Debug, Clone)]
pub struct Projectile {
    id: Uuid,
    pos: Position,
    direction: Direction,
    energy: u32,
    step_delay: Duration,
}

impl Projectile {
    pub fn new(pos: Position, direction: Direction, energy: u32, step_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            pos,
            direction,
            energy,
            step_delay,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Advance one step along the direction and spend one unit of energy.
    pub fn advance(&mut self) {
        self.pos = self.pos.offset(self.direction);
        self.energy = self.energy.saturating_sub(1);
    }

    /// Kill the projectile immediately (wall impact).
    pub fn kill(&mut self) {
        self.energy = 0;
    }
}
