/// Game configuration constants.
///
/// This module defines the main gameplay parameters: grid dimensions, the
/// player spawn cell, terrain generation weights, and projectile tuning.

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 16;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 16;

/// Player spawn column.
pub const SPAWN_X: i32 = 4;

/// Player spawn row.
pub const SPAWN_Y: i32 = 1;

/// Upper cutoff of the Wall interval in the terrain draw.
/// A uniform draw in [0, 1) below this value produces a Wall (weight 0.33).
pub const WALL_CUTOFF: f64 = 0.33;

/// Upper cutoff of the Floor interval in the terrain draw.
/// Draws in [WALL_CUTOFF, ITEM_CUTOFF) produce Floor (weight ~0.645);
/// draws in [ITEM_CUTOFF, 1) produce an Item (weight ~0.025).
pub const ITEM_CUTOFF: f64 = 0.975;

/// Minimum gold granted by one item pickup.
pub const GOLD_MIN: u32 = 1;

/// Maximum gold granted by one item pickup.
pub const GOLD_MAX: u32 = 2;

/// Number of steps a projectile survives before its energy is exhausted.
pub const PROJECTILE_ENERGY: u32 = 6;

/// Delay between projectile simulation steps, in milliseconds.
pub const PROJECTILE_STEP_MILLIS: u64 = 200;
