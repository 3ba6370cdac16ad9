//! Game entities module.
//!
//! This module organizes player and projectile entity logic.

pub mod player;
pub mod projectile;

pub use player::*;
pub use projectile::*;
