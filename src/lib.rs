//! Concurrent tile-grid manager for a single-player roguelike.
//!
//! The core is [`game::store::GridStore`]: a shared 2D grid mutated by the
//! control thread (player movement) and by one spawned task per in-flight
//! projectile, all through a single coarse lock.

pub mod config;
pub mod game;
