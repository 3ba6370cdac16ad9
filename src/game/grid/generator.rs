//! Terrain generation.
//!
//! Produces the original layout: deterministic border walls around an
//! interior drawn cell-by-cell from a weighted distribution. No connectivity
//! or solvability guarantee; draws are independent.

use rand::Rng;

use crate::config::game::{ITEM_CUTOFF, WALL_CUTOFF};
use crate::game::types::Tile;

/// Generate a fresh original layout, indexed `[x][y]`.
pub fn generate_grid(width: usize, height: usize) -> Vec<Vec<Tile>> {
    let mut rng = rand::rng();
    (0..width)
        .map(|x| {
            (0..height)
                .map(|y| {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        Tile::Wall
                    } else {
                        weighted_tile(&mut rng)
                    }
                })
                .collect()
        })
        .collect()
}

/// One uniform draw in [0, 1), partitioned into three contiguous intervals:
/// [0, WALL_CUTOFF) wall, [WALL_CUTOFF, ITEM_CUTOFF) floor, the rest item.
pub fn weighted_tile<R: Rng>(rng: &mut R) -> Tile {
    let roll: f64 = rng.random();
    if roll < WALL_CUTOFF {
        Tile::Wall
    } else if roll < ITEM_CUTOFF {
        Tile::Floor
    } else {
        Tile::Item
    }
}
