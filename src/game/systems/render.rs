//! Game rendering system (terminal).
//!
//! Renders the grid by reading single cells through the store's query
//! interface only; no copy of the layouts is held here.

use crate::game::entities::Player;
use crate::game::store::GridStore;
use crate::game::systems::ProjectileManager;
use crate::game::types::{Position, Tile};

/// Render the current grid as one string, row by row.
pub fn grid_to_string(store: &GridStore) -> String {
    let mut out = String::new();
    for y in 0..store.height() as i32 {
        for x in 0..store.width() as i32 {
            let symbol = match store.tile(Position { x, y }) {
                Some(Tile::Wall) => "██",
                Some(Tile::Floor) => "  ",
                Some(Tile::Item) => "$ ",
                Some(Tile::Projectile) => "o ",
                Some(Tile::Player) => "@ ",
                None => "??",
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    out
}

/// Print the grid to the terminal.
pub fn print_grid(store: &GridStore) {
    print!("{}", grid_to_string(store));
}

/// Print the player state and projectile count.
pub fn print_player_state(player: &Player, projectiles: &ProjectileManager) {
    println!("--- Player ---");
    println!("Position: ({}, {})", player.pos.x, player.pos.y);
    println!("Gold: {}", player.gold);
    println!("Projectiles in flight: {}", projectiles.live_count());
    println!();
}
