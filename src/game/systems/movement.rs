//! Player movement system.
//!
//! Validates a proposed move against bounds and terrain, applies item
//! pickup, and commits the marker update to the grid store. Illegal moves
//! (wall bump, off-grid) are silent no-ops: no error, position unchanged.

use rand::Rng;

use crate::config::game::{GOLD_MAX, GOLD_MIN};
use crate::game::entities::Player;
use crate::game::store::GridStore;
use crate::game::types::{Direction, Position};

/// Result of one attempted move.
#[derive(Debug, Clone, Copy)]
pub struct MoveOutcome {
    /// Player position after resolution (unchanged on a rejected move).
    pub position: Position,
    pub picked_up_item: bool,
}

/// Attempt to move the player one step in `direction`.
pub fn move_player(store: &GridStore, player: &mut Player, direction: Direction) -> MoveOutcome {
    let old = player.pos;
    player.facing = direction;
    let candidate = player.next_position(direction);

    let mut picked_up_item = false;
    if !store.in_bounds(candidate) || store.is_wall(candidate) {
        // Rejected: stay put. The commit below still re-asserts the marker.
    } else {
        if store.is_item(candidate) {
            store.consume_item(candidate);
            let amount = rand::rng().random_range(GOLD_MIN..=GOLD_MAX);
            player.acquire_gold(amount);
            picked_up_item = true;
            log::info!("[Movement] item picked up, gold total: {}", player.gold);
        }
        player.pos = candidate;
    }

    // Vacated cell reverts to its terrain (which step 3 may just have
    // changed), new cell becomes Player.
    store.commit_player_move(old, player.pos);

    MoveOutcome {
        position: player.pos,
        picked_up_item,
    }
}
