//! Interactive game loop for local play/testing.
//!
//! The loop owns the player and blocks on stdin between turns; projectile
//! tasks keep running on the runtime while it waits.

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::game::{GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y};
use crate::game::entities::Player;
use crate::game::observe::LogObserver;
use crate::game::store::GridStore;
use crate::game::systems::{ProjectileManager, move_player, print_grid, print_player_state};
use crate::game::types::{Direction, Position};

enum Action {
    Move(Direction),
    Fire,
    Redraw,
    Quit,
    None,
}

/// Prompt for one action.
fn get_player_input() -> Action {
    print!("Move: w/a/s/d  fire: f  redraw: r  quit: q > ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    match input.trim() {
        "w" => Action::Move(Direction::Up),
        "s" => Action::Move(Direction::Down),
        "a" => Action::Move(Direction::Left),
        "d" => Action::Move(Direction::Right),
        "f" => Action::Fire,
        "r" => Action::Redraw,
        "q" => Action::Quit,
        _ => Action::None,
    }
}

/// Run the main game loop for a single player.
pub async fn run_game_loop() {
    let spawn = Position {
        x: SPAWN_X,
        y: SPAWN_Y,
    };
    let store = Arc::new(
        GridStore::new(GRID_WIDTH, GRID_HEIGHT, spawn).with_observer(Box::new(LogObserver)),
    );
    let mut player = Player::new(spawn);
    let projectiles = ProjectileManager::new();

    println!("Game start!");
    print_player_state(&player, &projectiles);
    print_grid(&store);

    loop {
        match get_player_input() {
            Action::Move(direction) => {
                let outcome = move_player(&store, &mut player, direction);
                if outcome.picked_up_item {
                    println!("Picked up an item! Gold: {}", player.gold);
                }
            }
            Action::Fire => {
                projectiles.fire(store.clone(), player.fire_projectile());
            }
            Action::Redraw => {
                // Regeneration is not coordinated with in-flight
                // projectiles; a stale trail write may land on the new grid.
                store.regenerate();
            }
            Action::Quit => {
                println!("Waiting for projectiles to land...");
                projectiles.join_all().await;
                break;
            }
            Action::None => {}
        }

        print_player_state(&player, &projectiles);
        print_grid(&store);
    }
}
