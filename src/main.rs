//! Main entry point for the terminal demo.
//!
//! Initializes logging and the tokio runtime, then hands control to the
//! interactive game loop. Projectile tasks are spawned onto this runtime.

use rogue_grid::game::demo::run_game_loop;

#[tokio::main]
async fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    run_game_loop().await;
}
