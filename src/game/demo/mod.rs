// Demo module for the game. Provides the interactive terminal game loop
// used by the binary entry point.
pub mod game_loop;

pub use game_loop::*;
