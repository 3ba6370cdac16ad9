pub mod movement;
pub mod projectiles;
pub mod render;

pub use movement::*;
pub use projectiles::*;
pub use render::*;
