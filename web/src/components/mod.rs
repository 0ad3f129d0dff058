// Reusable presentational components

mod floating_cube;
mod glass_card;

pub use floating_cube::{FloatingCube, DEFAULT_CUBE_DELAY, DEFAULT_CUBE_GRADIENT, DEFAULT_CUBE_SIZE};
pub use glass_card::GlassCard;
