mod coord;
mod engine;
mod patterns;

pub use coord::{Bounds, Coord};
pub use engine::{LiveSet, count_live_neighbors, neighbors, next_state, seed_random, step};
pub use patterns::{Pattern, presets};
