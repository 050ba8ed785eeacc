// Domain layer - sparse Life engine
pub mod domain;

// Application layer - simulation driver
pub mod application;

pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Bounds, Coord, LiveSet, Pattern, presets};
pub use application::GameState;
