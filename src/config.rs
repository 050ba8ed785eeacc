use std::ops::Range;

use crate::domain::Bounds;

pub const WINDOW_WIDTH: i32 = 1200;
pub const WINDOW_HEIGHT: i32 = 1000;

/// Side length of one cell in pixels
pub const TILE_SIZE: i32 = 10;

pub const GRID_WIDTH: u32 = (WINDOW_WIDTH / TILE_SIZE) as u32;
pub const GRID_HEIGHT: u32 = (WINDOW_HEIGHT / TILE_SIZE) as u32;
pub const GRID_BOUNDS: Bounds = Bounds::new(GRID_WIDTH, GRID_HEIGHT);

/// Frames between generations while playing
pub const UPDATE_FREQUENCY: u32 = 30;

/// Randomize draws `k * GRID_WIDTH` cells with `k` picked from this range
pub const RANDOM_FILL_FACTOR: Range<usize> = 5..10;
