//! Sparse Game of Life engine.
//!
//! The whole simulation state is a set of live coordinates. A generation only
//! looks at live cells and their Moore neighborhoods, so dead regions cost nothing.

use std::collections::HashSet;

use rand::Rng;

use super::{Bounds, Coord};

/// All currently alive cells. Absence means dead.
pub type LiveSet = HashSet<Coord>;

/// B3/S23: a live cell with 2 or 3 neighbors survives,
/// a dead cell with exactly 3 neighbors is born, everything else is dead.
pub const fn next_state(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// Moore neighborhood of `pos`, clipped to `bounds`.
///
/// Offsets are visited column-major: dx in (-1, 0, 1), then dy in (-1, 0, 1).
/// Negative coordinates are dropped, and so is anything past `bounds.width` or
/// `bounds.height`; coordinates equal to the bound are kept.
pub fn neighbors(pos: Coord, bounds: Bounds) -> Vec<Coord> {
    (-1..=1)
        .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| pos.offset(dx, dy))
        .filter(|&n| bounds.admits(n))
        .collect()
}

/// Number of in-bounds neighbors of `pos` that are alive in `live`
pub fn count_live_neighbors(pos: Coord, live: &LiveSet, bounds: Bounds) -> usize {
    neighbors(pos, bounds)
        .into_iter()
        .filter(|n| live.contains(n))
        .count()
}

/// Compute the next generation. The input is left untouched.
pub fn step(live: &LiveSet, bounds: Bounds) -> LiveSet {
    let mut next = LiveSet::with_capacity(live.len());
    // Candidates may include live cells too; re-checking them for birth is harmless.
    let mut candidates = HashSet::new();

    for &pos in live {
        let around = neighbors(pos, bounds);
        let count = around.iter().filter(|n| live.contains(n)).count();
        if next_state(true, count) {
            next.insert(pos);
        }
        candidates.extend(around);
    }

    next.extend(
        candidates
            .into_iter()
            .filter(|&pos| next_state(false, count_live_neighbors(pos, live, bounds))),
    );

    next
}

/// Draw `count` uniform positions in `[0, width) x [0, height)` with replacement.
/// Duplicates collapse, so the result can be smaller than `count`.
pub fn seed_random<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> LiveSet {
    if bounds.is_empty() {
        return LiveSet::new();
    }

    // Coordinates are i32, so wider grids are sampled over the representable part only
    let width = i32::try_from(bounds.width).unwrap_or(i32::MAX);
    let height = i32::try_from(bounds.height).unwrap_or(i32::MAX);

    (0..count)
        .map(|_| Coord::new(rng.random_range(0..width), rng.random_range(0..height)))
        .collect()
}
