use super::{Coord, LiveSet};

/// A named arrangement of live cells relative to its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// The pattern's cells with its top-left corner at `origin`.
    /// Cells that would fall outside the `i32` range are dropped.
    pub fn cells_at(&self, origin: Coord) -> LiveSet {
        self.cells
            .iter()
            .filter_map(|&(dx, dy)| origin.offset(dx, dy))
            .collect()
    }

    /// Bring the pattern's cells to life, leaving other live cells alone
    pub fn place_on(&self, live: &mut LiveSet, origin: Coord) {
        live.extend(self.cells_at(origin));
    }
}

/// Small classic patterns
pub mod presets {
    use super::*;

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), block()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bounds, step};

    const BOUNDS: Bounds = Bounds::new(30, 30);

    #[test]
    fn test_dimensions() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let toad = presets::toad();
        assert_eq!((toad.width, toad.height), (4, 2));
    }

    #[test]
    fn test_place_on_keeps_existing_cells() {
        let mut live = LiveSet::new();
        live.insert(Coord::new(0, 0));
        presets::block().place_on(&mut live, Coord::new(10, 10));
        assert_eq!(live.len(), 5);
        assert!(live.contains(&Coord::new(11, 11)));
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let start = pattern.cells_at(Coord::new(10, 10));
            let once = step(&start, BOUNDS);
            assert_ne!(once, start, "{} should change after one step", pattern.name);
            assert_eq!(step(&once, BOUNDS), start, "{} should return after two steps", pattern.name);
        }
    }

    #[test]
    fn test_all_patterns_names_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
