use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{GRID_WIDTH, RANDOM_FILL_FACTOR, UPDATE_FREQUENCY};
use crate::domain::{Bounds, Coord, LiveSet, Pattern, seed_random, step};

/// GameState drives the simulation: it owns the live set between generations
/// and decides when the engine runs.
pub struct GameState {
    pub cells: LiveSet,
    pub bounds: Bounds,
    pub is_playing: bool,
    /// Frames counted since the last generation
    pub tick_count: u32,
    pub update_frequency: u32,
    pub generation: u64,
    /// Name and description of the most recently stamped pattern
    pub last_pattern: Option<(&'static str, &'static str)>,
    rng: StdRng,
}

impl GameState {
    /// Create an empty, paused state seeded from the OS
    pub fn new(bounds: Bounds) -> Self {
        Self::from_rng(bounds, StdRng::from_os_rng())
    }

    /// Create with a fixed RNG seed so randomize is reproducible
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: Bounds, rng: StdRng) -> Self {
        Self {
            cells: LiveSet::new(),
            bounds,
            is_playing: false,
            tick_count: 0,
            update_frequency: UPDATE_FREQUENCY,
            generation: 0,
            last_pattern: None,
            rng,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_playing(mut self) -> Self {
        self.is_playing = !self.is_playing;
        self.tick_count = 0;
        info!("{}", if self.is_playing { "Playing" } else { "Paused" });
        self
    }

    /// Kill every cell and stop
    pub fn clear(mut self) -> Self {
        self.cells = LiveSet::new();
        self.tick_count = 0;
        self.generation = 0;
        self.is_playing = false;
        self.last_pattern = None;
        info!("Cleared grid");
        self
    }

    /// Replace the live set with a random one. Play state is left as is.
    pub fn randomize(mut self) -> Self {
        let count = self.rng.random_range(RANDOM_FILL_FACTOR) * GRID_WIDTH as usize;
        self.cells = seed_random(count, self.bounds, &mut self.rng);
        self.tick_count = 0;
        self.generation = 0;
        info!("Randomized: {} draws, {} live cells", count, self.cells.len());
        self
    }

    /// Flip a single cell between alive and dead
    pub fn toggle_cell(&mut self, pos: Coord) {
        if !self.cells.remove(&pos) {
            self.cells.insert(pos);
        }
        debug!("Toggled {:?}, population {}", pos, self.cells.len());
    }

    /// Stamp a pattern with its top-left corner at `origin`
    pub fn place_pattern(&mut self, pattern: &Pattern, origin: Coord) {
        pattern.place_on(&mut self.cells, origin);
        self.last_pattern = Some((pattern.name, pattern.description));
        info!("Placed {} at {:?}", pattern.name, origin);
    }

    /// Advance one frame. Runs a generation every `update_frequency` frames while playing.
    pub fn tick(mut self) -> Self {
        if !self.is_playing {
            return self;
        }

        self.tick_count += 1;
        if self.tick_count >= self.update_frequency {
            self.tick_count = 0;
            self.cells = step(&self.cells, self.bounds);
            self.generation += 1;
            debug!("Generation {}: {} live cells", self.generation, self.cells.len());
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_BOUNDS;
    use crate::domain::presets;

    fn state() -> GameState {
        GameState::with_seed(GRID_BOUNDS, 11)
    }

    fn tick_n(state: GameState, n: u32) -> GameState {
        (0..n).fold(state, |s, _| s.tick())
    }

    #[test]
    fn test_new_is_empty_and_paused() {
        let s = state();
        assert!(s.cells.is_empty());
        assert!(!s.is_playing);
        assert_eq!(s.generation, 0);
        assert_eq!(s.update_frequency, UPDATE_FREQUENCY);
    }

    #[test]
    fn test_toggle_cell_inserts_then_removes() {
        let mut s = state();
        let pos = Coord::new(4, 9);
        s.toggle_cell(pos);
        assert!(s.cells.contains(&pos));
        s.toggle_cell(pos);
        assert!(!s.cells.contains(&pos));
    }

    #[test]
    fn test_paused_tick_never_steps() {
        let mut s = state();
        s.toggle_cell(Coord::new(5, 5));
        let s = tick_n(s, UPDATE_FREQUENCY * 3);
        assert_eq!(s.generation, 0);
        assert_eq!(s.tick_count, 0);
        assert!(s.cells.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn test_playing_steps_every_update_frequency() {
        let mut s = state();
        s.place_pattern(&presets::blinker(), Coord::new(10, 10));
        let start = s.cells.clone();
        let s = s.toggle_playing();

        let s = tick_n(s, UPDATE_FREQUENCY - 1);
        assert_eq!(s.generation, 0);
        assert_eq!(s.cells, start);

        let s = s.tick();
        assert_eq!(s.generation, 1);
        assert_eq!(s.tick_count, 0);
        assert_ne!(s.cells, start);

        let s = tick_n(s, UPDATE_FREQUENCY);
        assert_eq!(s.generation, 2);
        assert_eq!(s.cells, start);
    }

    #[test]
    fn test_toggle_playing_resets_counter() {
        let s = state().toggle_playing();
        let s = tick_n(s, 5);
        assert_eq!(s.tick_count, 5);
        let s = s.toggle_playing();
        assert!(!s.is_playing);
        assert_eq!(s.tick_count, 0);
    }

    #[test]
    fn test_clear_stops_and_empties() {
        let mut s = state();
        s.place_pattern(&presets::glider(), Coord::new(1, 1));
        let s = tick_n(s.toggle_playing(), UPDATE_FREQUENCY);
        assert_eq!(s.generation, 1);

        let s = s.clear();
        assert!(s.cells.is_empty());
        assert!(!s.is_playing);
        assert_eq!(s.tick_count, 0);
        assert_eq!(s.generation, 0);
    }

    #[test]
    fn test_place_pattern_remembers_description() {
        let mut s = state();
        assert_eq!(s.last_pattern, None);

        let toad = presets::toad();
        s.place_pattern(&toad, Coord::new(3, 3));
        assert_eq!(s.last_pattern, Some(("Toad", toad.description)));

        let s = s.clear();
        assert_eq!(s.last_pattern, None);
    }

    #[test]
    fn test_randomize_fills_within_grid() {
        let s = state().randomize();
        let max_draws = (RANDOM_FILL_FACTOR.end - 1) * GRID_WIDTH as usize;
        assert!(!s.cells.is_empty());
        assert!(s.cells.len() <= max_draws);
        assert!(s.cells.iter().all(|c| {
            (0..GRID_BOUNDS.width as i32).contains(&c.col)
                && (0..GRID_BOUNDS.height as i32).contains(&c.row)
        }));
    }

    #[test]
    fn test_randomize_keeps_play_state() {
        let s = tick_n(state().toggle_playing(), 3).randomize();
        assert!(s.is_playing);
        assert_eq!(s.tick_count, 0);
    }
}
