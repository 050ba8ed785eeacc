use macroquad::prelude::*;

use crate::application::GameState;
use crate::config::TILE_SIZE;
use crate::domain::{Coord, presets};

/// Map a pixel position to the cell under it.
/// Returns None for positions left of or above the window.
pub fn pixel_to_coord(x: f32, y: f32) -> Option<Coord> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    Some(Coord::new(x as i32 / TILE_SIZE, y as i32 / TILE_SIZE))
}

/// Toggle the clicked cell on any left or right mouse press
pub fn handle_mouse_toggle(state: &mut GameState, mouse_pos: (f32, f32)) {
    let pressed = is_mouse_button_pressed(MouseButton::Left)
        || is_mouse_button_pressed(MouseButton::Right);
    if !pressed {
        return;
    }

    if let Some(pos) = pixel_to_coord(mouse_pos.0, mouse_pos.1) {
        state.toggle_cell(pos);
    }
}

type KeyAction = (KeyCode, &'static str, fn(GameState) -> GameState);

/// Whole-state commands
const COMMAND_KEYS: [KeyAction; 3] = [
    (KeyCode::Space, "Space", GameState::toggle_playing),
    (KeyCode::C, "C", GameState::clear),
    (KeyCode::G, "G", GameState::randomize),
];

/// Keys stamping `presets::all_patterns()` in order
const PATTERN_KEYS: [(KeyCode, &str); 5] = [
    (KeyCode::Key1, "1"),
    (KeyCode::Key2, "2"),
    (KeyCode::Key3, "3"),
    (KeyCode::Key4, "4"),
    (KeyCode::Key5, "5"),
];

/// One-line summary of the bound keys, for the status overlay
pub fn key_hint() -> String {
    let mut labels: Vec<String> = COMMAND_KEYS
        .iter()
        .map(|(_, label, _)| label.to_string())
        .collect();
    if let (Some((_, first)), Some((_, last))) = (PATTERN_KEYS.first(), PATTERN_KEYS.last()) {
        labels.push(format!("{}-{}", first, last));
    }
    labels.join("  ")
}

/// Stamp a preset under the cursor with the number keys
pub fn handle_pattern_keys(state: &mut GameState, mouse_pos: (f32, f32)) {
    let Some(origin) = pixel_to_coord(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    PATTERN_KEYS
        .iter()
        .zip(presets::all_patterns())
        .filter(|((key, _), _)| is_key_pressed(*key))
        .for_each(|(_, pattern)| state.place_pattern(&pattern, origin));
}

/// Process keyboard commands functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    COMMAND_KEYS.iter().fold(state, |s, (key, _, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
