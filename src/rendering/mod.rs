use macroquad::prelude::*;

use crate::application::GameState;
use crate::config::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::domain::LiveSet;
use crate::input::key_hint;

pub fn background_color() -> Color {
    Color::from_rgba(128, 128, 128, 255)
}

/// Draw live cells, then the grid lines on top
pub fn draw_grid(cells: &LiveSet) {
    let tile = TILE_SIZE as f32;
    let (width, height) = (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

    let alive_color = Color::from_rgba(255, 255, 0, 255); // Yellow
    let grid_line_color = BLACK;

    for pos in cells {
        draw_rectangle(pos.col as f32 * tile, pos.row as f32 * tile, tile, tile, alive_color);
    }

    for row in 0..GRID_HEIGHT {
        let y = row as f32 * tile;
        draw_line(0.0, y, width, y, 1.0, grid_line_color);
    }
    // Shifted one pixel left so the line sits on the previous column's edge
    for col in 0..GRID_WIDTH {
        let x = col as f32 * tile - 1.0;
        draw_line(x, 0.0, x, height, 1.0, grid_line_color);
    }
}

/// Status overlay: play state, generation and population
pub fn draw_status(state: &GameState) {
    let (label, color) = if state.is_playing {
        ("Playing", Color::from_rgba(0, 160, 0, 255))
    } else {
        ("Paused", Color::from_rgba(200, 90, 0, 255))
    };

    let panel_height = if state.last_pattern.is_some() { 76.0 } else { 58.0 };
    draw_rectangle(4.0, 4.0, 260.0, panel_height, Color::from_rgba(30, 30, 30, 200));
    draw_text(label, 12.0, 24.0, 22.0, color);
    draw_text(
        &format!("Gen {} | {} alive", state.generation, state.cells.len()),
        12.0,
        44.0,
        16.0,
        WHITE,
    );
    draw_text(&key_hint(), 12.0, 58.0, 14.0, GRAY);
    if let Some((name, description)) = state.last_pattern {
        draw_text(&format!("{}: {}", name, description), 12.0, 74.0, 14.0, LIGHTGRAY);
    }
}
