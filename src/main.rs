use log::info;
use macroquad::prelude::*;
use sparse_life::{
    GameState,
    config::{GRID_BOUNDS, WINDOW_HEIGHT, WINDOW_WIDTH},
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    info!(
        "Starting with a {}x{} grid",
        GRID_BOUNDS.width, GRID_BOUNDS.height
    );

    let mut state = GameState::new(GRID_BOUNDS);

    loop {
        // Advance first, then apply this frame's input
        state = state.tick();

        let mouse_pos = mouse_position();
        input::handle_mouse_toggle(&mut state, mouse_pos);
        input::handle_pattern_keys(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        clear_background(rendering::background_color());
        rendering::draw_grid(&state.cells);
        rendering::draw_status(&state);

        next_frame().await;
    }
}
