use life_canvas::{Config, Session, icon, input, rendering};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        icon: Some(icon::glider_icon()),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut session = Session::new(Config::default());

    loop {
        // Input first so edits show up in this frame's render
        input::handle_mouse_paint(&mut session);
        session = input::process_keyboard_input(session);

        // Advance the simulation if running and due
        session = session.tick(get_frame_time());

        rendering::draw_grid(&session);

        next_frame().await;
    }
}
