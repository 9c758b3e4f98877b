use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Cell;

/// Handle mouse painting on the grid. Left button paints, right button
/// erases, in either play state; positions outside the grid are ignored
/// by the session.
pub fn handle_mouse_paint(session: &mut Session) {
    let (mx, my) = mouse_position();

    if is_mouse_button_down(MouseButton::Left) {
        session.paint(mx, my, Cell::Alive);
    } else if is_mouse_button_down(MouseButton::Right) {
        session.paint(mx, my, Cell::Dead);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::Escape, Session::clear),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
