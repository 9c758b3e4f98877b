use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Fate;

/// Draw the whole grid from the session's fate buffer.
///
/// The background fill is the grid-line color; each cell is drawn one
/// pixel smaller than its slot so the fill shows through as grid lines.
pub fn draw_grid(session: &Session) {
    let palette = session.config().palette;
    let cell_px = session.config().cell_px as f32;
    let (cols, rows) = session.grid().dimensions();
    let fates = session.fates();

    clear_background(palette.grid_lines);

    for y in 0..rows {
        for x in 0..cols {
            let color = match fates[y * cols + x] {
                Fate::Background => palette.background,
                Fate::WillDie => palette.dying,
                Fate::WillBeAlive => palette.alive,
            };
            draw_rectangle(
                x as f32 * cell_px,
                y as f32 * cell_px,
                cell_px - 1.0,
                cell_px - 1.0,
                color,
            );
        }
    }
}
