use macroquad::prelude::Color;

/// Display colors for the four things the renderer draws.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Dead cells
    pub background: Color,
    /// The 1 px gaps between cell rectangles
    pub grid_lines: Color,
    /// Cells dying this generation
    pub dying: Color,
    /// Cells alive next generation
    pub alive: Color,
}

/// Startup configuration for one interactive session. Fixed at launch,
/// passed into the session at construction so tests can run with other
/// grid sizes without touching globals.
#[derive(Clone, Copy)]
pub struct Config {
    pub window_width: i32,
    pub window_height: i32,
    /// Pixel size of one cell; the grid dimensions are derived from it
    pub cell_px: i32,
    /// Simulation speed while running
    pub updates_per_second: f32,
    pub palette: Palette,
}

impl Config {
    /// Number of grid columns (window width / cell size)
    pub const fn cols(&self) -> usize {
        (self.window_width / self.cell_px) as usize
    }

    /// Number of grid rows (window height / cell size)
    pub const fn rows(&self) -> usize {
        (self.window_height / self.cell_px) as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 800,
            cell_px: 20,
            updates_per_second: 10.0,
            palette: Palette {
                background: Color::from_rgba(10, 10, 10, 255),
                grid_lines: Color::from_rgba(40, 40, 40, 255),
                dying: Color::from_rgba(170, 170, 170, 255),
                alive: Color::from_rgba(46, 139, 87, 255),
            },
        }
    }
}
