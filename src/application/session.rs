use crate::config::Config;
use crate::domain::{Cell, Fate, Grid, Rule, default_rule};

/// Session orchestrates one interactive run.
/// This is the application layer that coordinates domain logic: it owns
/// the grid, the play/pause flag, and the fate buffer the renderer
/// draws from.
pub struct Session {
    config: Config,
    grid: Grid,
    rule: Box<dyn Rule>,
    fates: Vec<Fate>,
    is_running: bool,
    generation: u64,
    update_timer: f32,
    updates_per_second: f32,
}

impl Session {
    /// Create a new paused session with an all-dead grid sized from the
    /// configuration.
    pub fn new(config: Config) -> Self {
        let grid = Grid::new(config.cols(), config.rows());
        let rule = default_rule();
        let fates = grid.step(rule.as_ref(), false).1;
        Self {
            updates_per_second: config.updates_per_second,
            config,
            grid,
            rule,
            fates,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Per-cell frame colors, row-major, same dimensions as the grid
    pub fn fates(&self) -> &[Fate] {
        &self.fates
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Recompute the resting-color fate buffer without advancing the
    /// grid. Called after every edit so the next frame shows it.
    fn refresh(&mut self) {
        self.fates = self.grid.step(self.rule.as_ref(), false).1;
    }

    /// Toggle play/pause state. The grid itself is untouched; the fate
    /// buffer is refreshed so the toggle is visible immediately instead
    /// of waiting for the next tick.
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.refresh();
        self
    }

    /// Clear grid, reset generation counter, and force pause
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self.update_timer = 0.0;
        self.refresh();
        self
    }

    /// Randomize grid and force pause
    pub fn randomize(mut self) -> Self {
        self.grid = self.grid.randomize(&mut rand::rng());
        self.generation = 0;
        self.is_running = false;
        self.refresh();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Paint the cell under a window pixel position. Coordinates that
    /// map outside the grid are ignored; painting never fails.
    pub fn paint(&mut self, px: f32, py: f32, brush: Cell) {
        let cell_px = self.config.cell_px as f32;
        let x = (px / cell_px).floor() as i64;
        let y = (py / cell_px).floor() as i64;

        let (cols, rows) = self.grid.dimensions();
        if x < 0 || y < 0 || x >= cols as i64 || y >= rows as i64 {
            return;
        }

        self.grid.set(x as usize, y as usize, brush);
        self.refresh();
    }

    /// Update simulation by one frame. Advances a generation only while
    /// running and only once the tick interval has elapsed, which caps
    /// the simulation rate independently of the frame rate.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            let (next, fates) = self.grid.step(self.rule.as_ref(), true);
            self.grid = next;
            self.fates = fates;
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        Config {
            window_width: 100,
            window_height: 80,
            cell_px: 10,
            ..Config::default()
        }
    }

    // One full tick interval at the default 10 gen/s
    const INTERVAL: f32 = 0.1;

    #[test]
    fn test_starts_paused_and_empty() {
        let session = Session::new(small_config());
        assert!(!session.is_running());
        assert_eq!(session.grid().dimensions(), (10, 8));
        assert_eq!(session.grid().population(), 0);
        assert!(session.fates().iter().all(|&f| f == Fate::Background));
    }

    #[test]
    fn test_double_toggle_restores_state_without_touching_grid() {
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        let before = session.grid().clone();

        let session = session.toggle_running();
        assert!(session.is_running());
        let session = session.toggle_running();
        assert!(!session.is_running());
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn test_paint_maps_pixels_to_cells() {
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        assert_eq!(session.grid().get(3, 2), Some(Cell::Alive));
        // Edited cells show up in the resting colors right away
        assert_eq!(session.fates()[2 * 10 + 3], Fate::WillBeAlive);
    }

    #[test]
    fn test_paint_out_of_bounds_is_a_noop() {
        let mut session = Session::new(small_config());
        session.paint(5000.0, 25.0, Cell::Alive);
        session.paint(35.0, 5000.0, Cell::Alive);
        session.paint(-3.0, 25.0, Cell::Alive);
        session.paint(35.0, -0.5, Cell::Alive);
        assert_eq!(session.grid().population(), 0);
    }

    #[test]
    fn test_erase_brush_kills_cell() {
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        session.paint(35.0, 25.0, Cell::Dead);
        assert_eq!(session.grid().population(), 0);
    }

    #[test]
    fn test_clear_forces_pause_and_kills_grid() {
        let mut session = Session::new(small_config());
        session.paint(15.0, 15.0, Cell::Alive);
        let session = session.toggle_running().clear();
        assert!(!session.is_running());
        assert_eq!(session.grid().population(), 0);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        let before = session.grid().clone();
        let session = session.tick(INTERVAL * 5.0);
        assert_eq!(session.grid(), &before);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_running_tick_advances_after_interval() {
        // A lone cell so the step is observable: it must die.
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        let session = session.toggle_running();

        // Not enough accumulated time yet
        let session = session.tick(INTERVAL / 4.0);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().population(), 1);

        let session = session.tick(INTERVAL);
        assert_eq!(session.generation(), 1);
        assert_eq!(session.grid().population(), 0);
    }

    #[test]
    fn test_tick_emits_transitional_colors() {
        let mut session = Session::new(small_config());
        session.paint(35.0, 25.0, Cell::Alive);
        let session = session.toggle_running().tick(INTERVAL);
        assert_eq!(session.fates()[2 * 10 + 3], Fate::WillDie);
    }

    #[test]
    fn test_randomize_pauses_and_seeds_grid() {
        let session = Session::new(small_config()).toggle_running().randomize();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let session = Session::new(small_config())
            .adjust_speed(1000.0)
            .toggle_running();
        // 60 gen/s max: a frame shorter than 1/60 s must not advance
        let session = session.tick(0.005);
        assert_eq!(session.generation(), 0);
        let session = session.tick(0.015);
        assert_eq!(session.generation(), 1);

        let mut session = Session::new(small_config()).adjust_speed(-1000.0);
        session.paint(35.0, 25.0, Cell::Alive);
        let session = session.toggle_running();
        // 1 gen/s min: just under a second is still too soon
        let session = session.tick(0.9);
        assert_eq!(session.generation(), 0);
        let session = session.tick(0.2);
        assert_eq!(session.generation(), 1);
    }
}
