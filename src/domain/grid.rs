use super::{Cell, Fate, rules::Rule};
use rand::Rng;

/// Grid manages the 2D cellular automaton state.
/// Uses functional, immutable updates for predictable state transitions.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (mutable for painting).
    /// Out-of-bounds coordinates are a no-op.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count alive cells in the whole grid
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors in the Moore neighborhood. The grid does not
    /// wrap: positions outside the bounds contribute zero.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 {
                    return None;
                }
                self.get(nx as usize, ny as usize)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation, returning the next grid together with the
    /// per-cell frame colors.
    ///
    /// The next generation is written to a fresh grid while this one is
    /// only read, so neighbor counts never observe a half-updated state.
    /// `with_progress` selects the transitional highlights (dying cells,
    /// births) over the resting colors; callers that only want to redraw
    /// an edited grid pass `false` and discard the returned grid.
    pub fn step(&self, rule: &dyn Rule, with_progress: bool) -> (Self, Vec<Fate>) {
        let (cells, fates): (Vec<Cell>, Vec<Fate>) = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.get(x, y).unwrap();
                let next = rule.evolve(current, self.live_neighbors(x, y));
                (next, Fate::classify(current, next, with_progress))
            })
            .unzip();

        (
            Self {
                width: self.width,
                height: self.height,
                cells,
            },
            fates,
        )
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize grid (30% chance of alive)
    pub fn randomize(mut self, rng: &mut impl Rng) -> Self {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }
}
