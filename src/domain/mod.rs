mod cell;
mod grid;
mod rules;

pub use cell::{Cell, Fate};
pub use grid::Grid;
pub use rules::{ConwayRule, Rule, default_rule};
