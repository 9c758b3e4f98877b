// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Session coordination
pub mod application;

// Infrastructure layer - configuration, rendering, input, window setup
pub mod config;
pub mod icon;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Session;
pub use config::{Config, Palette};
pub use domain::{Cell, Fate, Grid};
