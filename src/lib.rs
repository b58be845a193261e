// Domain layer - the cellular automaton itself
pub mod domain;

// Application layer - tick cadence for an external UI driver
pub mod application;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::Driver;
pub use config::LifeConfig;
pub use domain::{Cell, EdgePolicy, Grid, Life, Pattern, Seeding, presets};
pub use error::{LifeError, Result};
