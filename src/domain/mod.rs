mod cell;
mod edge;
mod grid;
mod life;
mod patterns;

pub use cell::Cell;
pub use edge::EdgePolicy;
pub use grid::Grid;
pub use life::{Life, Seeding};
pub use patterns::{Pattern, presets};
