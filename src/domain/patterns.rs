use super::{Cell, Grid};
use crate::error::{LifeError, Result};

/// A set of live cells that can be stamped onto a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &str, description: &str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| x.saturating_add(1)).max().unwrap_or(0);
        let height = cells.iter().map(|(_, y)| y.saturating_add(1)).max().unwrap_or(0);
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            width,
            height,
            cells,
        }
    }

    /// Parse the plaintext format: `O`, `o` or `*` for live cells, `.` for dead,
    /// lines starting with `!` are comments.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.starts_with('!'));

        for (y, (line_no, line)) in rows.enumerate() {
            for (x, ch) in line.trim_end().chars().enumerate() {
                match ch {
                    'O' | 'o' | '*' => cells.push((x, y)),
                    '.' => {}
                    found => {
                        return Err(LifeError::InvalidPattern {
                            line: line_no + 1,
                            column: x + 1,
                            found,
                        });
                    }
                }
            }
        }

        Ok(Self::new(name, "", cells))
    }

    /// Stamp the pattern onto the grid with its top-left corner at (x, y).
    /// Fails without touching the grid if any cell would land outside it.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> Result<()> {
        let (cols, rows) = grid.dimensions();
        let positions = self
            .cells
            .iter()
            .map(|&(dx, dy)| {
                let px = x.checked_add(dx).filter(|&px| px < cols);
                let py = y.checked_add(dy).filter(|&py| py < rows);
                px.zip(py).ok_or(LifeError::OutOfBounds {
                    x: x.saturating_add(dx),
                    y: y.saturating_add(dy),
                    cols,
                    rows,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (px, py) in positions {
            grid.set(px, py, Cell::Alive);
        }
        Ok(())
    }
}

/// Classic patterns used to seed small universes
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}
