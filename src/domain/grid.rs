use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, EdgePolicy};

/// Moore neighborhood offsets, row by row
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// One buffer of cell state, row-major.
/// The engine keeps two of these and swaps them every generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Wrap existing row-major cells. Caller guarantees `cells.len() == width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position. Returns false if the position is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Count live cells in the Moore neighborhood of (x, y)
    pub fn count_live_neighbors(&self, x: usize, y: usize, edges: EdgePolicy) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBORS {
            let (Some(nx), Some(ny)) = (
                edges.resolve(x, dx, self.width),
                edges.resolve(y, dy, self.height),
            ) else {
                continue;
            };
            if self.cells[self.index(nx, ny)].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Compute the next generation of row `y` into `out`
    fn evolve_row(&self, y: usize, out: &mut [Cell], edges: EdgePolicy) {
        for (x, next) in out.iter_mut().enumerate() {
            let current = self.cells[self.index(x, y)];
            *next = current.evolve(self.count_live_neighbors(x, y, edges));
        }
    }

    /// Write the next generation into `next` (serial).
    /// Only `self` is read, so no update is visible to other cells mid-step.
    pub fn evolve_into(&self, next: &mut Grid, edges: EdgePolicy) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.width == 0 {
            return;
        }
        next.cells
            .chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.evolve_row(y, row, edges));
    }

    /// Parallel version of [`Grid::evolve_into`]; each worker owns one output row
    pub fn evolve_into_parallel(&self, next: &mut Grid, edges: EdgePolicy) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.width == 0 {
            return;
        }
        next.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.evolve_row(y, row, edges));
    }

    /// Scatter `count` live cells at random positions (repeats allowed)
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, count: usize) {
        if self.cells.is_empty() {
            return;
        }
        for _ in 0..count {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            self.set(x, y, Cell::Alive);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
