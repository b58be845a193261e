use std::fmt;

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, EdgePolicy, Grid, Pattern};
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};

/// Initial contents of a new universe
#[derive(Clone, Debug, PartialEq)]
pub enum Seeding {
    /// Scatter `fill * cols * rows` live cells using this RNG seed
    Random(u64),
    /// Stamp a pattern with its top-left corner at the given cell
    Pattern { pattern: Pattern, x: usize, y: usize },
    /// Explicit row-major cell states
    Cells(Vec<bool>),
}

/// Conway's Game of Life on a fixed-size grid.
///
/// Holds the current generation plus a scratch buffer for the next one;
/// [`Life::step`] fills the scratch buffer from the current one and swaps,
/// so readers only ever see complete generations.
#[derive(Clone, Debug)]
pub struct Life {
    config: LifeConfig,
    current: Grid,
    next: Grid,
    generation: u64,
    seed: Option<u64>,
}

impl Life {
    /// Randomly seeded universe with default settings.
    /// The seed is drawn from OS entropy and can be read back via [`Life::seed`].
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        Self::with_seed(cols, rows, rand::rng().random())
    }

    /// Randomly seeded universe, reproducible from `seed`
    pub fn with_seed(cols: usize, rows: usize, seed: u64) -> Result<Self> {
        Self::with_config(cols, rows, LifeConfig::default(), Seeding::Random(seed))
    }

    /// Empty universe with `pattern` placed at `origin`
    pub fn from_pattern(
        cols: usize,
        rows: usize,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self> {
        let (x, y) = origin;
        Self::with_config(
            cols,
            rows,
            LifeConfig::default(),
            Seeding::Pattern { pattern: pattern.clone(), x, y },
        )
    }

    /// Universe from explicit row-major cell states, e.g. a [`Life::snapshot`]
    pub fn from_cells(
        cols: usize,
        rows: usize,
        cells: impl IntoIterator<Item = bool>,
    ) -> Result<Self> {
        Self::with_config(
            cols,
            rows,
            LifeConfig::default(),
            Seeding::Cells(cells.into_iter().collect()),
        )
    }

    pub fn with_config(
        cols: usize,
        rows: usize,
        config: LifeConfig,
        seeding: Seeding,
    ) -> Result<Self> {
        let total = cols
            .checked_mul(rows)
            .filter(|&n| n > 0)
            .ok_or(LifeError::InvalidDimensions { cols, rows })?;
        config.validate()?;

        let mut seed = None;
        let current = match seeding {
            Seeding::Random(s) => {
                seed = Some(s);
                let mut rng = StdRng::seed_from_u64(s);
                let mut grid = Grid::new(cols, rows);
                grid.scatter(&mut rng, (total as f64 * config.fill).round() as usize);
                grid
            }
            Seeding::Pattern { pattern, x, y } => {
                let mut grid = Grid::new(cols, rows);
                pattern.place_on(&mut grid, x, y)?;
                grid
            }
            Seeding::Cells(cells) => {
                if cells.len() != total {
                    return Err(LifeError::CellCountMismatch {
                        expected: total,
                        actual: cells.len(),
                    });
                }
                Grid::from_cells(cols, rows, cells.into_iter().map(Cell::from).collect())
            }
        };

        debug!(
            "new {}x{} {} universe, seed {:?}, population {}",
            cols,
            rows,
            config.edge_policy.name(),
            seed,
            current.population()
        );

        Ok(Self {
            config,
            next: Grid::new(cols, rows),
            current,
            generation: 0,
            seed,
        })
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let edges = self.config.edge_policy;
        if self.cols() * self.rows() >= self.config.parallel_threshold {
            self.current.evolve_into_parallel(&mut self.next, edges);
        } else {
            self.current.evolve_into(&mut self.next, edges);
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!("generation {} population {}", self.generation, self.population());
    }

    /// Whether (x, y) is alive in the current generation
    pub fn alive(&self, x: usize, y: usize) -> Result<bool> {
        self.get(x, y).ok_or(LifeError::OutOfBounds {
            x,
            y,
            cols: self.cols(),
            rows: self.rows(),
        })
    }

    /// Like [`Life::alive`] but `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.current.get(x, y).map(Cell::is_alive)
    }

    pub fn cols(&self) -> usize {
        self.current.dimensions().0
    }

    pub fn rows(&self) -> usize {
        self.current.dimensions().1
    }

    /// Number of completed steps since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.config.edge_policy
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// RNG seed of a randomly seeded universe
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Current generation as row-major booleans
    pub fn snapshot(&self) -> Vec<bool> {
        self.current.cells().iter().map(|c| c.is_alive()).collect()
    }

    /// All cells of the current generation as `(x, y, alive)`, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.current
            .iter_cells()
            .map(|(x, y, cell)| (x, y, cell.is_alive()))
    }
}

impl fmt::Display for Life {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn alive_cells(life: &Life) -> Vec<(usize, usize)> {
        life.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn bounded(cols: usize, rows: usize, pattern: &Pattern, x: usize, y: usize) -> Life {
        let config = LifeConfig::default().with_edge_policy(EdgePolicy::Bounded);
        Life::with_config(cols, rows, config, Seeding::Pattern { pattern: pattern.clone(), x, y })
            .unwrap()
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut life = Life::from_cells(3, 3, vec![false; 9]).unwrap();
        life.step();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        // Vertical blinker through the middle of a 5x5 torus
        let vertical = Pattern::new("Vertical", "", vec![(0, 0), (0, 1), (0, 2)]);
        let mut life = Life::from_pattern(5, 5, &vertical, (2, 1)).unwrap();
        assert_eq!(alive_cells(&life), vec![(2, 1), (2, 2), (2, 3)]);

        life.step();
        assert_eq!(alive_cells(&life), vec![(1, 2), (2, 2), (3, 2)]);

        life.step();
        assert_eq!(alive_cells(&life), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_blinker_bounded() {
        let mut life = bounded(5, 5, &presets::blinker(), 1, 2);
        life.step();
        assert_eq!(alive_cells(&life), vec![(2, 1), (2, 2), (2, 3)]);
        life.step();
        assert_eq!(alive_cells(&life), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_block_is_still_life() {
        for mut life in [
            Life::from_pattern(4, 4, &presets::block(), (1, 1)).unwrap(),
            bounded(4, 4, &presets::block(), 1, 1),
        ] {
            let before = life.snapshot();
            life.step();
            assert_eq!(life.snapshot(), before);
        }
    }

    #[test]
    fn test_corner_block_stable_under_both_edges() {
        // A block touching the bounded wall is still stable
        let mut walled = bounded(4, 4, &presets::block(), 0, 0);
        let before = walled.snapshot();
        walled.step();
        assert_eq!(walled.snapshot(), before);

        // On a torus it is the same block, just wrapped; also stable
        let mut wrapped = Life::from_pattern(4, 4, &presets::block(), (0, 0)).unwrap();
        wrapped.step();
        assert_eq!(wrapped.snapshot(), before);
    }

    #[test]
    fn test_glider_wraps_on_torus() {
        // A glider moves (+1, +1) every 4 generations; after 4 * 8 steps on
        // an 8x8 torus it is back where it started.
        let mut life = Life::from_pattern(8, 8, &presets::glider(), (0, 0)).unwrap();
        let start = life.snapshot();
        for _ in 0..32 {
            life.step();
            assert_eq!(life.population(), 5);
        }
        assert_eq!(life.snapshot(), start);
    }

    #[test]
    fn test_glider_settles_against_bounded_wall() {
        // Off a torus the glider crashes into the corner and becomes a block
        let mut life = bounded(8, 8, &presets::glider(), 0, 0);
        for _ in 0..40 {
            life.step();
        }
        assert_eq!(alive_cells(&life), vec![(6, 6), (7, 6), (6, 7), (7, 7)]);
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = Life::with_seed(40, 30, 42).unwrap();
        let mut b = Life::with_seed(40, 30, 42).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.seed(), Some(42));

        for _ in 0..2 {
            a.step();
            b.step();
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.population(), b.population());
    }

    #[test]
    fn test_random_seed_recorded() {
        let life = Life::new(10, 10).unwrap();
        let seed = life.seed().unwrap();
        let replayed = Life::with_seed(10, 10, seed).unwrap();
        assert_eq!(life.snapshot(), replayed.snapshot());
    }

    #[test]
    fn test_random_fill() {
        let life = Life::with_seed(100, 100, 3).unwrap();
        // 2500 placements with collisions land somewhere below 2500
        assert!(life.population() > 2000 && life.population() <= 2500);

        let config = LifeConfig::default().with_fill(0.0);
        let empty = Life::with_config(10, 10, config, Seeding::Random(3)).unwrap();
        assert_eq!(empty.population(), 0);
    }

    #[test]
    fn test_alive_out_of_bounds() {
        let life = Life::with_seed(5, 4, 0).unwrap();
        for (x, y) in [(5, 0), (0, 4), (5, 4), (usize::MAX, 0), (0, usize::MAX), (1000, 1000)] {
            assert_eq!(
                life.alive(x, y),
                Err(LifeError::OutOfBounds { x, y, cols: 5, rows: 4 })
            );
            assert_eq!(life.get(x, y), None);
        }
        assert!(life.alive(4, 3).is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Life::new(0, 5).unwrap_err(),
            LifeError::InvalidDimensions { cols: 0, rows: 5 }
        );
        assert_eq!(
            Life::with_seed(5, 0, 1).unwrap_err(),
            LifeError::InvalidDimensions { cols: 5, rows: 0 }
        );
        assert!(Life::from_cells(usize::MAX, 2, []).is_err());
    }

    #[test]
    fn test_cell_count_mismatch() {
        assert_eq!(
            Life::from_cells(3, 3, vec![true; 8]).unwrap_err(),
            LifeError::CellCountMismatch { expected: 9, actual: 8 }
        );
    }

    #[test]
    fn test_pattern_outside_grid() {
        assert!(matches!(
            Life::from_pattern(4, 4, &presets::glider(), (2, 2)),
            Err(LifeError::OutOfBounds { .. })
        ));

        let pair = Pattern::new("Pair", "", vec![(1, 0), (2, 0)]);
        assert_eq!(
            Life::from_pattern(4, 4, &pair, (usize::MAX, 0)).unwrap_err(),
            LifeError::OutOfBounds { x: usize::MAX, y: 0, cols: 4, rows: 4 }
        );
    }

    #[test]
    fn test_invalid_fill() {
        let config = LifeConfig::default().with_fill(2.0);
        assert_eq!(
            Life::with_config(4, 4, config, Seeding::Random(0)).unwrap_err(),
            LifeError::InvalidFill(2.0)
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut life = Life::with_seed(30, 20, 9).unwrap();
        for _ in 0..5 {
            life.step();
        }

        let mut fresh = Life::from_cells(life.cols(), life.rows(), life.snapshot()).unwrap();
        life.step();
        fresh.step();
        assert_eq!(life.snapshot(), fresh.snapshot());
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        for edges in [EdgePolicy::Toroidal, EdgePolicy::Bounded] {
            let config = LifeConfig::default().with_edge_policy(edges);
            let mut serial =
                Life::with_config(70, 50, config.serial(), Seeding::Random(11)).unwrap();
            let mut parallel =
                Life::with_config(70, 50, config.parallel(), Seeding::Random(11)).unwrap();

            for _ in 0..10 {
                serial.step();
                parallel.step();
                assert_eq!(serial.snapshot(), parallel.snapshot());
            }
        }
    }

    #[test]
    fn test_accessors() {
        let life = Life::with_seed(7, 3, 5).unwrap();
        assert_eq!((life.cols(), life.rows()), (7, 3));
        assert_eq!(life.generation(), 0);
        assert_eq!(life.edge_policy(), EdgePolicy::Toroidal);
        assert_eq!(life.config(), &LifeConfig::default());
        assert_eq!(life.snapshot().len(), 21);
        assert_eq!(life.iter_cells().count(), 21);
    }

    #[test]
    fn test_display() {
        let life = Life::from_pattern(3, 2, &presets::blinker(), (0, 1)).unwrap();
        assert_eq!(life.to_string(), "...\nOOO\n");
    }
}
