use crate::domain::EdgePolicy;
use crate::error::{LifeError, Result};

/// Construction options for a [`Life`](crate::Life) engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    /// How neighbors past the grid edge are resolved.
    pub edge_policy: EdgePolicy,
    /// Share of the cell count scattered alive by random seeding.
    pub fill: f64,
    /// Grids with at least this many cells step rows in parallel.
    pub parallel_threshold: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::Toroidal,
            fill: 0.25,
            parallel_threshold: 256 * 256,
        }
    }
}

impl LifeConfig {
    /// Set the edge policy (builder pattern)
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Set the random fill ratio (builder pattern)
    pub fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }

    /// Set the parallel stepping threshold, in cells (builder pattern)
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    /// Always step serially
    pub fn serial(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    /// Always step in parallel
    pub fn parallel(self) -> Self {
        self.with_parallel_threshold(0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.fill) {
            Ok(())
        } else {
            Err(LifeError::InvalidFill(self.fill))
        }
    }
}
