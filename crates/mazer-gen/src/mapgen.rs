//! Random solvable maze generation.
//!
//! Each attempt blocks every cell independently with the configured
//! probability, clears the two endpoints, and keeps the grid only if the
//! goal is reachable from the start. There is no attempt cap: with a
//! validated configuration the chance of rejecting every attempt decays
//! geometrically.

use mazer_core::{ConfigResult, Grid, Position};
use mazer_paths::is_solvable;
use rand::Rng;

use crate::config::MazeConfig;

/// Maze generator owning its random source.
///
/// Seed the generator (for example with `StdRng::seed_from_u64`) for
/// reproducible mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    attempts: usize,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng, attempts: 0 }
    }

    /// Number of grids sampled by the last successful
    /// [`generate`](Self::generate) call.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Sample one random grid with the endpoints cleared. The result may
    /// not be solvable.
    ///
    /// `config` is checked with [`MazeConfig::validate`] first.
    pub fn sample(&mut self, config: &MazeConfig) -> ConfigResult<Grid> {
        config.validate()?;
        self.fill(config)
    }

    fn fill(&mut self, config: &MazeConfig) -> ConfigResult<Grid> {
        let mut grid = Grid::new(config.rows, config.cols)?;
        let p = config.blocked_probability;
        grid.fill_fn(|_| self.rng.random_bool(p));
        grid.set_blocked(config.start, false);
        grid.set_blocked(config.goal, false);
        Ok(grid)
    }

    /// Generate a grid in which `config.goal` is reachable from
    /// `config.start`.
    ///
    /// Configuration errors are reported before any sampling.
    pub fn generate(&mut self, config: &MazeConfig) -> ConfigResult<Grid> {
        config.validate()?;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let grid = self.fill(config)?;
            if is_solvable(&grid, config.start, config.goal) {
                log::debug!(
                    "generated {}x{} maze after {} attempt(s), {} blocked",
                    config.rows,
                    config.cols,
                    attempts,
                    grid.count_blocked()
                );
                self.attempts = attempts;
                return Ok(grid);
            }
            log::trace!("attempt {attempts}: goal unreachable, resampling");
        }
    }
}

/// Generate a solvable maze for `config` using the thread-local RNG.
pub fn generate(config: &MazeConfig) -> ConfigResult<Grid> {
    MazeGen::new(rand::rng()).generate(config)
}

/// Generate a solvable `rows × cols` maze between `start` and `goal` with
/// the default blocked-cell probability.
pub fn generate_maze(rows: i32, cols: i32, start: Position, goal: Position) -> ConfigResult<Grid> {
    generate(&MazeConfig::new(rows, cols).with_endpoints(start, goal))
}
