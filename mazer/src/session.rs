//! Explicit driver state: one maze, one search result, one algorithm.

use std::fmt;

use mazer_core::{ConfigResult, Grid};
use mazer_gen::{MazeConfig, MazeGen};
use mazer_paths::{Algorithm, SearchResult};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::commands;
use crate::playback::Playback;

/// A user command forwarded by a front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Search the current maze with the current algorithm.
    Solve,
    /// Discard the current search result.
    Clear,
    /// Replace the maze with a fresh one and discard the result.
    Randomize,
    /// Switch to the next algorithm.
    ToggleAlgorithm,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Command::Solve => "solve",
            Command::Clear => "clear",
            Command::Randomize => "randomize",
            Command::ToggleAlgorithm => "toggle-algorithm",
        })
    }
}

/// State held by a front end between commands.
pub struct Session<R: Rng = ThreadRng> {
    config: MazeConfig,
    mapgen: MazeGen<R>,
    grid: Grid,
    result: SearchResult,
    algorithm: Algorithm,
}

impl Session<ThreadRng> {
    /// Start a session with a freshly generated maze, using the
    /// thread-local RNG.
    pub fn new(config: MazeConfig) -> ConfigResult<Self> {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session drawing mazes from `rng`.
    pub fn with_rng(config: MazeConfig, rng: R) -> ConfigResult<Self> {
        let mut mapgen = MazeGen::new(rng);
        let grid = mapgen.generate(&config)?;
        Ok(Self {
            config,
            mapgen,
            grid,
            result: SearchResult::empty(),
            algorithm: Algorithm::default(),
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The latest search result; empty before the first solve.
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Search the current maze with the current algorithm.
    pub fn solve(&mut self) -> &SearchResult {
        self.result = commands::solve(
            &self.grid,
            self.config.start,
            self.config.goal,
            self.algorithm,
        );
        log::info!(
            "solved with {}: {} visited, path of {} cells",
            self.algorithm,
            self.result.exploration.len(),
            self.result.path.len()
        );
        &self.result
    }

    /// Discard the current search result.
    pub fn clear(&mut self) {
        self.result = commands::clear();
    }

    /// Generate a new maze and discard the current search result.
    pub fn randomize(&mut self) -> ConfigResult<()> {
        self.grid = self.mapgen.generate(&self.config)?;
        self.result = commands::clear();
        log::info!("new maze after {} attempt(s)", self.mapgen.attempts());
        Ok(())
    }

    /// Switch to the next algorithm and return it. The current result is
    /// kept until the next solve.
    pub fn toggle_algorithm(&mut self) -> Algorithm {
        self.algorithm = commands::next_algorithm(self.algorithm);
        log::info!("algorithm: {}", self.algorithm);
        self.algorithm
    }

    /// Apply a front-end command.
    pub fn apply(&mut self, cmd: Command) -> ConfigResult<()> {
        log::debug!("command: {cmd}");
        match cmd {
            Command::Solve => {
                self.solve();
            }
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize()?,
            Command::ToggleAlgorithm => {
                self.toggle_algorithm();
            }
        }
        Ok(())
    }

    /// Step-by-step replay of the current result.
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(&self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{ConfigError, Position};
    use mazer_paths::{distance, is_solvable};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(seed: u64) -> Session<StdRng> {
        Session::with_rng(MazeConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn starts_with_solvable_maze_and_no_result() {
        let s = session(1);
        let c = *s.config();
        assert!(is_solvable(s.grid(), c.start, c.goal));
        assert!(s.result().is_empty());
        assert_eq!(s.algorithm(), Algorithm::Dfs);
    }

    #[test]
    fn solve_clear_cycle() {
        let mut s = session(2);
        let c = *s.config();
        s.apply(Command::Solve).unwrap();
        assert_eq!(s.result().path.first(), Some(&c.start));
        assert_eq!(s.result().path.last(), Some(&c.goal));
        s.apply(Command::Clear).unwrap();
        assert!(s.result().is_empty());
    }

    #[test]
    fn toggle_walks_all_algorithms() {
        let mut s = session(3);
        let mut seen = vec![s.algorithm()];
        for _ in 0..3 {
            s.apply(Command::ToggleAlgorithm).unwrap();
            seen.push(s.algorithm());
        }
        assert_eq!(seen, Algorithm::ALL.to_vec());
        s.apply(Command::ToggleAlgorithm).unwrap();
        assert_eq!(s.algorithm(), Algorithm::Dfs);
    }

    #[test]
    fn optimal_algorithms_agree_on_length() {
        let mut s = session(4);
        let c = *s.config();
        let shortest = distance(s.grid(), c.start, c.goal).unwrap();
        for algo in [Algorithm::Bfs, Algorithm::AStar, Algorithm::Dijkstra] {
            s.set_algorithm(algo);
            assert_eq!(s.solve().path_len(), Some(shortest), "{algo}");
        }
    }

    #[test]
    fn randomize_replaces_maze_and_clears_result() {
        let mut s = session(5);
        s.solve();
        assert!(s.result().found());
        let before = s.grid().clone();
        s.apply(Command::Randomize).unwrap();
        assert!(s.result().is_empty());
        // Two independent 400-cell fair-coin grids are equal with
        // negligible probability.
        assert_ne!(&before, s.grid());
    }

    #[test]
    fn playback_follows_result() {
        let mut s = session(6);
        s.set_algorithm(Algorithm::Bfs);
        s.solve();
        let steps = s.result().exploration.len();
        let mut pb = s.playback();
        assert_eq!(pb.advance_by(usize::MAX), steps);
        assert_eq!(pb.path(), &s.result().path[..]);
    }

    #[test]
    fn invalid_config_rejected_up_front() {
        let config = MazeConfig::new(4, 4).with_endpoints(Position::ZERO, Position::new(4, 4));
        let err = Session::with_rng(config, StdRng::seed_from_u64(0)).err();
        assert!(matches!(err, Some(ConfigError::OutOfBounds { .. })));
    }
}
