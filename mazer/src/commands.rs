//! The user commands as pure functions over explicit state.

use mazer_core::{ConfigResult, Grid, Position};
use mazer_paths::{Algorithm, SearchResult};

/// Search `grid` from `start` to `goal`.
pub fn solve(grid: &Grid, start: Position, goal: Position, algorithm: Algorithm) -> SearchResult {
    mazer_paths::search(grid, start, goal, algorithm)
}

/// The empty result shown before any search or after clearing.
pub fn clear() -> SearchResult {
    SearchResult::empty()
}

/// A fresh solvable maze and an empty result.
pub fn randomize(
    rows: i32,
    cols: i32,
    start: Position,
    goal: Position,
) -> ConfigResult<(Grid, SearchResult)> {
    let grid = mazer_gen::generate_maze(rows, cols, start, goal)?;
    Ok((grid, clear()))
}

/// The algorithm after `algorithm` in the fixed cycle.
pub fn next_algorithm(algorithm: Algorithm) -> Algorithm {
    algorithm.next()
}
