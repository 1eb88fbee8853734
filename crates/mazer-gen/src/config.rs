//! Maze generation settings.

use mazer_core::{ConfigError, ConfigResult, Position, Range};

/// Dimensions, endpoints and wall density of a generated maze.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    /// Cell the search starts from. Always passable in generated mazes.
    pub start: Position,
    /// Cell the search looks for. Always passable in generated mazes.
    pub goal: Position,
    /// Chance of each cell being blocked, in `[0, 1)`.
    pub blocked_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

impl MazeConfig {
    /// Default density of blocked cells: a fair coin per cell.
    pub const DEFAULT_BLOCKED_PROBABILITY: f64 = 0.5;

    /// A `rows × cols` maze from the top-left to the bottom-right corner.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            start: Position::ZERO,
            goal: Position::new(rows - 1, cols - 1),
            blocked_probability: Self::DEFAULT_BLOCKED_PROBABILITY,
        }
    }

    /// Replace the endpoints.
    pub fn with_endpoints(mut self, start: Position, goal: Position) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    /// Replace the blocked-cell probability.
    pub fn with_blocked_probability(mut self, p: f64) -> Self {
        self.blocked_probability = p;
        self
    }

    /// The grid rectangle.
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Check that generation can terminate.
    ///
    /// The grid needs positive dimensions and at least 2 cells, both
    /// endpoints must lie inside it, and the probability must leave some
    /// cells free.
    pub fn validate(&self) -> ConfigResult<()> {
        let (rows, cols) = (self.rows, self.cols);
        if rows <= 0 || cols <= 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if self.bounds().len() < 2 {
            return Err(ConfigError::TooFewCells { rows, cols });
        }
        for (what, pos) in [("start", self.start), ("goal", self.goal)] {
            if !self.bounds().contains(pos) {
                return Err(ConfigError::OutOfBounds {
                    what,
                    pos,
                    rows,
                    cols,
                });
            }
        }
        if !(0.0..1.0).contains(&self.blocked_probability) {
            return Err(ConfigError::InvalidProbability(self.blocked_probability));
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = MazeConfig::new(8, 12).with_blocked_probability(0.3);
        let json = serde_json::to_string(&c).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
