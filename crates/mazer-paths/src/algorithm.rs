use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The interchangeable search strategies.
///
/// The variants form a fixed ordered set; [`next`](Self::next) cycles
/// through it in declaration order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Depth-first search (stack frontier).
    #[default]
    Dfs,
    /// Breadth-first search (queue frontier).
    Bfs,
    /// A* with the Manhattan heuristic (min-heap frontier).
    AStar,
    /// Dijkstra (min-heap frontier, no heuristic).
    Dijkstra,
}

impl Algorithm {
    /// All algorithms in cycling order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::AStar,
        Algorithm::Dijkstra,
    ];

    /// Position of `self` in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Algorithm::Dfs => 0,
            Algorithm::Bfs => 1,
            Algorithm::AStar => 2,
            Algorithm::Dijkstra => 3,
        }
    }

    /// The algorithm after `self`, wrapping around at the end.
    #[inline]
    pub const fn next(self) -> Algorithm {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    /// Whether the algorithm always finds a shortest path on unit-cost grids.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected dfs, bfs, astar or dijkstra)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
