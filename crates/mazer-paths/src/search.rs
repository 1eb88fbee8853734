//! The unified search engine.
//!
//! Depth-first, breadth-first, Dijkstra and A* share a single loop. They
//! differ only in the [`Frontier`] chosen when the search is created and in
//! whether the heuristic is added to the pushed priority.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use mazer_core::Position;

use crate::algorithm::Algorithm;
use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// Outcome of a complete search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Positions in the order they were popped and marked visited.
    pub exploration: Vec<Position>,
    /// Start-to-goal path, both ends included. Empty if the goal was not
    /// reached.
    pub path: Vec<Position>,
}

impl SearchResult {
    /// The empty result: nothing explored, no path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing was explored and no path was found.
    pub fn is_empty(&self) -> bool {
        self.exploration.is_empty() && self.path.is_empty()
    }

    /// Whether a path to the goal was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps (edges) on the path, or `None` without a path.
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Progress of a [`Search`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The frontier still has entries to pop.
    Running,
    /// The goal was popped.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// A lazy, restartable search.
///
/// Iterating yields each position as it is visited, in exploration order.
/// Iteration ends when the goal is popped or the frontier empties; the goal
/// itself is never yielded. [`finish`](Self::finish) drains the remaining
/// steps and returns the [`SearchResult`].
///
/// The pather is only borrowed, so any number of searches may run over the
/// same grid, each with its own private state.
pub struct Search<'a, P> {
    pather: &'a P,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    estimate: bool,
    frontier: Frontier,
    visited: HashSet<Position>,
    came_from: HashMap<Position, Option<Position>>,
    cost_so_far: HashMap<Position, i32>,
    exploration: Vec<Position>,
    status: SearchStatus,
    nbuf: Vec<Position>,
}

impl<'a, P: AstarPather> Search<'a, P> {
    /// Prepare a search from `start` to `goal`. No work happens until the
    /// search is iterated or finished.
    pub fn new(pather: &'a P, start: Position, goal: Position, algorithm: Algorithm) -> Self {
        let mut search = Self {
            pather,
            start,
            goal,
            algorithm,
            estimate: algorithm == Algorithm::AStar,
            frontier: Frontier::for_algorithm(algorithm),
            visited: HashSet::new(),
            came_from: HashMap::new(),
            cost_so_far: HashMap::new(),
            exploration: Vec::new(),
            status: SearchStatus::Running,
            nbuf: Vec::with_capacity(4),
        };
        search.seed();
        search
    }

    fn seed(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.came_from.clear();
        self.cost_so_far.clear();
        self.exploration.clear();

        self.came_from.insert(self.start, None);
        if self.frontier.is_ordered() {
            self.cost_so_far.insert(self.start, 0);
        }
        self.frontier.push(self.start, 0);
        self.status = SearchStatus::Running;
    }

    /// Reset to the initial state. Replaying yields the same sequence.
    pub fn restart(&mut self) {
        self.seed();
    }

    /// The algorithm this search runs.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether the search has stopped, successfully or not.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status != SearchStatus::Running
    }

    /// Positions visited so far.
    #[inline]
    pub fn exploration(&self) -> &[Position] {
        &self.exploration
    }

    /// Number of entries currently in the frontier, stale copies included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The reconstructed path, or an empty vector unless the goal has been
    /// reached.
    pub fn path(&self) -> Vec<Position> {
        match self.status {
            SearchStatus::Found => reconstruct_path(&self.came_from, self.goal),
            _ => Vec::new(),
        }
    }

    /// Run to completion and return the exploration order and path.
    pub fn finish(mut self) -> SearchResult {
        self.by_ref().for_each(drop);
        let path = self.path();
        log::debug!(
            "{} search {} -> {}: visited {}, path {}",
            self.algorithm,
            self.start,
            self.goal,
            self.exploration.len(),
            path.len()
        );
        SearchResult {
            exploration: self.exploration,
            path,
        }
    }

    fn expand(&mut self, current: Position) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);

        if self.frontier.is_ordered() {
            // Every position pushed onto an ordered frontier has a cost.
            let current_cost = self.cost_so_far.get(&current).copied().unwrap_or_default();
            for &np in nbuf.iter() {
                if self.visited.contains(&np) {
                    continue;
                }
                let tentative = current_cost + self.pather.cost(current, np);
                if self
                    .cost_so_far
                    .get(&np)
                    .is_some_and(|&known| tentative >= known)
                {
                    continue;
                }
                self.cost_so_far.insert(np, tentative);
                self.came_from.insert(np, Some(current));
                let priority = if self.estimate {
                    tentative + self.pather.estimate(np, self.goal)
                } else {
                    tentative
                };
                self.frontier.push(np, priority);
            }
        } else {
            for &np in nbuf.iter() {
                if self.visited.contains(&np) {
                    continue;
                }
                // Last write wins: only the predecessor recorded when the
                // position is finally visited matters.
                self.came_from.insert(np, Some(current));
                self.frontier.push(np, 0);
            }
        }

        self.nbuf = nbuf;
    }
}

impl<P: AstarPather> Iterator for Search<'_, P> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.status != SearchStatus::Running {
            return None;
        }
        while let Some(current) = self.frontier.pop() {
            if current == self.goal {
                self.status = SearchStatus::Found;
                return None;
            }
            // Skip stale entries.
            if !self.visited.insert(current) {
                continue;
            }
            self.exploration.push(current);
            self.expand(current);
            return Some(current);
        }
        self.status = SearchStatus::Exhausted;
        None
    }
}

impl<P: AstarPather> FusedIterator for Search<'_, P> {}

/// Search from `start` to `goal` with `algorithm` and return the exploration
/// order and the reconstructed path.
///
/// An unreachable goal is not an error: the path is simply empty.
pub fn search<P: AstarPather>(
    pather: &P,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
) -> SearchResult {
    Search::new(pather, start, goal, algorithm).finish()
}

/// Walk a predecessor map back from `goal` and return the path in
/// start-to-goal order.
///
/// The start is the entry whose predecessor is `None`. Returns an empty path
/// when `goal` has no entry, or when the map contains a cycle.
pub fn reconstruct_path(
    came_from: &HashMap<Position, Option<Position>>,
    goal: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cur = came_from.contains_key(&goal).then_some(goal);
    while let Some(p) = cur {
        if path.len() > came_from.len() {
            return Vec::new();
        }
        path.push(p);
        cur = came_from.get(&p).copied().flatten();
    }
    path.reverse();
    path
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use mazer_core::Grid;

    #[test]
    fn result_round_trip() {
        let g = Grid::new(3, 3).unwrap();
        let r = search(&g, Position::new(0, 0), Position::new(2, 2), Algorithm::AStar);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn algorithm_round_trip() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(a, back);
        }
    }
}
