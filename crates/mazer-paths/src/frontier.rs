//! The open set of a search, with an algorithm-dependent pop discipline.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use mazer_core::Position;

use crate::algorithm::Algorithm;

/// Discovered-but-not-yet-expanded positions.
///
/// The variant is chosen once per search. Duplicates are allowed: a
/// position may be pushed several times before it is first popped, and the
/// search skips the stale copies (lazy deletion).
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    /// Last in, first out.
    Stack(Vec<Position>),
    /// First in, first out.
    Queue(VecDeque<Position>),
    /// Smallest priority first; ties go to the smaller position
    /// (row-major).
    Priority(BinaryHeap<Reverse<(i32, Position)>>),
}

impl Frontier {
    /// The empty frontier used by `algorithm`.
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Dfs => Frontier::Stack(Vec::new()),
            Algorithm::Bfs => Frontier::Queue(VecDeque::new()),
            Algorithm::AStar | Algorithm::Dijkstra => Frontier::Priority(BinaryHeap::new()),
        }
    }

    /// Whether pop order depends on the pushed priority. Only ordered
    /// frontiers need cost bookkeeping.
    #[inline]
    pub(crate) fn is_ordered(&self) -> bool {
        matches!(self, Frontier::Priority(_))
    }

    /// Add `p`. `priority` is ignored by unordered frontiers.
    #[inline]
    pub(crate) fn push(&mut self, p: Position, priority: i32) {
        match self {
            Frontier::Stack(v) => v.push(p),
            Frontier::Queue(q) => q.push_back(p),
            Frontier::Priority(h) => h.push(Reverse((priority, p))),
        }
    }

    /// Remove the next position according to the discipline.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Position> {
        match self {
            Frontier::Stack(v) => v.pop(),
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Priority(h) => h.pop().map(|Reverse((_, p))| p),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Stack(v) => v.len(),
            Frontier::Queue(q) => q.len(),
            Frontier::Priority(h) => h.len(),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Frontier::Stack(v) => v.clear(),
            Frontier::Queue(q) => q.clear(),
            Frontier::Priority(h) => h.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn drain(mut f: Frontier) -> Vec<Position> {
        std::iter::from_fn(move || f.pop()).collect()
    }

    #[test]
    fn stack_pops_most_recent() {
        let mut f = Frontier::for_algorithm(Algorithm::Dfs);
        f.push(p(0, 0), 9);
        f.push(p(0, 1), 1);
        f.push(p(0, 2), 5);
        assert!(!f.is_ordered());
        assert_eq!(drain(f), vec![p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn queue_pops_least_recent() {
        let mut f = Frontier::for_algorithm(Algorithm::Bfs);
        f.push(p(0, 0), 9);
        f.push(p(0, 1), 1);
        f.push(p(0, 2), 5);
        assert!(!f.is_ordered());
        assert_eq!(drain(f), vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn priority_pops_minimum_then_position() {
        let mut f = Frontier::for_algorithm(Algorithm::Dijkstra);
        f.push(p(2, 0), 3);
        f.push(p(1, 5), 1);
        f.push(p(0, 7), 3);
        f.push(p(1, 1), 1);
        assert!(f.is_ordered());
        assert_eq!(f.len(), 4);
        assert_eq!(drain(f), vec![p(1, 1), p(1, 5), p(0, 7), p(2, 0)]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::for_algorithm(Algorithm::AStar);
        f.push(p(0, 0), 4);
        f.push(p(0, 0), 2);
        assert_eq!(f.len(), 2);
        f.clear();
        assert_eq!(f.len(), 0);
        assert_eq!(f.pop(), None);
    }
}
