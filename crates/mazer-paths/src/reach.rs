//! Breadth-first reachability queries.
//!
//! Every cell enters the queue at most once (it is marked on enqueue), so
//! each query runs in time linear in the number of reachable cells.

use std::collections::{HashSet, VecDeque};

use mazer_core::Position;

use crate::traits::Pather;

/// Whether `goal` can be reached from `start` through `pather`'s neighbors.
///
/// Returns `true` as soon as `goal` is dequeued and `false` once the
/// frontier empties. `start == goal` is trivially solvable.
pub fn is_solvable<P: Pather>(pather: &P, start: Position, goal: Position) -> bool {
    let mut queue = VecDeque::from([start]);
    let mut seen = HashSet::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
        if cur == goal {
            return true;
        }
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter() {
            if seen.insert(np) {
                queue.push_back(np);
            }
        }
    }
    false
}

/// Every position reachable from `start`, in breadth-first order
/// (`start` first).
pub fn reachable<P: Pather>(pather: &P, start: Position) -> Vec<Position> {
    let mut order = vec![start];
    let mut seen = HashSet::from([start]);
    let mut nbuf = Vec::with_capacity(4);
    let mut head = 0;

    while let Some(&cur) = order.get(head) {
        head += 1;
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter() {
            if seen.insert(np) {
                order.push(np);
            }
        }
    }
    order
}

/// Number of unit steps on a shortest path from `start` to `goal`, or
/// `None` if `goal` is unreachable.
pub fn distance<P: Pather>(pather: &P, start: Position, goal: Position) -> Option<usize> {
    let mut queue = VecDeque::from([(start, 0usize)]);
    let mut seen = HashSet::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some((cur, d)) = queue.pop_front() {
        if cur == goal {
            return Some(d);
        }
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter() {
            if seen.insert(np) {
                queue.push_back((np, d + 1));
            }
        }
    }
    None
}
