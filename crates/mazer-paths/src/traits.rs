use mazer_core::{Grid, Position};

use crate::heuristic;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the reachable neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Position, to: Position) -> i32;
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Position, to: Position) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(self.passable_neighbors(p));
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Position, _to: Position) -> i32 {
        1
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> i32 {
        heuristic::manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pather_skips_walls_and_edges() {
        let g = Grid::from_rows(&[".#", ".."]).unwrap();
        let mut buf = Vec::new();
        // The inherent `Grid::neighbors` shadows the trait method.
        Pather::neighbors(&g, Position::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Position::new(1, 0)]);
        assert_eq!(g.cost(Position::new(0, 0), Position::new(1, 0)), 1);
        assert_eq!(g.estimate(Position::new(0, 0), Position::new(1, 1)), 2);
    }
}
