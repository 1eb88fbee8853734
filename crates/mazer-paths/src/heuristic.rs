use mazer_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for unit-cost 4-connected grids.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    a.manhattan(b)
}
