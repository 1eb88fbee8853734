//! Plain-text view of a maze with search overlays.

use std::collections::HashSet;

use mazer_core::{Grid, Position};

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const VISITED: char = 'o';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Draw `grid` one line per row. Visited cells are drawn over floor, path
/// cells over visited cells, and the endpoints over everything.
pub fn render(
    grid: &Grid,
    visited: &[Position],
    path: &[Position],
    start: Position,
    goal: Position,
) -> String {
    let visited: HashSet<Position> = visited.iter().copied().collect();
    let path: HashSet<Position> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let p = Position::new(row, col);
            let ch = if p == start {
                START
            } else if p == goal {
                GOAL
            } else if path.contains(&p) {
                PATH
            } else if visited.contains(&p) {
                VISITED
            } else if grid.is_passable(p) {
                FLOOR
            } else {
                WALL
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
