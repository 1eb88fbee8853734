//! A passable/blocked occupancy grid for maze representation.
//!
//! [`Grid`] stores one `blocked` flag per cell in row-major order. Its
//! dimensions are fixed at construction. Queries never fail: positions
//! outside the grid are simply not passable.

use std::fmt;

use crate::error::{ConfigError, ConfigResult};
use crate::geom::{Position, Range};

/// Character used for a blocked cell in the text notation.
pub const WALL: char = '#';
/// Character used for a passable cell in the text notation.
pub const FLOOR: char = '.';

/// A `rows × cols` grid of passable/blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    bounds: Range,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell passable.
    pub fn new(rows: i32, cols: i32) -> ConfigResult<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let bounds = Range::with_size(rows, cols);
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
        })
    }

    /// Build a grid from text rows: `#` is blocked, `.` or space passable.
    ///
    /// All rows must have the same length.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> ConfigResult<Self> {
        let width = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let (rows, cols) = text_dims(lines.len(), width)?;
        let mut grid = Self::new(rows, cols)?;
        for (r, line) in (0..rows).zip(lines) {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(ConfigError::RaggedRows);
            }
            for (c, ch) in (0..cols).zip(line.chars()) {
                let blocked = match ch {
                    WALL => true,
                    FLOOR | ' ' => false,
                    other => return Err(ConfigError::InvalidCell(other)),
                };
                grid.set_blocked(Position::new(r, c), blocked);
            }
        }
        Ok(grid)
    }

    /// Returns the bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether the grid contains the given position.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row * self.cols() + p.col) as usize)
    }

    /// Whether `p` is in bounds and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| !self.blocked[i])
    }

    /// The blocked flag at `p`, or `None` if out of bounds.
    #[inline]
    pub fn is_blocked(&self, p: Position) -> Option<bool> {
        self.index(p).map(|i| self.blocked[i])
    }

    /// Set the blocked flag at `p`. Does nothing if out of bounds.
    pub fn set_blocked(&mut self, p: Position, blocked: bool) {
        if let Some(i) = self.index(p) {
            self.blocked[i] = blocked;
        }
    }

    /// Fill the grid using a function that decides, per position, whether
    /// the cell is blocked.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Position) -> bool) {
        for (p, cell) in self.bounds.iter().zip(self.blocked.iter_mut()) {
            *cell = f(p);
        }
    }

    /// The four axis-aligned neighbours of `p` in the fixed order
    /// up, down, left, right, whether or not they are passable.
    #[inline]
    pub fn neighbors(&self, p: Position) -> [Position; 4] {
        p.neighbors_4()
    }

    /// Passable neighbours of `p`, in the same fixed order as
    /// [`neighbors`](Self::neighbors).
    pub fn passable_neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(p)
            .into_iter()
            .filter(move |&n| self.is_passable(n))
    }

    /// Count blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Count passable cells.
    pub fn count_passable(&self) -> usize {
        self.len() - self.count_blocked()
    }

    /// Iterate over `(Position, blocked)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.bounds.iter().zip(self.blocked.iter().copied())
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the notation accepted by [`Grid::from_rows`],
    /// one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = if self.is_passable(Position::new(row, col)) {
                    FLOOR
                } else {
                    WALL
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// serde representation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            rows: g.rows(),
            cols: g.cols(),
            blocked: g.blocked,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = ConfigError;

    fn try_from(r: GridRepr) -> ConfigResult<Self> {
        let mut grid = Grid::new(r.rows, r.cols)?;
        if r.blocked.len() != grid.len() {
            return Err(ConfigError::RaggedRows);
        }
        grid.blocked = r.blocked;
        Ok(grid)
    }
}

/// Convert text dimensions to grid coordinates.
fn text_dims(rows: usize, cols: usize) -> ConfigResult<(i32, i32)> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(ConfigError::TooLarge { rows, cols }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(5, 10).unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.len(), 50);
        assert_eq!(g.count_blocked(), 0);
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 4 })
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn test_set_and_query() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Position::new(2, 3);
        g.set_blocked(p, true);
        assert_eq!(g.is_blocked(p), Some(true));
        assert!(!g.is_passable(p));
        assert!(g.is_passable(Position::new(0, 0)));
        assert_eq!(g.is_blocked(Position::new(10, 10)), None);
        // Out-of-range writes are ignored.
        g.set_blocked(Position::new(-1, 0), true);
        assert_eq!(g.count_blocked(), 1);
    }

    #[test]
    fn test_out_of_range_not_passable() {
        let g = Grid::new(3, 3).unwrap();
        assert!(!g.is_passable(Position::new(-1, 0)));
        assert!(!g.is_passable(Position::new(0, -1)));
        assert!(!g.is_passable(Position::new(3, 0)));
        assert!(!g.is_passable(Position::new(0, 3)));
    }

    #[test]
    fn test_passable_neighbors_order() {
        let g = Grid::from_rows(&["...", ".#.", "..."]).unwrap();
        let n: Vec<_> = g.passable_neighbors(Position::new(0, 1)).collect();
        // Up is out of range, down is blocked.
        assert_eq!(n, vec![Position::new(0, 0), Position::new(0, 2)]);
        let n: Vec<_> = g.passable_neighbors(Position::new(1, 0)).collect();
        assert_eq!(n, vec![Position::new(0, 0), Position::new(2, 0)]);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = ["#..", "..#"];
        let g = Grid::from_rows(&rows).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.count_blocked(), 2);
        assert_eq!(g.count_passable(), 4);
        assert_eq!(g.to_string(), "#..\n..#\n");
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Grid::from_rows(&["..", "..."]),
            Err(ConfigError::RaggedRows)
        );
        assert_eq!(
            Grid::from_rows(&[".x"]),
            Err(ConfigError::InvalidCell('x'))
        );
        let empty: [&str; 0] = [];
        assert!(Grid::from_rows(&empty).is_err());
    }

    #[test]
    fn test_text_dims_reject_oversized() {
        assert_eq!(text_dims(3, 4), Ok((3, 4)));
        let huge = i32::MAX as usize + 1;
        assert_eq!(
            text_dims(huge, 2),
            Err(ConfigError::TooLarge { rows: huge, cols: 2 })
        );
        assert!(text_dims(1, usize::MAX).is_err());
    }

    #[test]
    fn test_fill_fn_and_iter() {
        let mut g = Grid::new(2, 3).unwrap();
        g.fill_fn(|p| p.col == 1);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Position::new(0, 1), true));
        assert_eq!(items[3], (Position::new(1, 0), false));
        assert_eq!(g.count_blocked(), 2);
    }

    #[test]
    fn test_grid_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
