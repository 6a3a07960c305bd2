//! Grid coordinates.

use core::fmt;

/// A position on the board, `row` then `col`, zero-based.
///
/// Axes are signed so off-grid anchors and shots stay representable; the
/// board's bounds checks reject them instead of the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The nine cells within Chebyshev distance 1, including `self`.
    /// May yield off-grid coordinates; callers filter by bounds.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dr| {
            (-1..=1).map(move |dc| Coord::new(self.row + dr, self.col + dc))
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, matching what players type in
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
