//! Ship geometry and remaining-health tracking.

use crate::coord::Coord;

/// Direction a ship extends from its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each further cell is one row below the head.
    Down,
    /// Each further cell is one column right of the head.
    Right,
}

/// A straight run of cells with a remaining-health counter.
///
/// A ship answers geometric queries about itself; health only moves down,
/// and only through the owning board's shot resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    head: Coord,
    length: u32,
    orientation: Orientation,
    health: u32,
}

impl Ship {
    /// Create an undamaged ship. The head may be anywhere, including off
    /// the board; placement validation happens when it is added to a board.
    pub fn new(head: Coord, length: u32, orientation: Orientation) -> Self {
        Self {
            head,
            length,
            orientation,
            health: length,
        }
    }

    /// Ordered cells occupied by the ship, stepping from the head along
    /// the orientation.
    pub fn cells(&self) -> Vec<Coord> {
        (0..self.length as i32)
            .map(|i| match self.orientation {
                Orientation::Down => Coord::new(self.head.row + i, self.head.col),
                Orientation::Right => Coord::new(self.head.row, self.head.col + i),
            })
            .collect()
    }

    /// Whether `shot` lands on one of this ship's cells.
    pub fn is_hit_by(&self, shot: Coord) -> bool {
        self.cells().contains(&shot)
    }

    pub fn head(&self) -> Coord {
        self.head
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact cells remaining, in `0..=length`.
    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Record one point of damage. Saturates at zero; a sunk ship stays sunk.
    pub(crate) fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}
