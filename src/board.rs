//! Board state: owned fleet, busy-cell tracking, and shot resolution.

use std::collections::HashSet;

use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::ship::Ship;

/// Display state of a single cell. Consumed by renderers; never an input
/// to game logic, which works from the fleet and the busy set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
    Hit,
}

/// One side's board.
///
/// During placement the busy set holds ship cells plus their exclusion
/// halo, so no two ships can touch, even diagonally. Once
/// [`reset_shot_history`](Board::reset_shot_history) transitions the board
/// into battle, the busy set restarts empty and records shots instead.
pub struct Board {
    size: i32,
    hidden: bool,
    ships: Vec<Ship>,
    busy: HashSet<Coord>,
    destroyed: usize,
    field: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty board. `hidden` only tells renderers to mask unhit
    /// ship cells; it has no effect on any board operation.
    pub fn new(size: i32, hidden: bool) -> Self {
        Self {
            size,
            hidden,
            ships: Vec::new(),
            busy: HashSet::new(),
            destroyed: 0,
            field: vec![vec![Cell::Empty; size as usize]; size as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether renderers should mask unhit ship cells.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Whether `coord` is unavailable, for placement or for shooting
    /// depending on the board's phase.
    pub fn is_busy(&self, coord: Coord) -> bool {
        self.busy.contains(&coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.size).contains(&coord.row) && (0..self.size).contains(&coord.col)
    }

    /// Display state of an in-bounds cell.
    pub fn cell(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord), "cell {} is off the board", coord);
        self.field[coord.row as usize][coord.col as usize]
    }

    /// Place `ship`, marking its cells busy and excluding every cell within
    /// Chebyshev distance 1 from future placements.
    ///
    /// Fails with `OutOfBounds` if any ship cell is off the board and with
    /// `Overlap` if any is busy. A failed call leaves the board untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let cells = ship.cells();
        for cell in &cells {
            if !self.contains(*cell) {
                return Err(BoardError::OutOfBounds);
            }
            if self.busy.contains(cell) {
                return Err(BoardError::Overlap);
            }
        }
        for cell in &cells {
            self.busy.insert(*cell);
            self.field[cell.row as usize][cell.col as usize] = Cell::Ship;
        }
        self.mark_halo(&cells, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Fails with `OutOfBounds` off the board and `AlreadyTargeted` on a
    /// busy cell; a prior shot and a surviving placement exclusion both
    /// count. An accepted shot marks the cell busy and damages the first
    /// ship, in placement order, whose cells contain it. Sinking a ship
    /// additionally marks its whole halo busy and reveals the untouched
    /// halo cells as misses. A failed call leaves the board untouched.
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotResult, BoardError> {
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds);
        }
        if self.busy.contains(&target) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.busy.insert(target);

        match self.ships.iter().position(|s| s.is_hit_by(target)) {
            Some(i) => {
                self.ships[i].take_hit();
                self.field[target.row as usize][target.col as usize] = Cell::Hit;
                if self.ships[i].is_sunk() {
                    self.destroyed += 1;
                    let cells = self.ships[i].cells();
                    self.mark_halo(&cells, true);
                    Ok(ShotResult::Sunk)
                } else {
                    Ok(ShotResult::Hit)
                }
            }
            None => {
                self.field[target.row as usize][target.col as usize] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
        }
    }

    /// Whether every ship in the fleet is sunk. Vacuously true on an empty
    /// fleet; callers populate the board before battle.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Transition from placement to battle: clear the entire busy set so
    /// shot tracking restarts from empty. Deliberately also forgets the
    /// placement exclusions, so a cell that only ever sat next to a ship is
    /// a fresh, legal target during battle.
    pub fn reset_shot_history(&mut self) {
        self.busy.clear();
    }

    /// Mark every in-bounds cell within Chebyshev distance 1 of `cells` as
    /// busy. With `reveal`, untouched halo cells also display as misses,
    /// the way a sunk ship's surroundings are known to be clear.
    fn mark_halo(&mut self, cells: &[Coord], reveal: bool) {
        for cell in cells {
            for near in cell.neighborhood() {
                if !self.contains(near) {
                    continue;
                }
                self.busy.insert(near);
                if reveal && self.cell(near) == Cell::Empty {
                    self.field[near.row as usize][near.col as usize] = Cell::Miss;
                }
            }
        }
    }
}
