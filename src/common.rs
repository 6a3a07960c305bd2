//! Common types for Sea Battle: board errors and shot results.

use core::fmt;

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Placement cell is occupied by a ship or touches one.
    Overlap,
    /// Cell was already targeted or is otherwise unavailable.
    AlreadyTargeted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
            BoardError::Overlap => write!(f, "cell is occupied or touches another ship"),
            BoardError::AlreadyTargeted => write!(f, "cell was already targeted"),
        }
    }
}

impl std::error::Error for BoardError {}
