//! Random fleet generation with bounded retry.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Placement attempts allowed per board before it is abandoned.
const MAX_ATTEMPTS: u32 = 2000;

/// Build a battle-ready board carrying one ship per entry of `lengths`.
///
/// Each candidate board gets [`MAX_ATTEMPTS`] random placements in total;
/// if the budget runs out with the fleet incomplete, the board is thrown
/// away and generation restarts from empty. For sane size and loadout
/// combinations a handful of restarts suffices, so the outer loop is
/// unbounded. The returned board has had its shot history reset.
pub fn random_board(rng: &mut SmallRng, size: i32, lengths: &[u32], hidden: bool) -> Board {
    loop {
        if let Some(board) = try_random_board(rng, size, lengths, hidden) {
            return board;
        }
        debug!("placement budget exhausted, restarting fleet generation");
    }
}

fn try_random_board(rng: &mut SmallRng, size: i32, lengths: &[u32], hidden: bool) -> Option<Board> {
    let mut board = Board::new(size, hidden);
    let mut attempts = 0;
    for &length in lengths {
        loop {
            if attempts >= MAX_ATTEMPTS {
                return None;
            }
            attempts += 1;
            // Anchors are drawn over 0..=size: out-of-range anchors are
            // legitimate attempts that bounds checking rejects.
            let head = Coord::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Down
            } else {
                Orientation::Right
            };
            if board.place_ship(Ship::new(head, length, orientation)).is_ok() {
                break;
            }
        }
    }
    board.reset_shot_history();
    Some(board)
}
