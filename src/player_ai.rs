//! Automated opponent.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::coord::Coord;
use crate::player::Player;

/// Computer player that fires uniformly at random over the grid, keeping no
/// memory of prior outcomes. Cells already shot get rejected by the board
/// and re-rolled through the turn protocol.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Coord {
        Coord::new(
            rng.random_range(0..opponent.size()),
            rng.random_range(0..opponent.size()),
        )
    }
}
