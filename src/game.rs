//! Alternating-turn match orchestration.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::Player;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerOneWins,
    PlayerTwoWins,
}

/// A match between two players, each owning one board. Even turn indices
/// belong to player one; a hit or sink keeps the index in place so the
/// same side acts again.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    turn: usize,
    status: GameStatus,
}

impl Game {
    pub fn new(
        player_one: Box<dyn Player>,
        board_one: Board,
        player_two: Box<dyn Player>,
        board_two: Board,
    ) -> Self {
        Self {
            players: [player_one, player_two],
            boards: [board_one, board_two],
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side acting next: 0 for player one, 1 for player two.
    pub fn current_side(&self) -> usize {
        self.turn % 2
    }

    pub fn board(&self, side: usize) -> &Board {
        &self.boards[side]
    }

    /// Run one turn of the acting side. Does nothing once the game is over.
    pub fn step(&mut self, rng: &mut SmallRng) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let side = self.current_side();
        let opponent = 1 - side;
        let extra_turn = self.players[side].take_turn(rng, &mut self.boards[opponent]);
        debug!(
            "turn {}: side {} {}",
            self.turn,
            side + 1,
            if extra_turn { "hit" } else { "missed" }
        );
        // Player one's win condition is checked first; a simultaneous
        // defeat of both fleets resolves in player one's favor. Not
        // reachable in normal play, a single shot sinks at most one fleet.
        if self.boards[1].is_defeated() {
            self.status = GameStatus::PlayerOneWins;
        } else if self.boards[0].is_defeated() {
            self.status = GameStatus::PlayerTwoWins;
        } else if !extra_turn {
            self.turn += 1;
        }
    }

    /// Drive the match to completion.
    pub fn run(&mut self, rng: &mut SmallRng) -> GameStatus {
        while self.status == GameStatus::InProgress {
            self.step(rng);
        }
        self.status
    }
}
