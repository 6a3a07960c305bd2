use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;

/// Interface implemented by different player types.
///
/// Targeting is the single required capability, so smarter strategies can
/// be added without touching the board contract.
pub trait Player {
    /// Choose the next target coordinate against `opponent`.
    fn choose_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Coord;

    /// Inform the player of the result of its accepted shot.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}

    /// Inform the player that its shot was rejected and will be re-chosen.
    fn handle_rejected_shot(&mut self, target: Coord, error: BoardError) {
        debug!("shot at {} rejected: {}", target, error);
    }

    /// Fire at `opponent` until a shot is accepted. Rejected shots cost
    /// nothing; the target is simply re-chosen. Returns `true` when the
    /// result earns an extra turn (`Hit` or `Sunk`).
    fn take_turn(&mut self, rng: &mut SmallRng, opponent: &mut Board) -> bool {
        loop {
            let target = self.choose_target(rng, opponent);
            match opponent.resolve_shot(target) {
                Ok(result) => {
                    self.handle_shot_result(target, result);
                    return matches!(result, ShotResult::Hit | ShotResult::Sunk);
                }
                Err(error) => self.handle_rejected_shot(target, error),
            }
        }
    }
}
