//! Sea Battle: board model and turn-resolution engine with a console
//! front end. Ship placement enforces diagonal-inclusive adjacency
//! exclusion; hits earn an extra turn; fleets are generated by random
//! retry.

mod board;
mod common;
mod config;
mod coord;
mod game;
mod generator;
mod logging;
mod player;
mod player_ai;
mod player_console;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use generator::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_console::*;
pub use ship::*;
