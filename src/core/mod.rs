//! Core types: players, configuration, RNG.
//!
//! These are the building blocks shared by the board and the rules. None of
//! them know how stones move.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{BoardConfig, DEFAULT_PIT_COUNT, DEFAULT_STARTING_STONES};
