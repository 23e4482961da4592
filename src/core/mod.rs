//! Core types: players, roster, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_PALETTE};
pub use player::{Player, PlayerId, PlayerSummary, Roster};
pub use rng::GameRng;
