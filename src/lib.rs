//! # imposter-engine
//!
//! Round engine for "Imposter", a social-deduction party game.
//!
//! One player is secretly the imposter and receives a decoy word while
//! everyone else gets the real one. Players take turns viewing their role and
//! word, discuss, then vote someone out. The innocents win by eliminating the
//! imposter; the imposter wins once at most one innocent is left.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no rendering, timers, or storage. A presentation layer
//!    calls in and draws from [`SessionView`].
//!
//! 2. **Deterministic**: all randomness flows through a seedable
//!    [`GameRng`]. Same seed, same names, same votes: same game.
//!
//! 3. **Recoverable errors**: a rejected call leaves the session unchanged.
//!
//! ## Modules
//!
//! - `core`: player ids, roster, RNG, configuration
//! - `roles`: roster validation and imposter selection
//! - `topics`: secret-word topics and their providers
//! - `round`: phase controller, vote tally, win evaluation
//! - `session`: the whole-game state machine
//! - `error`: error types

pub mod core;
pub mod error;
pub mod roles;
pub mod round;
pub mod session;
pub mod topics;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerId, PlayerSummary, Roster, SessionConfig};

pub use crate::error::{ConfigError, IllegalVoteError, InvalidRosterError, SessionError};

pub use crate::roles::RoleAssigner;

pub use crate::round::{
    Faction, Reveal, RoundPhase, RoundPhaseController, RoundResult, TallyEntry, Vote, VoteTally,
};

pub use crate::session::{GameSession, Outcome, SessionPhase, SessionView};

pub use crate::topics::{Topic, TopicList, TopicProvider};
