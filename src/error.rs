//! Error types.
//!
//! Every error is recoverable: the operation that raised it left the session
//! unchanged, so the caller re-collects the offending input and retries.

use thiserror::Error;

use crate::core::PlayerId;
use crate::session::SessionPhase;

/// Names passed to `start()` do not form a playable roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRosterError {
    #[error("need at least {min} players, got {count}")]
    TooFewPlayers { count: usize, min: usize },
    #[error("at most {max} players allowed, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("name at position {index} is blank")]
    BlankName { index: usize },
    #[error("name {name:?} is longer than {max} characters")]
    NameTooLong { name: String, max: usize },
    #[error("name {name:?} is used more than once")]
    DuplicateName { name: String },
}

/// A vote that cannot be accepted this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalVoteError {
    #[error("{0} is not in this game")]
    UnknownVoter(PlayerId),
    #[error("{0} has been eliminated and cannot vote")]
    VoterEliminated(PlayerId),
    #[error("{0} is not in this game")]
    UnknownTarget(PlayerId),
    #[error("{0} has already been eliminated")]
    TargetEliminated(PlayerId),
    #[error("{0} cannot vote for themselves")]
    SelfVote(PlayerId),
    #[error("{0} has already voted this round")]
    DuplicateVote(PlayerId),
}

/// Inconsistent `SessionConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_players must be at least 3, got {0}")]
    MinPlayersTooSmall(usize),
    #[error("min_players ({min}) exceeds max_players ({max})")]
    InvertedBounds { min: usize, max: usize },
    #[error("max_players must fit a player id, got {0}")]
    MaxPlayersTooLarge(usize),
    #[error("max_name_len must be positive")]
    ZeroNameLength,
    #[error("palette must contain at least one colour")]
    EmptyPalette,
}

/// Errors returned by `GameSession` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Roster(#[from] InvalidRosterError),
    #[error(transparent)]
    Vote(#[from] IllegalVoteError),
    #[error("operation requires the {expected:?} phase, session is in {actual:?}")]
    WrongPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },
    #[error("no game in progress; call start() first")]
    NotStarted,
    #[error("{pending} player(s) have not voted yet")]
    VotingIncomplete { pending: usize },
    #[error("voting needs at least 2 active players, {active} left")]
    NotEnoughActivePlayers { active: usize },
    #[error("the game is over; call replay() to start again")]
    GameOver,
}
