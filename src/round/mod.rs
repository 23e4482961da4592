//! One elimination round.
//!
//! - `controller`: phase sequencing and private reveals
//! - `tally`: vote collection and tie-break
//! - `win`: imposter-caught / imposter-survives decision

pub mod controller;
pub mod tally;
pub mod win;

pub use controller::{Reveal, RoundPhase, RoundPhaseController};
pub use tally::{TallyEntry, Vote, VoteTally};
pub use win::{Faction, RoundResult};
