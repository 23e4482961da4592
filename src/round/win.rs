//! Win detection after an elimination.
//!
//! Must run right after every elimination and before any further voting.
//! That keeps at least two active players at the start of every vote: the
//! imposter wins as soon as one or no innocents would remain.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Innocents,
    Imposter,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Innocents => write!(f, "Innocents"),
            Faction::Imposter => write!(f, "Imposter"),
        }
    }
}

/// Outcome of one elimination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub eliminated_id: PlayerId,
    /// The eliminated player was the imposter.
    pub imposter_caught: bool,
    /// Not caught, and at most one innocent is left.
    pub imposter_survives: bool,
    /// Active innocents after the elimination.
    pub remaining_innocents: usize,
}

impl RoundResult {
    /// `None` while the game continues.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        if self.imposter_caught {
            Some(Faction::Innocents)
        } else if self.imposter_survives {
            Some(Faction::Imposter)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}

/// Judge the elimination of `eliminated_id`.
///
/// `players` is the roster as it was before the elimination; the evaluator
/// treats `eliminated_id` as already out. An id not present in `players`
/// counts as an innocent.
#[must_use]
pub fn evaluate(players: &[Player], eliminated_id: PlayerId) -> RoundResult {
    let imposter_caught = players
        .iter()
        .find(|p| p.id == eliminated_id)
        .is_some_and(|p| p.is_imposter);

    let remaining_innocents = players
        .iter()
        .filter(|p| !p.is_eliminated && !p.is_imposter && p.id != eliminated_id)
        .count();

    RoundResult {
        eliminated_id,
        imposter_caught,
        imposter_survives: !imposter_caught && remaining_innocents <= 1,
        remaining_innocents,
    }
}
