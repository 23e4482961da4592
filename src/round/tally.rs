//! Vote collection and elimination resolution.
//!
//! ## Tie-break
//!
//! Targets are counted in the order votes were cast. When several targets
//! share the top count, the one that received its first vote earliest is
//! eliminated. There is no re-vote and no random pick.
//!
//! ```
//! use imposter_engine::core::PlayerId;
//! use imposter_engine::round::tally::{resolve, Vote};
//!
//! let p = PlayerId::new;
//! // Three-way tie: the first target seen wins.
//! let votes = [Vote::new(p(0), p(2)), Vote::new(p(1), p(0)), Vote::new(p(2), p(1))];
//! assert_eq!(resolve(&votes), Some(p(2)));
//! ```

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Roster};
use crate::error::IllegalVoteError;

/// One ballot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub voter: PlayerId,
    pub target: PlayerId,
}

impl Vote {
    #[must_use]
    pub const fn new(voter: PlayerId, target: PlayerId) -> Self {
        Self { voter, target }
    }
}

/// Votes received by one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub target: PlayerId,
    pub votes: u32,
}

/// Count votes per target, in first-seen order.
#[must_use]
pub fn tally(votes: &[Vote]) -> Vec<TallyEntry> {
    let mut entries: Vec<TallyEntry> = Vec::new();
    let mut slots: FxHashMap<PlayerId, usize> = FxHashMap::default();

    for vote in votes {
        match slots.get(&vote.target) {
            Some(&slot) => entries[slot].votes += 1,
            None => {
                slots.insert(vote.target, entries.len());
                entries.push(TallyEntry {
                    target: vote.target,
                    votes: 1,
                });
            }
        }
    }

    entries
}

/// Pick the elimination target. `None` only when `votes` is empty.
#[must_use]
pub fn resolve(votes: &[Vote]) -> Option<PlayerId> {
    let entries = tally(votes);
    let max_votes = entries.iter().map(|e| e.votes).max()?;

    // `max_by_key` keeps the last maximum; the rule needs the first.
    entries
        .iter()
        .find(|e| e.votes == max_votes)
        .map(|e| e.target)
}

/// Ballot for a single voting phase.
///
/// Holds at most one vote per active player, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    votes: SmallVec<[Vote; 10]>,
}

impl VoteTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Votes cast so far, in order.
    #[must_use]
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    #[must_use]
    pub fn has_voted(&self, voter: PlayerId) -> bool {
        self.votes.iter().any(|v| v.voter == voter)
    }

    /// Record a vote after checking it against the roster.
    ///
    /// Both voter and target must be active, the voter must not have voted
    /// yet, and nobody may vote for themselves. A rejected vote leaves the
    /// ballot unchanged.
    pub fn cast(
        &mut self,
        roster: &Roster,
        voter: PlayerId,
        target: PlayerId,
    ) -> Result<(), IllegalVoteError> {
        match roster.get(voter) {
            None => return Err(IllegalVoteError::UnknownVoter(voter)),
            Some(p) if p.is_eliminated => return Err(IllegalVoteError::VoterEliminated(voter)),
            Some(_) => {}
        }
        if self.has_voted(voter) {
            return Err(IllegalVoteError::DuplicateVote(voter));
        }
        match roster.get(target) {
            None => return Err(IllegalVoteError::UnknownTarget(target)),
            Some(p) if p.is_eliminated => return Err(IllegalVoteError::TargetEliminated(target)),
            Some(_) => {}
        }
        if voter == target {
            return Err(IllegalVoteError::SelfVote(voter));
        }

        debug!("{} voted ({} of {})", voter, self.votes.len() + 1, roster.active_count());
        self.votes.push(Vote::new(voter, target));
        Ok(())
    }

    /// Active players who have not voted, in roster order.
    #[must_use]
    pub fn pending_voters(&self, roster: &Roster) -> Vec<PlayerId> {
        roster
            .active()
            .map(|p| p.id)
            .filter(|&id| !self.has_voted(id))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self, roster: &Roster) -> bool {
        roster.active().all(|p| self.has_voted(p.id))
    }

    /// Per-target counts in first-seen order.
    #[must_use]
    pub fn counts(&self) -> Vec<TallyEntry> {
        tally(&self.votes)
    }

    /// See [`resolve`].
    #[must_use]
    pub fn resolve(&self) -> Option<PlayerId> {
        resolve(&self.votes)
    }
}
