//! Phase sequencing for one elimination round.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::tally::{TallyEntry, VoteTally};
use super::win::{self, RoundResult};
use crate::core::{Player, PlayerId, Roster};
use crate::error::SessionError;
use crate::session::SessionPhase;
use crate::topics::Topic;

/// Private information for the player whose turn it is to look.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reveal {
    Role { is_imposter: bool },
    Word { word: String },
}

/// Current round phase with its working data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// `cursor` indexes the active players in roster order.
    RoleReveal { cursor: usize },
    TopicReveal { cursor: usize },
    Discussion { remaining: u32 },
    Voting { ballot: VoteTally },
    Results {
        result: RoundResult,
        tally: Vec<TallyEntry>,
    },
}

impl RoundPhase {
    #[must_use]
    pub fn kind(&self) -> SessionPhase {
        match self {
            RoundPhase::RoleReveal { .. } => SessionPhase::RoleReveal,
            RoundPhase::TopicReveal { .. } => SessionPhase::TopicReveal,
            RoundPhase::Discussion { .. } => SessionPhase::Discussion,
            RoundPhase::Voting { .. } => SessionPhase::Voting,
            RoundPhase::Results { .. } => SessionPhase::Results,
        }
    }
}

/// Drives `RoleReveal -> TopicReveal -> Discussion -> Voting -> Results`.
///
/// The controller never mutates the roster. Closing a vote returns the
/// [`RoundResult`]; applying the elimination is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPhaseController {
    phase: RoundPhase,
    discussion_seconds: u32,
}

impl RoundPhaseController {
    /// Start at the first role reveal.
    #[must_use]
    pub fn new(discussion_seconds: u32) -> Self {
        Self {
            phase: RoundPhase::RoleReveal { cursor: 0 },
            discussion_seconds,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    #[must_use]
    pub fn kind(&self) -> SessionPhase {
        self.phase.kind()
    }

    /// Position of the current actor among active players.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::RoleReveal { cursor } | RoundPhase::TopicReveal { cursor } => Some(cursor),
            _ => None,
        }
    }

    /// Player currently receiving a reveal.
    #[must_use]
    pub fn current_actor<'r>(&self, roster: &'r Roster) -> Option<&'r Player> {
        self.cursor().and_then(|cursor| roster.active().nth(cursor))
    }

    /// What the current actor is shown.
    #[must_use]
    pub fn reveal(&self, roster: &Roster, topic: &Topic) -> Option<Reveal> {
        let actor = self.current_actor(roster)?;
        match self.phase {
            RoundPhase::RoleReveal { .. } => Some(Reveal::Role {
                is_imposter: actor.is_imposter,
            }),
            RoundPhase::TopicReveal { .. } => Some(Reveal::Word {
                word: topic.word_for(actor.is_imposter).to_string(),
            }),
            _ => None,
        }
    }

    /// Seconds left in the discussion countdown.
    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u32> {
        match self.phase {
            RoundPhase::Discussion { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// The ballot being filled, during voting.
    #[must_use]
    pub fn ballot(&self) -> Option<&VoteTally> {
        match &self.phase {
            RoundPhase::Voting { ballot } => Some(ballot),
            _ => None,
        }
    }

    /// The closed round, during results.
    #[must_use]
    pub fn result(&self) -> Option<(&RoundResult, &[TallyEntry])> {
        match &self.phase {
            RoundPhase::Results { result, tally } => Some((result, tally.as_slice())),
            _ => None,
        }
    }

    /// Move to the next step.
    ///
    /// Reveals step through active players one at a time; discussion is
    /// skipped; voting is closed (all active players must have voted);
    /// results start the next round's discussion. Returns the
    /// `RoundResult` when a vote was closed. On error nothing changes.
    pub fn advance(&mut self, roster: &Roster) -> Result<Option<RoundResult>, SessionError> {
        let active = roster.active_count();

        match &self.phase {
            RoundPhase::RoleReveal { cursor } => {
                self.phase = if cursor + 1 < active {
                    RoundPhase::RoleReveal { cursor: cursor + 1 }
                } else {
                    RoundPhase::TopicReveal { cursor: 0 }
                };
            }
            RoundPhase::TopicReveal { cursor } => {
                self.phase = if cursor + 1 < active {
                    RoundPhase::TopicReveal { cursor: cursor + 1 }
                } else {
                    RoundPhase::Discussion {
                        remaining: self.discussion_seconds,
                    }
                };
            }
            RoundPhase::Discussion { .. } => self.open_voting(roster)?,
            RoundPhase::Voting { ballot } => {
                let pending = ballot.pending_voters(roster).len();
                if pending > 0 {
                    warn!("cannot close voting, {} vote(s) missing", pending);
                    return Err(SessionError::VotingIncomplete { pending });
                }
                let eliminated = ballot
                    .resolve()
                    .ok_or(SessionError::NotEnoughActivePlayers { active })?;
                let result = win::evaluate(roster.players(), eliminated);
                let tally = ballot.counts();

                self.phase = RoundPhase::Results {
                    result: result.clone(),
                    tally,
                };
                debug!("phase -> {}", self.kind());
                return Ok(Some(result));
            }
            RoundPhase::Results { .. } => self.next_round(),
        }

        debug!("phase -> {}", self.kind());
        Ok(None)
    }

    /// Count the discussion down by `seconds`; at zero, voting opens.
    ///
    /// Returns whether the phase changed. Outside discussion this is a
    /// no-op, so a timer firing after a skip is harmless.
    pub fn tick(&mut self, seconds: u32, roster: &Roster) -> Result<bool, SessionError> {
        let RoundPhase::Discussion { remaining } = self.phase else {
            return Ok(false);
        };

        let remaining = remaining.saturating_sub(seconds);
        if remaining > 0 {
            self.phase = RoundPhase::Discussion { remaining };
            return Ok(false);
        }

        self.open_voting(roster)?;
        debug!("discussion timer elapsed, phase -> {}", self.kind());
        Ok(true)
    }

    /// Record a vote in the open ballot.
    pub fn submit_vote(
        &mut self,
        roster: &Roster,
        voter: PlayerId,
        target: PlayerId,
    ) -> Result<(), SessionError> {
        let actual = self.kind();
        match &mut self.phase {
            RoundPhase::Voting { ballot } => Ok(ballot.cast(roster, voter, target)?),
            _ => Err(SessionError::WrongPhase {
                expected: SessionPhase::Voting,
                actual,
            }),
        }
    }

    /// Start the next round at discussion. Reveals are never repeated.
    pub fn next_round(&mut self) {
        self.phase = RoundPhase::Discussion {
            remaining: self.discussion_seconds,
        };
    }

    fn open_voting(&mut self, roster: &Roster) -> Result<(), SessionError> {
        let active = roster.active_count();
        if active < 2 {
            return Err(SessionError::NotEnoughActivePlayers { active });
        }
        self.phase = RoundPhase::Voting {
            ballot: VoteTally::new(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    fn roster(count: u8, imposter: u8) -> Roster {
        Roster::new(
            (0..count)
                .map(|i| Player::new(p(i), format!("P{}", i), i == imposter, "#fff"))
                .collect(),
        )
    }

    fn topic() -> Topic {
        Topic::new("Apple", "Pear", "Name a fruit")
    }

    fn to_voting(controller: &mut RoundPhaseController, roster: &Roster) {
        while controller.kind() != SessionPhase::Voting {
            controller.advance(roster).unwrap();
        }
    }

    #[test]
    fn test_reveal_sequence() {
        let roster = roster(3, 1);
        let topic = topic();
        let mut controller = RoundPhaseController::new(30);

        let mut roles = Vec::new();
        while controller.kind() == SessionPhase::RoleReveal {
            roles.push(controller.reveal(&roster, &topic).unwrap());
            controller.advance(&roster).unwrap();
        }
        assert_eq!(
            roles,
            vec![
                Reveal::Role { is_imposter: false },
                Reveal::Role { is_imposter: true },
                Reveal::Role { is_imposter: false },
            ]
        );

        let mut words = Vec::new();
        while controller.kind() == SessionPhase::TopicReveal {
            words.push(controller.reveal(&roster, &topic).unwrap());
            controller.advance(&roster).unwrap();
        }
        let word = |w: &str| Reveal::Word { word: w.to_string() };
        assert_eq!(words, vec![word("Apple"), word("Pear"), word("Apple")]);

        assert_eq!(controller.kind(), SessionPhase::Discussion);
        assert_eq!(controller.seconds_remaining(), Some(30));
        assert!(controller.reveal(&roster, &topic).is_none());
    }

    #[test]
    fn test_reveal_skips_eliminated() {
        let mut roster = roster(4, 0);
        roster.eliminate(p(1));
        let controller = RoundPhaseController::new(10);

        let mut actors = Vec::new();
        let mut c = controller.clone();
        while c.kind() == SessionPhase::RoleReveal {
            actors.push(c.current_actor(&roster).unwrap().id);
            c.advance(&roster).unwrap();
        }
        assert_eq!(actors, vec![p(0), p(2), p(3)]);
    }

    #[test]
    fn test_discussion_tick() {
        let roster = roster(3, 0);
        let mut controller = RoundPhaseController::new(10);
        controller.advance(&roster).unwrap();
        controller.advance(&roster).unwrap();
        controller.advance(&roster).unwrap();
        controller.advance(&roster).unwrap();
        controller.advance(&roster).unwrap();
        controller.advance(&roster).unwrap();
        assert_eq!(controller.kind(), SessionPhase::Discussion);

        assert!(!controller.tick(4, &roster).unwrap());
        assert_eq!(controller.seconds_remaining(), Some(6));
        assert!(controller.tick(60, &roster).unwrap());
        assert_eq!(controller.kind(), SessionPhase::Voting);

        // Late timer after the phase moved on.
        assert!(!controller.tick(1, &roster).unwrap());
        assert_eq!(controller.kind(), SessionPhase::Voting);
    }

    #[test]
    fn test_skip_discussion() {
        let roster = roster(3, 0);
        let mut controller = RoundPhaseController::new(60);
        controller.next_round();
        assert_eq!(controller.kind(), SessionPhase::Discussion);

        controller.advance(&roster).unwrap();
        assert_eq!(controller.kind(), SessionPhase::Voting);
    }

    #[test]
    fn test_close_voting() {
        let roster = roster(4, 0);
        let mut controller = RoundPhaseController::new(5);
        to_voting(&mut controller, &roster);

        controller.submit_vote(&roster, p(0), p(1)).unwrap();
        controller.submit_vote(&roster, p(1), p(2)).unwrap();
        controller.submit_vote(&roster, p(2), p(1)).unwrap();
        assert_eq!(
            controller.advance(&roster),
            Err(SessionError::VotingIncomplete { pending: 1 })
        );
        assert_eq!(controller.kind(), SessionPhase::Voting);

        controller.submit_vote(&roster, p(3), p(1)).unwrap();
        let result = controller.advance(&roster).unwrap().unwrap();

        assert_eq!(result.eliminated_id, p(1));
        assert!(!result.is_terminal());
        assert_eq!(controller.kind(), SessionPhase::Results);

        let (stored, tally) = controller.result().unwrap();
        assert_eq!(stored, &result);
        assert_eq!(tally[0], TallyEntry { target: p(1), votes: 3 });

        controller.advance(&roster).unwrap();
        assert_eq!(controller.kind(), SessionPhase::Discussion);
    }

    #[test]
    fn test_vote_outside_voting() {
        let roster = roster(3, 0);
        let mut controller = RoundPhaseController::new(5);

        assert_eq!(
            controller.submit_vote(&roster, p(0), p(1)),
            Err(SessionError::WrongPhase {
                expected: SessionPhase::Voting,
                actual: SessionPhase::RoleReveal,
            })
        );
    }

    #[test]
    fn test_voting_floor() {
        let mut roster = roster(3, 0);
        roster.eliminate(p(1));
        roster.eliminate(p(2));
        let mut controller = RoundPhaseController::new(5);
        controller.next_round();

        assert_eq!(
            controller.advance(&roster),
            Err(SessionError::NotEnoughActivePlayers { active: 1 })
        );
        assert_eq!(controller.kind(), SessionPhase::Discussion);
    }
}
