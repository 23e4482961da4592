//! Render snapshot.
//!
//! `SessionView` is what a presentation layer draws from. It carries no
//! roles and no secret words: those are only reachable through
//! `GameSession::current_reveal` for the current actor, and through
//! `outcome` once the game is over.

use serde::{Deserialize, Serialize};

use super::game::{GameSession, Outcome};
use super::phase::SessionPhase;
use crate::core::{PlayerId, PlayerSummary};
use crate::round::{RoundResult, TallyEntry};
use crate::topics::TopicProvider;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: SessionPhase,
    /// 0 in the lobby.
    pub round: u32,
    pub active_players: Vec<PlayerSummary>,
    pub eliminated_players: Vec<PlayerSummary>,
    /// Position of the current actor among `active_players`, during reveals.
    pub current_actor_index: Option<usize>,
    pub current_actor: Option<PlayerId>,
    pub seconds_remaining: Option<u32>,
    pub pending_voters: Vec<PlayerId>,
    /// Public discussion prompt.
    pub prompt: Option<String>,
    pub last_round_result: Option<RoundResult>,
    pub last_tally: Vec<TallyEntry>,
    pub outcome: Option<Outcome>,
}

impl SessionView {
    pub(crate) fn capture<P: TopicProvider>(session: &GameSession<P>) -> Self {
        let (active_players, eliminated_players) = session
            .roster()
            .map(|roster| {
                let (active, out): (Vec<_>, Vec<_>) = roster.iter().partition(|p| p.is_active());
                (
                    active.into_iter().map(PlayerSummary::from).collect(),
                    out.into_iter().map(PlayerSummary::from).collect(),
                )
            })
            .unwrap_or_default();

        Self {
            phase: session.phase(),
            round: session.round_number().unwrap_or(0),
            active_players,
            eliminated_players,
            current_actor_index: session.current_actor_index(),
            current_actor: session.current_actor().map(|p| p.id),
            seconds_remaining: session.seconds_remaining(),
            pending_voters: session.pending_voters(),
            prompt: session.topic().map(|t| t.prompt.clone()),
            last_round_result: session.last_round_result().cloned(),
            last_tally: session.last_tally().map(<[TallyEntry]>::to_vec).unwrap_or_default(),
            outcome: session.outcome().cloned(),
        }
    }
}
