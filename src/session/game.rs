//! Whole-game orchestration.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::phase::SessionPhase;
use super::view::SessionView;
use crate::core::{GameRng, Player, PlayerId, Roster, SessionConfig};
use crate::error::{ConfigError, SessionError};
use crate::roles::RoleAssigner;
use crate::round::{Faction, Reveal, RoundPhaseController, RoundResult, TallyEntry};
use crate::topics::{Topic, TopicProvider};

/// Final result, kept for display until `replay()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Faction,
    pub imposter: PlayerId,
    pub imposter_name: String,
    pub topic: Topic,
    /// Rounds played, counting the last one.
    pub rounds: u32,
}

/// State of a game that has been started.
#[derive(Clone, Debug)]
pub(crate) struct Game {
    pub(crate) roster: Roster,
    pub(crate) imposter: PlayerId,
    pub(crate) topic: Topic,
    pub(crate) controller: RoundPhaseController,
    pub(crate) round: u32,
    pub(crate) last_result: Option<RoundResult>,
}

#[derive(Clone, Debug)]
pub(crate) enum SessionState {
    Lobby,
    Playing(Game),
    Finished { game: Game, outcome: Outcome },
}

/// One table of players from lobby to game over.
///
/// Every method is synchronous and either applies a whole transition or
/// returns an error and leaves the session untouched.
///
/// ```
/// use imposter_engine::core::{PlayerId, SessionConfig};
/// use imposter_engine::session::{GameSession, SessionPhase};
/// use imposter_engine::topics::Topic;
///
/// let config = SessionConfig::new().with_seed(1);
/// let mut session = GameSession::new(config, Topic::new("Sun", "Moon", "Sky things")).unwrap();
///
/// session.start(&["Ana", "Ben", "Cleo"]).unwrap();
/// assert_eq!(session.phase(), SessionPhase::RoleReveal);
///
/// // Three role reveals, three word reveals, then skip the discussion.
/// for _ in 0..7 {
///     session.advance_phase().unwrap();
/// }
/// assert_eq!(session.phase(), SessionPhase::Voting);
/// ```
pub struct GameSession<P> {
    config: SessionConfig,
    rng: GameRng,
    topics: P,
    state: SessionState,
}

impl<P: TopicProvider> GameSession<P> {
    /// Create a session in the lobby.
    pub fn new(config: SessionConfig, topics: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("session created, seed {}", rng.seed());

        Ok(Self {
            config,
            rng,
            topics,
            state: SessionState::Lobby,
        })
    }

    /// Deal roles, draw the topic, and begin the role reveal.
    pub fn start<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), SessionError> {
        match self.state {
            SessionState::Lobby => {}
            SessionState::Finished { .. } => return Err(SessionError::GameOver),
            SessionState::Playing(_) => {
                return Err(SessionError::WrongPhase {
                    expected: SessionPhase::Lobby,
                    actual: self.phase(),
                })
            }
        }

        let (roster, imposter) = RoleAssigner::new(&self.config)
            .deal(names, &mut self.rng)
            .map_err(|e| {
                warn!("rejected roster: {}", e);
                e
            })?;
        let topic = self.topics.next_topic(&mut self.rng);

        info!("game started with {} players", roster.len());
        self.state = SessionState::Playing(Game {
            roster,
            imposter,
            topic,
            controller: RoundPhaseController::new(self.config.discussion_seconds),
            round: 1,
            last_result: None,
        });
        Ok(())
    }

    /// Record a vote during the voting phase.
    pub fn submit_vote(&mut self, voter: PlayerId, target: PlayerId) -> Result<(), SessionError> {
        let game = self.game_mut()?;
        game.controller
            .submit_vote(&game.roster, voter, target)
            .map_err(|e| {
                warn!("rejected vote from {}: {}", voter, e);
                e
            })
    }

    /// Take the next step of the game and return the new phase.
    ///
    /// Closing a vote eliminates the chosen player. Leaving the results
    /// either starts the next round's discussion or ends the game.
    pub fn advance_phase(&mut self) -> Result<SessionPhase, SessionError> {
        let game = self.game_mut()?;

        if let Some((result, _)) = game.controller.result() {
            if let Some(winner) = result.winner() {
                let outcome = game.outcome(winner);
                info!("game over after {} round(s): {} win", outcome.rounds, winner);
                self.state = match std::mem::replace(&mut self.state, SessionState::Lobby) {
                    SessionState::Playing(game) => SessionState::Finished { game, outcome },
                    other => other,
                };
                return Ok(SessionPhase::GameOver);
            }
            game.round += 1;
            game.controller.next_round();
            debug!("round {} begins", game.round);
            return Ok(SessionPhase::Discussion);
        }

        if let Some(result) = game.controller.advance(&game.roster)? {
            game.roster.eliminate(result.eliminated_id);
            info!(
                "round {}: {} eliminated, imposter caught: {}",
                game.round, result.eliminated_id, result.imposter_caught
            );
            game.last_result = Some(result);
        }

        Ok(game.controller.kind())
    }

    /// Advance the discussion countdown by `seconds`.
    ///
    /// Outside discussion this does nothing. After game over it fails like
    /// every other transition.
    pub fn tick(&mut self, seconds: u32) -> Result<SessionPhase, SessionError> {
        let game = self.game_mut()?;
        game.controller.tick(seconds, &game.roster)?;
        Ok(game.controller.kind())
    }

    /// Drop the current game, if any, and return to the lobby.
    pub fn replay(&mut self) {
        debug!("replay from {}", self.phase());
        self.state = SessionState::Lobby;
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            SessionState::Lobby => SessionPhase::Lobby,
            SessionState::Playing(game) => game.controller.kind(),
            SessionState::Finished { .. } => SessionPhase::GameOver,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The roster, once a game has started.
    #[must_use]
    pub fn roster(&self) -> Option<&Roster> {
        self.game().map(|g| &g.roster)
    }

    /// The topic, once a game has started. Contains both secret words.
    #[must_use]
    pub fn topic(&self) -> Option<&Topic> {
        self.game().map(|g| &g.topic)
    }

    /// 1-based round counter.
    #[must_use]
    pub fn round_number(&self) -> Option<u32> {
        self.game().map(|g| g.round)
    }

    /// Player whose turn it is to look at the screen.
    #[must_use]
    pub fn current_actor(&self) -> Option<&Player> {
        match &self.state {
            SessionState::Playing(game) => game.controller.current_actor(&game.roster),
            _ => None,
        }
    }

    /// Index of the current actor among active players.
    #[must_use]
    pub fn current_actor_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Playing(game) => game.controller.cursor(),
            _ => None,
        }
    }

    /// The private reveal for the current actor.
    #[must_use]
    pub fn current_reveal(&self) -> Option<Reveal> {
        match &self.state {
            SessionState::Playing(game) => game.controller.reveal(&game.roster, &game.topic),
            _ => None,
        }
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u32> {
        match &self.state {
            SessionState::Playing(game) => game.controller.seconds_remaining(),
            _ => None,
        }
    }

    /// Active players who still owe a vote.
    #[must_use]
    pub fn pending_voters(&self) -> Vec<PlayerId> {
        match &self.state {
            SessionState::Playing(game) => game
                .controller
                .ballot()
                .map(|b| b.pending_voters(&game.roster))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Most recent elimination.
    #[must_use]
    pub fn last_round_result(&self) -> Option<&RoundResult> {
        self.game().and_then(|g| g.last_result.as_ref())
    }

    /// Vote counts of the round being shown in results.
    #[must_use]
    pub fn last_tally(&self) -> Option<&[TallyEntry]> {
        match &self.state {
            SessionState::Playing(game) => game.controller.result().map(|(_, tally)| tally),
            _ => None,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            SessionState::Finished { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::capture(self)
    }

    // === Internals ===

    fn game(&self) -> Option<&Game> {
        match &self.state {
            SessionState::Lobby => None,
            SessionState::Playing(game) | SessionState::Finished { game, .. } => Some(game),
        }
    }

    fn game_mut(&mut self) -> Result<&mut Game, SessionError> {
        match &mut self.state {
            SessionState::Playing(game) => Ok(game),
            SessionState::Lobby => Err(SessionError::NotStarted),
            SessionState::Finished { .. } => {
                warn!("transition attempted after game over");
                Err(SessionError::GameOver)
            }
        }
    }
}

impl Game {
    fn outcome(&self, winner: Faction) -> Outcome {
        Outcome {
            winner,
            imposter: self.imposter,
            imposter_name: self.roster[self.imposter].name.clone(),
            topic: self.topic.clone(),
            rounds: self.round,
        }
    }
}
