use serde::{Deserialize, Serialize};

/// Where a session is, as seen by the presentation layer.
///
/// `Lobby -> RoleReveal -> TopicReveal -> Discussion -> Voting -> Results`,
/// then back to `Discussion` or on to `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    Lobby,
    RoleReveal,
    TopicReveal,
    Discussion,
    Voting,
    Results,
    GameOver,
}

impl SessionPhase {
    /// Phases that hand private information to one player at a time.
    #[must_use]
    pub fn is_reveal(self) -> bool {
        matches!(self, SessionPhase::RoleReveal | SessionPhase::TopicReveal)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::Lobby => "lobby",
            SessionPhase::RoleReveal => "role reveal",
            SessionPhase::TopicReveal => "topic reveal",
            SessionPhase::Discussion => "discussion",
            SessionPhase::Voting => "voting",
            SessionPhase::Results => "results",
            SessionPhase::GameOver => "game over",
        };
        write!(f, "{}", name)
    }
}
