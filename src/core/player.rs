//! Players and the session roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The id equals the player's 0-based position
//! in the roster at creation and never changes during a session.
//!
//! ## Roster
//!
//! Ordered player list. The only mutation after creation is
//! [`Roster::eliminate`].

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the roster position (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use imposter_engine::core::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Fixed at roster creation.
    pub is_imposter: bool,
    pub is_eliminated: bool,
    /// Display colour. The engine never reads it.
    pub color: String,
}

impl Player {
    /// Create an active player.
    pub fn new(id: PlayerId, name: impl Into<String>, is_imposter: bool, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_imposter,
            is_eliminated: false,
            color: color.into(),
        }
    }

    /// Not yet voted out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }
}

/// Public view of a player: everything except the role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            color: player.color.clone(),
        }
    }
}

/// All players of one session, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Wrap a player list. Ids must match positions.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        debug_assert!(
            players.iter().enumerate().all(|(i, p)| p.id.index() == i),
            "player ids must equal roster positions"
        );
        Self { players }
    }

    /// Total number of players, eliminated included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// All players as a slice.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Players still in the game, in roster order.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Active players that are not the imposter.
    #[must_use]
    pub fn active_innocent_count(&self) -> usize {
        self.active().filter(|p| !p.is_imposter).count()
    }

    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.get(id).is_some_and(Player::is_active)
    }

    /// The single imposter.
    #[must_use]
    pub fn imposter(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_imposter)
    }

    /// Mark a player as voted out.
    ///
    /// Returns `false` if the id is unknown or the player was already out.
    pub fn eliminate(&mut self, id: PlayerId) -> bool {
        match self.players.get_mut(id.index()) {
            Some(player) if player.is_active() => {
                player.is_eliminated = true;
                true
            }
            _ => false,
        }
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}
