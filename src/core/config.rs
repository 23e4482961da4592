//! Session configuration.
//!
//! Callers build a `SessionConfig` once and hand it to
//! [`GameSession::new`](crate::session::GameSession::new). Every field has a
//! default, so a partial JSON/TOML document deserializes cleanly.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Colours handed out to players by roster position.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#f97316", "#ec4899", "#14b8a6",
    "#6366f1", "#84cc16",
];

/// Tunables for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Smallest accepted roster.
    pub min_players: usize,

    /// Largest accepted roster.
    pub max_players: usize,

    /// Maximum name length in characters, after trimming.
    pub max_name_len: usize,

    /// Length of the discussion countdown.
    pub discussion_seconds: u32,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Display colours, assigned cyclically.
    pub palette: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 10,
            max_name_len: 20,
            discussion_seconds: 60,
            seed: None,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_discussion_seconds(mut self, seconds: u32) -> Self {
        self.discussion_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the bounds describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 3 {
            return Err(ConfigError::MinPlayersTooSmall(self.min_players));
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::InvertedBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.max_players > usize::from(u8::MAX) {
            return Err(ConfigError::MaxPlayersTooLarge(self.max_players));
        }
        if self.max_name_len == 0 {
            return Err(ConfigError::ZeroNameLength);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Colour for the player at `index`.
    #[must_use]
    pub fn color_for(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }
}
