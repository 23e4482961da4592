//! Roster validation and imposter selection.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::core::{GameRng, Player, PlayerId, Roster, SessionConfig};
use crate::error::InvalidRosterError;

/// Builds a roster from player names using the bounds of a `SessionConfig`.
#[derive(Clone, Copy, Debug)]
pub struct RoleAssigner<'a> {
    config: &'a SessionConfig,
}

impl<'a> RoleAssigner<'a> {
    #[must_use]
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Check names and return them trimmed.
    ///
    /// Checks run in order: roster size, then per name (blank, too long,
    /// duplicate of an earlier name ignoring case). The first failure wins.
    pub fn validate<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>, InvalidRosterError> {
        let count = names.len();
        if count < self.config.min_players {
            return Err(InvalidRosterError::TooFewPlayers {
                count,
                min: self.config.min_players,
            });
        }
        if count > self.config.max_players {
            return Err(InvalidRosterError::TooManyPlayers {
                count,
                max: self.config.max_players,
            });
        }

        let mut seen = FxHashSet::default();
        let mut trimmed = Vec::with_capacity(count);

        for (index, raw) in names.iter().enumerate() {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(InvalidRosterError::BlankName { index });
            }
            if name.chars().count() > self.config.max_name_len {
                return Err(InvalidRosterError::NameTooLong {
                    name: name.to_string(),
                    max: self.config.max_name_len,
                });
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(InvalidRosterError::DuplicateName {
                    name: name.to_string(),
                });
            }
            trimmed.push(name.to_string());
        }

        Ok(trimmed)
    }

    /// Validate `names` and deal roles: one uniformly chosen imposter, the
    /// rest innocents. Player ids follow input order.
    pub fn assign<S: AsRef<str>>(
        &self,
        names: &[S],
        rng: &mut GameRng,
    ) -> Result<Roster, InvalidRosterError> {
        self.deal(names, rng).map(|(roster, _)| roster)
    }

    /// Like [`assign`](Self::assign), also returning the imposter's seat.
    pub fn deal<S: AsRef<str>>(
        &self,
        names: &[S],
        rng: &mut GameRng,
    ) -> Result<(Roster, PlayerId), InvalidRosterError> {
        let names = self.validate(names)?;
        let imposter = rng.gen_index(names.len());
        trace!("imposter seat {}", imposter);

        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                Player::new(
                    PlayerId::new(i as u8),
                    name,
                    i == imposter,
                    self.config.color_for(i),
                )
            })
            .collect::<Vec<_>>();

        debug!("dealt roles to {} players", players.len());
        Ok((Roster::new(players), PlayerId::new(imposter as u8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_basic() {
        let config = SessionConfig::default();
        let mut rng = GameRng::new(42);

        let roster = RoleAssigner::new(&config)
            .assign(&["Ana", "Ben", "Cleo", "Dev"], &mut rng)
            .unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.iter().filter(|p| p.is_imposter).count(), 1);
        for (i, player) in roster.iter().enumerate() {
            assert_eq!(player.id.index(), i);
            assert!(!player.is_eliminated);
            assert_eq!(player.color, config.color_for(i));
        }
    }

    #[test]
    fn test_assign_trims_names() {
        let config = SessionConfig::default();
        let mut rng = GameRng::new(1);

        let roster = RoleAssigner::new(&config)
            .assign(&["  Ana ", "Ben\t", "Cleo"], &mut rng)
            .unwrap();

        assert_eq!(roster[PlayerId::new(0)].name, "Ana");
        assert_eq!(roster[PlayerId::new(1)].name, "Ben");
    }

    #[test]
    fn test_assign_is_seeded() {
        let config = SessionConfig::default();
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];

        let first = RoleAssigner::new(&config)
            .assign(&names, &mut GameRng::new(77))
            .unwrap();
        let second = RoleAssigner::new(&config)
            .assign(&names, &mut GameRng::new(77))
            .unwrap();

        assert_eq!(first.imposter(), second.imposter());
    }

    #[test]
    fn test_every_seat_can_be_imposter() {
        let config = SessionConfig::default();
        let assigner = RoleAssigner::new(&config);
        let mut rng = GameRng::new(5);
        let mut hits = [0usize; 3];

        for _ in 0..300 {
            let roster = assigner.assign(&["a", "b", "c"], &mut rng).unwrap();
            hits[roster.imposter().unwrap().id.index()] += 1;
        }

        assert!(hits.iter().all(|&h| h > 0), "hits: {:?}", hits);
    }

    #[test]
    fn test_deal_reports_imposter_seat() {
        let config = SessionConfig::default();
        let assigner = RoleAssigner::new(&config);
        let mut rng = GameRng::new(13);

        for _ in 0..50 {
            let (roster, imposter) = assigner.deal(&["a", "b", "c", "d", "e"], &mut rng).unwrap();
            assert!(roster[imposter].is_imposter);
            assert_eq!(roster.imposter().map(|p| p.id), Some(imposter));
        }

        // Same seed: the plain assign draws the same seat.
        let (_, seat) = assigner.deal(&["a", "b", "c"], &mut GameRng::new(4)).unwrap();
        let roster = assigner.assign(&["a", "b", "c"], &mut GameRng::new(4)).unwrap();
        assert_eq!(roster.imposter().map(|p| p.id), Some(seat));
    }

    #[test]
    fn test_size_bounds() {
        let config = SessionConfig::default();
        let assigner = RoleAssigner::new(&config);

        assert_eq!(
            assigner.validate(&["a", "b"]),
            Err(InvalidRosterError::TooFewPlayers { count: 2, min: 3 })
        );

        let eleven: Vec<String> = (0..11).map(|i| format!("p{}", i)).collect();
        assert_eq!(
            assigner.validate(&eleven),
            Err(InvalidRosterError::TooManyPlayers { count: 11, max: 10 })
        );

        let ten: Vec<String> = (0..10).map(|i| format!("p{}", i)).collect();
        assert!(assigner.validate(&ten).is_ok());
    }

    #[test]
    fn test_name_rules() {
        let config = SessionConfig::default();
        let assigner = RoleAssigner::new(&config);

        assert_eq!(
            assigner.validate(&["a", "   ", "c"]),
            Err(InvalidRosterError::BlankName { index: 1 })
        );
        assert_eq!(
            assigner.validate(&["Ana", "Ben", "ana"]),
            Err(InvalidRosterError::DuplicateName {
                name: "ana".to_string()
            })
        );

        let long = "x".repeat(21);
        assert!(matches!(
            assigner.validate(&["a", "b", long.as_str()]),
            Err(InvalidRosterError::NameTooLong { max: 20, .. })
        ));

        // Length counts characters, not bytes.
        let accented = "é".repeat(20);
        assert!(assigner.validate(&["a", "b", accented.as_str()]).is_ok());
    }
}
