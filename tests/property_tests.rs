//! Property tests over random rosters and random votes.

use std::collections::{BTreeSet, HashMap};

use imposter_engine::core::{GameRng, PlayerId, SessionConfig};
use imposter_engine::roles::RoleAssigner;
use imposter_engine::round::tally::{resolve, Vote};
use imposter_engine::session::{GameSession, SessionPhase};
use imposter_engine::topics::Topic;
use proptest::prelude::*;

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,12}", 3..=10).prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

fn votes_strategy() -> impl Strategy<Value = Vec<Vote>> {
    prop::collection::vec((0u8..10, 0u8..10), 1..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(v, t)| Vote::new(PlayerId::new(v), PlayerId::new(t)))
            .collect()
    })
}

/// Leader with the earliest first vote, computed the slow way.
fn expected_winner(votes: &[Vote]) -> PlayerId {
    let mut counts: HashMap<PlayerId, (u32, usize)> = HashMap::new();
    for (i, vote) in votes.iter().enumerate() {
        counts.entry(vote.target).or_insert((0, i)).0 += 1;
    }
    let max = counts.values().map(|(c, _)| *c).max().unwrap();
    counts
        .into_iter()
        .filter(|(_, (c, _))| *c == max)
        .min_by_key(|(_, (_, first))| *first)
        .map(|(target, _)| target)
        .unwrap()
}

/// Play a full game, picking each vote from `choices`. Returns the number of
/// voting phases entered.
fn play_out(seed: u64, names: &[String], choices: &[usize]) -> Result<u32, TestCaseError> {
    let config = SessionConfig::new().with_seed(seed).with_discussion_seconds(3);
    let mut session = GameSession::new(config, Topic::new("Red", "Blue", "Colours")).unwrap();
    session.start(names).unwrap();

    let roles: Vec<bool> = session.roster().unwrap().iter().map(|p| p.is_imposter).collect();
    let mut next_choice = choices.iter().cycle();
    let mut votings = 0;
    let mut terminal_seen = false;

    for _ in 0..500 {
        match session.phase() {
            SessionPhase::GameOver => break,
            SessionPhase::Discussion => {
                session.tick(1).unwrap();
                if session.phase() == SessionPhase::Voting {
                    prop_assert!(!terminal_seen);
                    votings += 1;
                    prop_assert!(session.roster().unwrap().active_count() >= 2);
                }
            }
            SessionPhase::Voting => {
                let roster = session.roster().unwrap().clone();
                for voter in session.pending_voters() {
                    let candidates: Vec<PlayerId> =
                        roster.active().map(|p| p.id).filter(|&id| id != voter).collect();
                    let pick = candidates[next_choice.next().copied().unwrap_or(0) % candidates.len()];
                    session.submit_vote(voter, pick).unwrap();
                }
                session.advance_phase().unwrap();
                if session.last_round_result().unwrap().is_terminal() {
                    terminal_seen = true;
                }
            }
            _ => {
                session.advance_phase().unwrap();
            }
        }
    }

    prop_assert_eq!(session.phase(), SessionPhase::GameOver);
    let final_roles: Vec<bool> = session.roster().unwrap().iter().map(|p| p.is_imposter).collect();
    prop_assert_eq!(roles, final_roles);

    // No transition leaves game over except replay.
    prop_assert!(session.advance_phase().is_err());
    prop_assert!(session.tick(100).is_err());
    prop_assert_eq!(session.phase(), SessionPhase::GameOver);

    Ok(votings)
}

proptest! {
    #[test]
    fn prop_exactly_one_imposter(names in names_strategy(), seed in any::<u64>()) {
        let config = SessionConfig::default();
        let roster = RoleAssigner::new(&config)
            .assign(&names, &mut GameRng::new(seed))
            .unwrap();

        prop_assert_eq!(roster.len(), names.len());
        prop_assert_eq!(roster.iter().filter(|p| p.is_imposter).count(), 1);
        prop_assert!(roster.iter().all(|p| !p.is_eliminated));
    }

    #[test]
    fn prop_tie_break_is_deterministic(votes in votes_strategy()) {
        let first = resolve(&votes);
        let second = resolve(&votes);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, Some(expected_winner(&votes)));
    }

    #[test]
    fn prop_games_terminate(
        names in names_strategy(),
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 1..64),
    ) {
        let votings = play_out(seed, &names, &choices)?;

        // Each vote removes one player and the game ends before fewer than
        // two innocents remain.
        prop_assert!(votings >= 1);
        prop_assert!(votings as usize <= names.len() - 2);
    }
}
