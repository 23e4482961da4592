//! The game session: lobby, rounds, game over.
//!
//! [`GameSession`] owns the roster for the whole game and wires the round
//! controller, the vote tally and the win check together. Consumers
//! dispatch actions (`start`, `submit_vote`, `advance_phase`, `tick`,
//! `replay`) and render from [`SessionView`].

mod game;
mod phase;
mod view;

pub use game::{GameSession, Outcome};
pub use phase::SessionPhase;
pub use view::SessionView;
