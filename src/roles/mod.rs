//! Role assignment.
//!
//! Every session has exactly one imposter, chosen once when the roster is
//! built and never reassigned.

mod assigner;

pub use assigner::RoleAssigner;
