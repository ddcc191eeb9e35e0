//! Roster rule logic: burn tracking, classification, assignment and state validation, Paris rules.

mod assignment;
mod burn;
mod classify;
mod context;
mod paris;
mod rules;
mod state;

pub use assignment::{assignable_teams, can_assign, can_assign_at};
pub use burn::{burned_team_number, is_burned_in_paris, match_was_played, MatchdayOneIndex};
pub use classify::{classify_championship_type, storage_championship_type};
pub use context::{team_capacity, AssignmentOutcome, Selection, StateOutcome, ValidationContext};
pub use state::{validate_all, validate_state};
