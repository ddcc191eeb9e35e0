//! Table-tennis roster engine: library with models, rule configuration and validation logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{Article8Policy, ConfigError, PointFloor, RuleConfig};
pub use logic::{
    assignable_teams, burned_team_number, can_assign, can_assign_at, classify_championship_type,
    is_burned_in_paris, match_was_played, storage_championship_type, team_capacity, validate_all,
    validate_state, AssignmentOutcome, MatchdayOneIndex, Selection, StateOutcome,
    ValidationContext,
};
pub use models::{
    backfill_team_numbers, extract_team_number, resolve_paris_structure,
    resolve_paris_structure_with, ChampionshipType, Composition, CompositionScope, DivisionTier,
    Equipe, Gender, Match, MatchParticipant, Nationality, ParisDivision, ParisGroupStructure,
    Phase, Player, PlayerId, PointOrderBound, RuleSet, Team, TeamId, Violation,
};
