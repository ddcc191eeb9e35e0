//! Data structures for the roster engine: players, teams, matches, compositions, divisions, violations.

mod composition;
mod division;
mod player;
mod team;
mod violation;

pub use composition::{ChampionshipType, Composition, CompositionScope, RuleSet};
pub use division::{
    group_of_slot, resolve_paris_structure, resolve_paris_structure_with, DivisionTier,
    ParisDivision, ParisGroupStructure, PARIS_GROUP_SIZE,
};
pub use player::{BurnMap, Gender, Nationality, Phase, Player, PlayerId};
pub use team::{
    backfill_team_numbers, extract_team_number, Equipe, Match, MatchParticipant, Team, TeamId,
};
pub use violation::{PointOrderBound, Violation};
