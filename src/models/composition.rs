//! Compositions (team → ordered player ids) and the selectors that scope them.

use crate::models::player::{Phase, PlayerId};
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which roster slice a team or assignment belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChampionshipType {
    #[default]
    Masculin,
    Feminin,
}

impl std::fmt::Display for ChampionshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChampionshipType::Masculin => write!(f, "masculin"),
            ChampionshipType::Feminin => write!(f, "feminin"),
        }
    }
}

/// Which rule dialect applies.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Ladder-style team championship (championnat par équipes).
    #[default]
    Standard,
    /// Pyramid-style Paris championship, organised in groups.
    Paris,
}

/// Where a composition is stored: per matchday, phase-wide default, or Paris phase-wide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CompositionScope {
    Matchday {
        journee: u32,
        phase: Phase,
        championship: ChampionshipType,
    },
    Default {
        phase: Phase,
        championship: ChampionshipType,
    },
    Paris {
        phase: Phase,
    },
}

impl CompositionScope {
    pub fn phase(&self) -> Phase {
        match *self {
            CompositionScope::Matchday { phase, .. }
            | CompositionScope::Default { phase, .. }
            | CompositionScope::Paris { phase } => phase,
        }
    }

    /// Matchday the scope is tied to, if any.
    pub fn journee(&self) -> Option<u32> {
        match *self {
            CompositionScope::Matchday { journee, .. } => Some(journee),
            _ => None,
        }
    }

    /// Paris storage collapses the masculine/feminine distinction.
    pub fn championship(&self) -> ChampionshipType {
        match *self {
            CompositionScope::Matchday { championship, .. }
            | CompositionScope::Default { championship, .. } => championship,
            CompositionScope::Paris { .. } => ChampionshipType::Masculin,
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        match self {
            CompositionScope::Paris { .. } => RuleSet::Paris,
            _ => RuleSet::Standard,
        }
    }
}

impl std::fmt::Display for CompositionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionScope::Matchday {
                journee,
                phase,
                championship,
            } => write!(f, "{}_{}_{}", phase, journee, championship),
            CompositionScope::Default { phase, championship } => {
                write!(f, "defaults_{}_{}", phase, championship)
            }
            CompositionScope::Paris { phase } => write!(f, "paris_{}", phase),
        }
    }
}

/// Team → ordered list of player ids for one scope. Order matters for Paris groups.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Composition {
    pub teams: BTreeMap<TeamId, Vec<PlayerId>>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for tests and fixtures.
    pub fn with_team<I, S>(mut self, team_id: impl Into<TeamId>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        self.teams
            .insert(team_id.into(), players.into_iter().map(Into::into).collect());
        self
    }

    /// Current roster of a team (empty when the team has no entry).
    pub fn roster(&self, team_id: &str) -> &[PlayerId] {
        self.teams.get(team_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Team currently holding the player, if any.
    pub fn team_of(&self, player_id: &str) -> Option<&TeamId> {
        self.teams
            .iter()
            .find(|(_, roster)| roster.iter().any(|p| p == player_id))
            .map(|(team_id, _)| team_id)
    }

    /// New composition with the player moved into `team_id` (removed from every other team).
    ///
    /// The player is appended, or inserted at `slot` when given. Callers apply this
    /// only after the validator accepted the move.
    pub fn with_assignment(&self, player_id: &str, team_id: &str, slot: Option<usize>) -> Self {
        let mut next = self.clone();
        for roster in next.teams.values_mut() {
            roster.retain(|p| p != player_id);
        }
        let roster = next.teams.entry(team_id.to_string()).or_default();
        let index = slot.map_or(roster.len(), |s| s.min(roster.len()));
        roster.insert(index, player_id.to_string());
        next
    }

    /// New composition with the player removed from every team.
    pub fn without_player(&self, player_id: &str) -> Self {
        let mut next = self.clone();
        for roster in next.teams.values_mut() {
            roster.retain(|p| p != player_id);
        }
        next
    }
}
