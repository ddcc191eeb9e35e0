//! Validation context (the read-only snapshot a caller hands to the validators) and their outcomes.

use crate::config::RuleConfig;
use crate::logic::burn::MatchdayOneIndex;
use crate::models::{
    resolve_paris_structure_with, ChampionshipType, Composition, CompositionScope, Equipe, Phase,
    Player, PlayerId, RuleSet, Team, Violation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which roster is being edited: phase, optional matchday, slice and rule dialect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub phase: Phase,
    #[serde(default)]
    pub journee: Option<u32>,
    #[serde(default)]
    pub championship: ChampionshipType,
    #[serde(default)]
    pub rule_set: RuleSet,
}

impl Selection {
    pub fn standard(phase: Phase, journee: Option<u32>, championship: ChampionshipType) -> Self {
        Self {
            phase,
            journee,
            championship,
            rule_set: RuleSet::Standard,
        }
    }

    pub fn paris(phase: Phase) -> Self {
        Self {
            phase,
            journee: None,
            championship: ChampionshipType::Masculin,
            rule_set: RuleSet::Paris,
        }
    }
}

impl From<CompositionScope> for Selection {
    fn from(scope: CompositionScope) -> Self {
        Self {
            phase: scope.phase(),
            journee: scope.journee(),
            championship: scope.championship(),
            rule_set: scope.rule_set(),
        }
    }
}

/// Immutable snapshot of everything the rules look at.
///
/// Building it indexes players and teams by id, and (only when the anti-stacking rule can
/// apply) the matchday-1 participation of every team.
pub struct ValidationContext<'a> {
    pub players: &'a [Player],
    pub equipes: &'a [Equipe],
    pub composition: &'a Composition,
    pub selection: Selection,
    pub config: &'a RuleConfig,
    players_by_id: HashMap<&'a str, &'a Player>,
    equipes_by_id: HashMap<&'a str, &'a Equipe>,
    matchday_one: MatchdayOneIndex,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        players: &'a [Player],
        equipes: &'a [Equipe],
        composition: &'a Composition,
        selection: Selection,
        config: &'a RuleConfig,
    ) -> Self {
        let players_by_id = players.iter().map(|p| (p.id.as_str(), p)).collect();
        let equipes_by_id = equipes.iter().map(|e| (e.team.id.as_str(), e)).collect();
        let matchday_one = if selection.rule_set == RuleSet::Standard
            && selection.journee == Some(config.trigger_journee)
        {
            MatchdayOneIndex::build(equipes, selection.phase, selection.championship)
        } else {
            MatchdayOneIndex::default()
        };
        Self {
            players,
            equipes,
            composition,
            selection,
            config,
            players_by_id,
            equipes_by_id,
            matchday_one,
        }
    }

    pub fn player(&self, id: &str) -> Option<&'a Player> {
        self.players_by_id.get(id).copied()
    }

    pub fn equipe(&self, team_id: &str) -> Option<&'a Equipe> {
        self.equipes_by_id.get(team_id).copied()
    }

    pub fn team(&self, team_id: &str) -> Option<&'a Team> {
        self.equipe(team_id).map(|e| &e.team)
    }

    pub fn roster_ids(&self, team_id: &str) -> &'a [PlayerId] {
        self.composition.roster(team_id)
    }

    pub fn matchday_one(&self) -> &MatchdayOneIndex {
        &self.matchday_one
    }

    /// True when the selected matchday is the one the anti-stacking rule applies to.
    pub fn is_trigger_matchday(&self) -> bool {
        self.selection.rule_set == RuleSet::Standard
            && self.selection.journee == Some(self.config.trigger_journee)
    }

    pub fn capacity(&self, team: &Team) -> usize {
        team_capacity(team, self.selection.rule_set, self.config)
    }
}

/// Maximum roster size: fixed for standard teams, group-derived for Paris teams.
pub fn team_capacity(team: &Team, rule_set: RuleSet, config: &RuleConfig) -> usize {
    match rule_set {
        RuleSet::Standard => config.standard_team_size,
        RuleSet::Paris => resolve_paris_structure_with(&team.division, config.paris_group_size)
            .map(|s| s.total_players)
            .unwrap_or(config.paris_fallback_team_size),
    }
}

/// Result of `can_assign`. The simulated roster is filled whether or not the move is allowed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub can_assign: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    /// Non-blocking findings (Paris article 8 under the `warn` policy).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub simulated_roster: Vec<Player>,
}

impl AssignmentOutcome {
    pub(crate) fn accepted(simulated_roster: Vec<Player>, warnings: Vec<String>) -> Self {
        Self {
            can_assign: true,
            reason: None,
            violation: None,
            warnings,
            simulated_roster,
        }
    }

    pub(crate) fn rejected(violation: Violation, simulated_roster: Vec<Player>) -> Self {
        Self {
            can_assign: false,
            reason: Some(violation.to_string()),
            violation: Some(violation),
            warnings: Vec::new(),
            simulated_roster,
        }
    }
}

/// Result of `validate_state` for one persisted roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl StateOutcome {
    pub(crate) fn valid(warnings: Vec<String>) -> Self {
        Self {
            valid: true,
            reason: None,
            violation: None,
            warnings,
        }
    }

    pub(crate) fn invalid(violation: Violation) -> Self {
        Self {
            valid: false,
            reason: Some(violation.to_string()),
            violation: Some(violation),
            warnings: Vec::new(),
        }
    }
}
