//! Composition-state validation: is an already saved roster still valid?

use crate::config::Article8Policy;
use crate::logic::context::{StateOutcome, ValidationContext};
use crate::logic::{paris, rules};
use crate::models::{Player, RuleSet, TeamId, Violation};
use std::collections::BTreeMap;

/// Re-run the roster rules against the persisted roster of `team_id`.
///
/// Same order as `can_assign` minus the candidate framing: capacity, foreign quota, burn of
/// each member, floor and female quota (standard) or articles 12 and 8 (Paris), then
/// matchday-1 anti-stacking over the whole roster on the trigger matchday.
pub fn validate_state(team_id: &str, ctx: &ValidationContext<'_>) -> StateOutcome {
    let invalid = |violation: Violation| {
        log::debug!("validate_state {}: {}", team_id, violation);
        StateOutcome::invalid(violation)
    };

    let Some(team) = ctx.team(team_id) else {
        return invalid(Violation::TeamNotFound {
            team_id: team_id.to_string(),
        });
    };

    let ids = ctx.roster_ids(team_id);
    let mut roster: Vec<&Player> = Vec::with_capacity(ids.len());
    for id in ids {
        match ctx.player(id) {
            Some(p) => roster.push(p),
            None => return invalid(Violation::PlayerNotFound { player_id: id.clone() }),
        }
    }

    let selection = ctx.selection;
    let config = ctx.config;
    let capacity = ctx.capacity(team);

    if let Some(v) = rules::check_capacity(roster.len(), capacity) {
        return invalid(v);
    }

    if rules::count_foreign(&roster) > config.max_foreign_players {
        return invalid(Violation::ForeignQuota {
            max: config.max_foreign_players,
        });
    }

    let mut warnings = Vec::new();
    match selection.rule_set {
        RuleSet::Standard => {
            let burned = roster
                .iter()
                .find_map(|p| rules::check_burn(p, team, selection.championship, selection.phase));
            if let Some(v) = burned {
                return invalid(v);
            }
            if let Some(v) =
                rules::check_point_floor(&roster, team, selection.championship, capacity, config)
            {
                return invalid(v);
            }
            if let Some(v) = rules::check_female_quota(&roster, selection.championship, config) {
                return invalid(v);
            }
        }
        RuleSet::Paris => {
            if let Some(v) = paris::check_burned_in_any_group(
                &roster,
                team.number,
                selection.phase,
                config.paris_group_size,
                config.max_burned_per_paris_group,
            ) {
                return invalid(v);
            }
            if config.article8_policy != Article8Policy::Off {
                let violations = paris::point_order_violations(&roster, config.paris_group_size);
                if config.article8_policy == Article8Policy::Enforce {
                    if let Some(v) = violations.into_iter().next() {
                        return invalid(v);
                    }
                } else {
                    warnings.extend(violations.iter().map(Violation::to_string));
                }
            }
        }
    }

    if ctx.is_trigger_matchday() {
        if let Some(team_number) = team.number {
            let count = rules::count_matchday_one_lower(&roster, team_number, ctx.matchday_one());
            if count > config.max_matchday_one_lower_team_players {
                return invalid(Violation::MatchdayOneStacking {
                    journee: config.trigger_journee,
                    count,
                    max: config.max_matchday_one_lower_team_players,
                });
            }
        }
    }

    StateOutcome::valid(warnings)
}

/// Validate every roster of the composition, keyed by team id (for error badges).
pub fn validate_all(ctx: &ValidationContext<'_>) -> BTreeMap<TeamId, StateOutcome> {
    ctx.composition
        .teams
        .keys()
        .map(|team_id| (team_id.clone(), validate_state(team_id, ctx)))
        .collect()
}
