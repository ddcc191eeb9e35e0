//! Single-assignment validation: may this player be placed into this team?

use crate::config::Article8Policy;
use crate::logic::classify::classify_championship_type;
use crate::logic::context::{AssignmentOutcome, ValidationContext};
use crate::logic::{paris, rules};
use crate::models::{Player, RuleSet, TeamId, Violation};

/// Check whether `player_id` may be placed into `team_id`, appended to the roster.
pub fn can_assign(player_id: &str, team_id: &str, ctx: &ValidationContext<'_>) -> AssignmentOutcome {
    can_assign_at(player_id, team_id, None, ctx)
}

/// Check whether `player_id` may be placed into `team_id` at roster position `slot`.
///
/// Rules are evaluated in a fixed order and the first violation is returned:
/// 1. player and team exist;
/// 2. capacity (the candidate's own seat does not count);
/// 3. foreign quota against the other members;
/// 4. burn (standard rosters);
/// 5. on the simulated roster: point floor then female quota (standard), or
///    article 12 then article 8 (Paris);
/// 6. matchday-1 anti-stacking on the trigger matchday (standard rosters).
pub fn can_assign_at(
    player_id: &str,
    team_id: &str,
    slot: Option<usize>,
    ctx: &ValidationContext<'_>,
) -> AssignmentOutcome {
    let (Some(player), Some(team)) = (ctx.player(player_id), ctx.team(team_id)) else {
        let violation = match ctx.player(player_id) {
            None => Violation::PlayerNotFound {
                player_id: player_id.to_string(),
            },
            Some(_) => Violation::TeamNotFound {
                team_id: team_id.to_string(),
            },
        };
        log::debug!("can_assign {} -> {}: {}", player_id, team_id, violation);
        return AssignmentOutcome::rejected(violation, Vec::new());
    };

    let selection = ctx.selection;
    let config = ctx.config;
    let capacity = ctx.capacity(team);

    let current_ids = ctx.roster_ids(team_id);
    let others: Vec<&Player> = current_ids
        .iter()
        .filter(|id| id.as_str() != player_id)
        .filter_map(|id| ctx.player(id))
        .collect();
    let other_count = current_ids.iter().filter(|id| id.as_str() != player_id).count();
    // Candidate's current slot when it is being reordered within this team.
    let old_slot = current_ids
        .iter()
        .filter(|id| ctx.player(id).is_some())
        .position(|id| id.as_str() == player_id);

    // Simulated roster: current members minus the candidate, candidate placed at `slot` or last.
    let mut simulated = others.clone();
    let candidate_slot = slot.map_or(simulated.len(), |s| s.min(simulated.len()));
    simulated.insert(candidate_slot, player);
    let preview = || simulated.iter().map(|&p| p.clone()).collect::<Vec<Player>>();

    let reject = |violation: Violation| {
        log::debug!("can_assign {} -> {}: {}", player_id, team_id, violation);
        AssignmentOutcome::rejected(violation, preview())
    };

    if other_count >= capacity {
        return reject(Violation::TeamFull { capacity });
    }

    if player.is_foreign() && rules::count_foreign(&others) >= config.max_foreign_players {
        return reject(Violation::ForeignQuota {
            max: config.max_foreign_players,
        });
    }

    let mut warnings = Vec::new();
    match selection.rule_set {
        RuleSet::Standard => {
            if let Some(v) = rules::check_burn(player, team, selection.championship, selection.phase) {
                return reject(v);
            }
            if let Some(v) =
                rules::check_point_floor(&simulated, team, selection.championship, capacity, config)
            {
                return reject(v);
            }
            if let Some(v) = rules::check_female_quota(&simulated, selection.championship, config) {
                return reject(v);
            }
        }
        // Paris burns are judged per group (article 12), never as a hard team-number bar.
        RuleSet::Paris => {
            // Inserting shifts every later member, so all groups are re-checked.
            if let Some(v) = paris::check_burned_in_any_group(
                &simulated,
                team.number,
                selection.phase,
                config.paris_group_size,
                config.max_burned_per_paris_group,
            ) {
                return reject(v);
            }
            if config.article8_policy != Article8Policy::Off {
                let group_size = config.paris_group_size;
                if let Some(v) = paris::check_point_order_at(&simulated, candidate_slot, group_size) {
                    if config.article8_policy == Article8Policy::Enforce {
                        return reject(v);
                    }
                    warnings.push(v.to_string());
                }
                if config.article8_policy == Article8Policy::Enforce {
                    let first_moved = old_slot.map_or(candidate_slot, |old| old.min(candidate_slot));
                    if let Some(v) =
                        paris::check_point_order_from(&simulated, first_moved, candidate_slot, group_size)
                    {
                        return reject(v);
                    }
                }
            }
        }
    }

    if ctx.is_trigger_matchday() {
        if let Some(team_number) = team.number {
            let index = ctx.matchday_one();
            let candidate_counts = index.lower_team_played(player, team_number).is_some();
            let count = rules::count_matchday_one_lower(&simulated, team_number, index);
            if candidate_counts && count > config.max_matchday_one_lower_team_players {
                return reject(Violation::MatchdayOneStacking {
                    journee: config.trigger_journee,
                    count,
                    max: config.max_matchday_one_lower_team_players,
                });
            }
        }
    }

    AssignmentOutcome::accepted(preview(), warnings)
}

/// Teams of the current slice the player could be dropped into, in directory order.
pub fn assignable_teams(player_id: &str, ctx: &ValidationContext<'_>) -> Vec<TeamId> {
    ctx.equipes
        .iter()
        .filter(|e| {
            ctx.selection.rule_set == RuleSet::Paris
                || classify_championship_type(e) == ctx.selection.championship
        })
        .filter(|e| can_assign(player_id, &e.team.id, ctx).can_assign)
        .map(|e| e.team.id.clone())
        .collect()
}
