//! Individual roster rules shared by the assignment and state validators.
//!
//! Each check looks at a roster (in order) and returns the first violation it finds.

use crate::config::RuleConfig;
use crate::logic::burn::{burned_team_number, MatchdayOneIndex};
use crate::models::{
    ChampionshipType, DivisionTier, Gender, Phase, Player, RuleSet, Team, Violation,
};

pub(crate) fn check_capacity(roster_len: usize, capacity: usize) -> Option<Violation> {
    (roster_len > capacity).then_some(Violation::TeamFull { capacity })
}

pub(crate) fn count_foreign(roster: &[&Player]) -> usize {
    roster.iter().filter(|p| p.is_foreign()).count()
}

/// Standard burn rule: a player burned into team K may not play in a team numbered above K.
pub(crate) fn check_burn(
    player: &Player,
    team: &Team,
    championship: ChampionshipType,
    phase: Phase,
) -> Option<Violation> {
    let target_team = team.number?;
    let burned_team = burned_team_number(player, RuleSet::Standard, championship, phase)?;
    (target_team > burned_team).then(|| Violation::Burned {
        player: player.display_name(),
        burned_team,
        target_team,
    })
}

/// Division floor: at most `capacity - min_players` players may sit below `min_points`.
///
/// Counting players below the floor (rather than above) keeps partial rosters valid.
pub(crate) fn check_point_floor(
    roster: &[&Player],
    team: &Team,
    championship: ChampionshipType,
    capacity: usize,
    config: &RuleConfig,
) -> Option<Violation> {
    let division = DivisionTier::parse(&team.division);
    let floor = config.point_floor(division, championship)?;
    let below = roster
        .iter()
        .filter(|p| p.points_or_zero() < floor.min_points)
        .count();
    (below > capacity.saturating_sub(floor.min_players)).then_some(Violation::PointFloor {
        division,
        min_points: floor.min_points,
        min_players: floor.min_players,
    })
}

pub(crate) fn check_female_quota(
    roster: &[&Player],
    championship: ChampionshipType,
    config: &RuleConfig,
) -> Option<Violation> {
    if championship != ChampionshipType::Masculin {
        return None;
    }
    let women = roster.iter().filter(|p| p.gender == Gender::F).count();
    (women > config.max_female_in_masculine).then_some(Violation::FemaleQuota {
        max: config.max_female_in_masculine,
    })
}

/// Players of the roster who played matchday 1 in a lower-numbered team than `team_number`.
pub(crate) fn count_matchday_one_lower(
    roster: &[&Player],
    team_number: u32,
    index: &MatchdayOneIndex,
) -> usize {
    roster
        .iter()
        .filter(|p| index.lower_team_played(p, team_number).is_some())
        .count()
}
