//! Paris championship rules: group-based burn limit (article 12) and point ordering (article 8).
//!
//! Groups are positional: with a group size of 3, roster slots 0-2 form group 1 (strongest),
//! slots 3-5 group 2, and so on.

use crate::logic::burn::is_burned_in_paris;
use crate::models::{group_of_slot, Phase, Player, PointOrderBound, Violation};

/// Slots belonging to a zero-based group, clamped to the roster length.
fn group_slots(group: usize, group_size: usize, len: usize) -> std::ops::Range<usize> {
    let start = (group * group_size).min(len);
    let end = ((group + 1) * group_size).min(len);
    start..end
}

/// Article 12 for the group containing `slot`.
pub(crate) fn check_burned_in_group(
    roster: &[&Player],
    slot: usize,
    team_number: Option<u32>,
    phase: Phase,
    group_size: usize,
    max: usize,
) -> Option<Violation> {
    let group = group_of_slot(slot, group_size);
    let count = roster[group_slots(group, group_size, roster.len())]
        .iter()
        .filter(|p| is_burned_in_paris(p, phase, team_number))
        .count();
    (count > max).then_some(Violation::ParisBurnedInGroup {
        group: group + 1,
        count,
        max,
    })
}

/// Article 12 over every group of the roster; first offending group wins.
pub(crate) fn check_burned_in_any_group(
    roster: &[&Player],
    team_number: Option<u32>,
    phase: Phase,
    group_size: usize,
    max: usize,
) -> Option<Violation> {
    (0..roster.len())
        .step_by(group_size.max(1))
        .find_map(|slot| check_burned_in_group(roster, slot, team_number, phase, group_size, max))
}

/// Article 8 for the player at `slot`.
///
/// The player's points must not exceed the weakest ranked player of the group above, nor fall
/// below the strongest ranked player of the group below. Unranked players are ignored.
pub(crate) fn check_point_order_at(roster: &[&Player], slot: usize, group_size: usize) -> Option<Violation> {
    let player = roster.get(slot)?;
    let points = player.points?;
    let group = group_of_slot(slot, group_size);

    if group > 0 {
        let upper_min = roster[group_slots(group - 1, group_size, roster.len())]
            .iter()
            .filter_map(|p| p.points)
            .min();
        if let Some(limit) = upper_min.filter(|&min| points > min) {
            return Some(Violation::ParisPointOrder {
                player: player.display_name(),
                group: group + 1,
                points,
                bound: PointOrderBound::AboveUpperGroup,
                limit,
            });
        }
    }

    let lower_max = roster[group_slots(group + 1, group_size, roster.len())]
        .iter()
        .filter_map(|p| p.points)
        .max();
    lower_max
        .filter(|&max| points < max)
        .map(|limit| Violation::ParisPointOrder {
            player: player.display_name(),
            group: group + 1,
            points,
            bound: PointOrderBound::BelowLowerGroup,
            limit,
        })
}

/// Article 8 for every slot whose group, or whose neighbouring group, holds `first_slot` or a
/// later slot. `skip` is not re-checked.
pub(crate) fn check_point_order_from(
    roster: &[&Player],
    first_slot: usize,
    skip: usize,
    group_size: usize,
) -> Option<Violation> {
    let group = group_of_slot(first_slot, group_size).saturating_sub(1);
    (group * group_size..roster.len())
        .filter(|&slot| slot != skip)
        .find_map(|slot| check_point_order_at(roster, slot, group_size))
}

/// Article 8 for every player of the roster.
pub(crate) fn point_order_violations(roster: &[&Player], group_size: usize) -> Vec<Violation> {
    (0..roster.len())
        .filter_map(|slot| check_point_order_at(roster, slot, group_size))
        .collect()
}
