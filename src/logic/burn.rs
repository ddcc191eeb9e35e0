//! Burn tracking (brûlage): which team a player is locked into, and who played matchday 1 where.

use crate::logic::classify::classify_championship_type;
use crate::models::{ChampionshipType, Equipe, Match, Phase, Player, RuleSet};
use std::collections::HashMap;

/// Team number the player is burned into for this slice and phase, if any.
///
/// Standard rosters read the masculine or feminine map; Paris rosters read the Paris map.
pub fn burned_team_number(
    player: &Player,
    rule_set: RuleSet,
    championship: ChampionshipType,
    phase: Phase,
) -> Option<u32> {
    let map = match (rule_set, championship) {
        (RuleSet::Paris, _) => &player.highest_team_number_by_phase_paris,
        (RuleSet::Standard, ChampionshipType::Masculin) => &player.highest_masculine_team_number_by_phase,
        (RuleSet::Standard, ChampionshipType::Feminin) => &player.highest_feminine_team_number_by_phase,
    };
    map.get(&phase).copied()
}

/// Paris: the player is burned into a stronger team than `team_number` (article 12 "brûlé").
pub fn is_burned_in_paris(player: &Player, phase: Phase, team_number: Option<u32>) -> bool {
    match (team_number, burned_team_number(player, RuleSet::Paris, ChampionshipType::Masculin, phase)) {
        (Some(n), Some(k)) => n > k,
        _ => false,
    }
}

/// True when there is evidence the match took place.
///
/// Any one of these is enough: a recorded participant, a parseable score other than 0-0,
/// or a result label other than "à venir".
pub fn match_was_played(m: &Match) -> bool {
    if !m.participants.is_empty() {
        return true;
    }
    if let Some((home, away)) = m.score.as_deref().and_then(parse_score) {
        if home != 0 || away != 0 {
            return true;
        }
    }
    m.result.as_deref().is_some_and(is_final_result)
}

/// "8-6", "8 - 6" -> (8, 6).
fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (home, away) = score.split_once('-')?;
    Some((home.trim().parse().ok()?, away.trim().parse().ok()?))
}

fn is_final_result(result: &str) -> bool {
    let normalized: String = result
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'à' { 'a' } else { c })
        .collect();
    normalized.chars().any(|c| c.is_alphanumeric()) && normalized != "a venir"
}

/// License -> lowest team number the player appeared in on matchday 1 of one phase.
#[derive(Clone, Debug, Default)]
pub struct MatchdayOneIndex {
    team_by_license: HashMap<String, u32>,
}

impl MatchdayOneIndex {
    /// Scan matchday-1 fixtures of every numbered team of `championship` for `phase`.
    pub fn build(equipes: &[Equipe], phase: Phase, championship: ChampionshipType) -> Self {
        let mut team_by_license: HashMap<String, u32> = HashMap::new();
        for equipe in equipes {
            if classify_championship_type(equipe) != championship {
                continue;
            }
            let Some(number) = equipe.team.number else {
                log::debug!("Team {} has no number, ignored for matchday 1 lookup", equipe.team.id);
                continue;
            };
            let played = equipe
                .matches
                .iter()
                .filter(|m| m.journee == 1 && m.phase == phase && match_was_played(m));
            for m in played {
                for license in m.participants.iter().filter_map(|p| p.license.as_deref()) {
                    let entry = team_by_license.entry(license.to_string()).or_insert(number);
                    *entry = (*entry).min(number);
                }
            }
        }
        Self { team_by_license }
    }

    pub fn team_number(&self, license: &str) -> Option<u32> {
        self.team_by_license.get(license).copied()
    }

    /// Matchday-1 team of the player when it is numbered lower (stronger) than `team_number`.
    pub fn lower_team_played(&self, player: &Player, team_number: u32) -> Option<u32> {
        player
            .license
            .as_deref()
            .and_then(|license| self.team_number(license))
            .filter(|&played| played < team_number)
    }

    pub fn len(&self) -> usize {
        self.team_by_license.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_by_license.is_empty()
    }
}
