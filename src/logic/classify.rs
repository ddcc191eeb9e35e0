//! Team-type classification: masculine or feminine roster slice.

use crate::models::{ChampionshipType, Equipe, RuleSet};

/// A team is feminine iff any of its fixtures is flagged as a feminine encounter.
pub fn classify_championship_type(equipe: &Equipe) -> ChampionshipType {
    if equipe.matches.iter().any(|m| m.is_female) {
        ChampionshipType::Feminin
    } else {
        ChampionshipType::Masculin
    }
}

/// Slice a team is stored under. The Paris championship is mixed and always stored as masculine.
pub fn storage_championship_type(equipe: &Equipe, rule_set: RuleSet) -> ChampionshipType {
    match rule_set {
        RuleSet::Paris => ChampionshipType::Masculin,
        RuleSet::Standard => classify_championship_type(equipe),
    }
}
