//! Rule configuration: every season-dependent constant the validators use.
//!
//! Loaded from JSON by the web binary (`RULES_CONFIG`), otherwise `RuleConfig::default()`.

use crate::models::{ChampionshipType, DivisionTier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How strictly the Paris article-8 point ordering is applied.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Article8Policy {
    /// Violations are returned as warnings; the assignment is accepted.
    #[default]
    Warn,
    /// Violations reject the assignment.
    Enforce,
    /// Rule not evaluated.
    Off,
}

/// Minimum points a division requires from a share of the roster.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointFloor {
    pub division: DivisionTier,
    pub championship: ChampionshipType,
    pub min_points: u32,
    /// Players of a full roster that must reach `min_points`.
    pub min_players: usize,
}

impl PointFloor {
    pub const fn new(
        division: DivisionTier,
        championship: ChampionshipType,
        min_points: u32,
        min_players: usize,
    ) -> Self {
        Self {
            division,
            championship,
            min_points,
            min_players,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Matchday on which the matchday-1 anti-stacking rule applies.
    pub trigger_journee: u32,
    /// Roster size of a standard team.
    pub standard_team_size: usize,
    /// Capacity used for Paris teams whose division label is not recognised.
    pub paris_fallback_team_size: usize,
    pub paris_group_size: usize,
    pub max_foreign_players: usize,
    pub max_female_in_masculine: usize,
    /// Players per team allowed to have played matchday 1 in a lower-numbered team.
    pub max_matchday_one_lower_team_players: usize,
    /// Burned-in players allowed per Paris group (article 12).
    pub max_burned_per_paris_group: usize,
    pub article8_policy: Article8Policy,
    pub point_floors: Vec<PointFloor>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        use ChampionshipType::{Feminin, Masculin};
        use DivisionTier::Nationale;
        Self {
            trigger_journee: 2,
            standard_team_size: 4,
            paris_fallback_team_size: 5,
            paris_group_size: 3,
            max_foreign_players: 1,
            max_female_in_masculine: 2,
            max_matchday_one_lower_team_players: 1,
            max_burned_per_paris_group: 1,
            article8_policy: Article8Policy::Warn,
            point_floors: vec![
                PointFloor::new(Nationale(1), Masculin, 1600, 3),
                PointFloor::new(Nationale(2), Masculin, 1400, 3),
                PointFloor::new(Nationale(3), Masculin, 1200, 3),
                PointFloor::new(Nationale(1), Feminin, 1100, 3),
                PointFloor::new(Nationale(2), Feminin, 900, 3),
                PointFloor::new(Nationale(3), Feminin, 700, 3),
            ],
        }
    }
}

impl RuleConfig {
    /// Floor for a division tier and championship, if the tier has one.
    pub fn point_floor(&self, division: DivisionTier, championship: ChampionshipType) -> Option<&PointFloor> {
        self.point_floors
            .iter()
            .find(|f| f.division == division && f.championship == championship)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = serde_json::from_str(json).map_err(ConfigError::Json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would make every rule meaningless.
    fn check(&self) -> Result<(), ConfigError> {
        if self.standard_team_size == 0 {
            return Err(ConfigError::Invalid("standard_team_size must be positive"));
        }
        if self.paris_group_size == 0 {
            return Err(ConfigError::Invalid("paris_group_size must be positive"));
        }
        if self.paris_fallback_team_size == 0 {
            return Err(ConfigError::Invalid("paris_fallback_team_size must be positive"));
        }
        Ok(())
    }
}

/// Errors loading a rule configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Cannot read rule configuration: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid rule configuration JSON: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid rule configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
