//! Player record and the enums describing who a player is (gender, nationality) and when (phase).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a player (Firestore document id on the collaborator side).
pub type PlayerId = String;

/// Half of the season a roster or burn marker belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Aller,
    Retour,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Aller => write!(f, "aller"),
            Phase::Retour => write!(f, "retour"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// Nationality category as published by the federation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Nationality {
    /// Domestic player.
    #[default]
    #[serde(rename = "FR")]
    Fr,
    /// EU player ("C" in federation data); not subject to the foreign quota.
    C,
    /// Foreign (non-EU) player; at most one per team.
    #[serde(rename = "ETR")]
    Etr,
}

/// Lowest-ranked (highest-numbered) team a player is locked into, per phase.
pub type BurnMap = HashMap<Phase, u32>;

/// A club member as seen by the roster engine.
///
/// Burn maps are filled by the federation sync job; the engine only reads them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub gender: Gender,
    #[serde(default)]
    pub nationality: Nationality,
    /// Official ranking points; absent for players never ranked.
    #[serde(default)]
    pub points: Option<u32>,
    /// Federation license; absent for temporary/unlicensed players.
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_temporary: bool,
    #[serde(default)]
    pub highest_masculine_team_number_by_phase: BurnMap,
    #[serde(default)]
    pub highest_feminine_team_number_by_phase: BurnMap,
    #[serde(default)]
    pub highest_team_number_by_phase_paris: BurnMap,
}

fn default_true() -> bool {
    true
}

impl Player {
    /// Create an active domestic player with no points, license or burn markers.
    pub fn new(id: impl Into<PlayerId>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            gender,
            nationality: Nationality::Fr,
            points: None,
            license: None,
            is_active: true,
            is_temporary: false,
            highest_masculine_team_number_by_phase: BurnMap::new(),
            highest_feminine_team_number_by_phase: BurnMap::new(),
            highest_team_number_by_phase_paris: BurnMap::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_nationality(mut self, nationality: Nationality) -> Self {
        self.nationality = nationality;
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// "First Last", falling back to the id when the record carries no name.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.id.clone()
        } else {
            name.to_string()
        }
    }

    pub fn is_foreign(&self) -> bool {
        self.nationality == Nationality::Etr
    }

    /// Points used for threshold comparisons; unranked players count as zero.
    pub fn points_or_zero(&self) -> u32 {
        self.points.unwrap_or(0)
    }
}
