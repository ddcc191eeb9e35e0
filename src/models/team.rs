//! Team, Match and the Equipe aggregate (a team plus its fixtures).

use crate::models::player::Phase;
use serde::{Deserialize, Serialize};

/// Unique identifier for a team.
pub type TeamId = String;

/// A club team entered in a championship.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    /// Display name, e.g. "SQY PING 3".
    pub name: String,
    /// Team ordinal (1 = strongest). `None` disables every numeric rule for this team.
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub division: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_channel_id: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, number: u32, division: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("{} {}", id, number),
            id,
            number: Some(number),
            division: division.into(),
            location: None,
            discord_channel_id: None,
        }
    }

    /// Fill `number` from the display name when the record predates the structured field.
    /// Returns true when a number was written.
    pub fn backfill_number(&mut self) -> bool {
        if self.number.is_some() {
            return false;
        }
        self.number = extract_team_number(&self.name);
        self.number.is_some()
    }
}

/// Migration helper: back-fill numbers on every team; returns how many were filled.
pub fn backfill_team_numbers(teams: &mut [Team]) -> usize {
    let mut filled = 0;
    for team in teams.iter_mut() {
        if team.backfill_number() {
            filled += 1;
        }
    }
    let missing = teams.iter().filter(|t| t.number.is_none()).count();
    if missing > 0 {
        log::warn!("{} team(s) still have no parseable number; numeric rules are skipped for them", missing);
    }
    filled
}

/// Extract the ordinal from a display name such as "SQY PING 3" or "Paris 12 (Excellence)".
///
/// Uses the first whitespace-separated token made only of digits. A missing or zero
/// ordinal yields `None`.
pub fn extract_team_number(name: &str) -> Option<u32> {
    name.split_whitespace()
        .find(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|&n| n > 0)
}

/// A player recorded on a match sheet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipant {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// One fixture of a team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: String,
    pub team_id: TeamId,
    pub journee: u32,
    pub phase: Phase,
    /// True when this encounter is played in the feminine championship.
    #[serde(default)]
    pub is_female: bool,
    /// Raw score as published, e.g. "8-6".
    #[serde(default)]
    pub score: Option<String>,
    /// Raw result label, e.g. "VICTOIRE" or "À VENIR".
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub participants: Vec<MatchParticipant>,
}

impl Match {
    pub fn new(team_id: impl Into<TeamId>, journee: u32, phase: Phase) -> Self {
        let team_id = team_id.into();
        Self {
            id: format!("{}-{}-J{}", team_id, phase, journee),
            team_id,
            journee,
            phase,
            is_female: false,
            score: None,
            result: None,
            participants: Vec::new(),
        }
    }

    /// Add a participant by license (builder style, for sync jobs and tests).
    pub fn with_participant(mut self, license: impl Into<String>) -> Self {
        self.participants.push(MatchParticipant {
            license: Some(license.into()),
            name: String::new(),
        });
        self
    }

    pub fn female(mut self) -> Self {
        self.is_female = true;
        self
    }
}

/// A team with its ordered fixtures.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipe {
    pub team: Team,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Equipe {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            matches: Vec::new(),
        }
    }

    pub fn with_match(mut self, m: Match) -> Self {
        self.matches.push(m);
        self
    }
}
