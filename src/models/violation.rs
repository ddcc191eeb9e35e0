//! Rule violations. These are ordinary values returned by the validators, never errors.

use crate::models::division::DivisionTier;
use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Which Paris article-8 bound was crossed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointOrderBound {
    /// More points than the weakest player of the group above.
    AboveUpperGroup,
    /// Fewer points than the strongest player of the group below.
    BelowLowerGroup,
}

/// A broken roster rule. `Display` renders the user-facing reason shown by the UI.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Violation {
    /// The player id is not in the supplied directory.
    PlayerNotFound { player_id: PlayerId },
    /// The team id is not in the supplied directory.
    TeamNotFound { team_id: TeamId },
    /// The roster already holds `capacity` players.
    TeamFull { capacity: usize },
    /// Another foreign (ETR) player is already in the team.
    ForeignQuota { max: usize },
    /// The player is burned into a stronger team.
    Burned {
        player: String,
        burned_team: u32,
        target_team: u32,
    },
    /// Too many players below the division's point floor.
    PointFloor {
        division: DivisionTier,
        min_points: u32,
        min_players: usize,
    },
    /// Too many women in a masculine team.
    FemaleQuota { max: usize },
    /// Too many players who played matchday 1 in a lower-numbered team.
    MatchdayOneStacking {
        journee: u32,
        count: usize,
        max: usize,
    },
    /// Paris article 12: too many burned-in players in one group (1-based group number).
    ParisBurnedInGroup { group: usize, count: usize, max: usize },
    /// Paris article 8: a player's points break the ordering between groups.
    ParisPointOrder {
        player: String,
        group: usize,
        points: u32,
        bound: PointOrderBound,
        limit: u32,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::PlayerNotFound { .. } | Violation::TeamNotFound { .. } => {
                write!(f, "Données introuvables")
            }
            Violation::TeamFull { capacity } => {
                write!(f, "Équipe complète ({} joueurs maximum)", capacity)
            }
            Violation::ForeignQuota { max } => write!(
                f,
                "Maximum {} joueur étranger (ETR) par équipe",
                max
            ),
            Violation::Burned {
                player,
                burned_team,
                target_team,
            } => write!(
                f,
                "{} est brûlé en équipe {} et ne peut pas jouer en équipe {}",
                player, burned_team, target_team
            ),
            Violation::PointFloor {
                division,
                min_points,
                min_players,
            } => write!(
                f,
                "En {}, au moins {} joueurs doivent avoir {} points ou plus",
                division, min_players, min_points
            ),
            Violation::FemaleQuota { max } => write!(
                f,
                "Maximum {} joueuses dans une équipe masculine",
                max
            ),
            Violation::MatchdayOneStacking { journee, count, max } => write!(
                f,
                "Journée {} : au plus {} joueur(s) ayant disputé la journée 1 dans une équipe de numéro inférieur ({} dans cette équipe)",
                journee, max, count
            ),
            Violation::ParisBurnedInGroup { group, count, max } => write!(
                f,
                "Article 12 : {} joueurs brûlés dans le groupe {} ({} maximum), ils seraient non qualifiés",
                count, group, max
            ),
            Violation::ParisPointOrder {
                player,
                group,
                points,
                bound,
                limit,
            } => match bound {
                PointOrderBound::AboveUpperGroup => write!(
                    f,
                    "Article 8 : {} ({} pts, groupe {}) a plus de points que le minimum du groupe supérieur ({} pts)",
                    player, points, group, limit
                ),
                PointOrderBound::BelowLowerGroup => write!(
                    f,
                    "Article 8 : {} ({} pts, groupe {}) a moins de points que le maximum du groupe inférieur ({} pts)",
                    player, points, group, limit
                ),
            },
        }
    }
}
