//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use tt_roster_rules::{
    ChampionshipType, Composition, Equipe, Gender, Match, Nationality, Phase, Player, RuleConfig,
    Selection, Team, ValidationContext,
};

/// Active domestic man with 1000 points and license "L-<id>".
pub fn man(id: &str) -> Player {
    Player::new(id, Gender::M)
        .with_points(1000)
        .with_license(format!("L-{id}"))
}

/// Active domestic woman with 1000 points and license "L-<id>".
pub fn woman(id: &str) -> Player {
    Player::new(id, Gender::F)
        .with_points(1000)
        .with_license(format!("L-{id}"))
}

pub fn foreigner(id: &str) -> Player {
    man(id).with_nationality(Nationality::Etr)
}

pub fn burned_masculine(mut player: Player, phase: Phase, team: u32) -> Player {
    player.highest_masculine_team_number_by_phase.insert(phase, team);
    player
}

pub fn burned_paris(mut player: Player, phase: Phase, team: u32) -> Player {
    player.highest_team_number_by_phase_paris.insert(phase, team);
    player
}

/// Team "t<number>" in the given division, no fixtures.
pub fn equipe(number: u32, division: &str) -> Equipe {
    Equipe::new(Team::new(format!("t{number}"), number, division))
}

/// Everything a validation context borrows.
pub struct Fixture {
    pub players: Vec<Player>,
    pub equipes: Vec<Equipe>,
    pub composition: Composition,
    pub config: RuleConfig,
}

impl Fixture {
    pub fn new(players: Vec<Player>, equipes: Vec<Equipe>, composition: Composition) -> Self {
        Self {
            players,
            equipes,
            composition,
            config: RuleConfig::default(),
        }
    }

    pub fn ctx(&self, selection: Selection) -> ValidationContext<'_> {
        ValidationContext::new(
            &self.players,
            &self.equipes,
            &self.composition,
            selection,
            &self.config,
        )
    }

    /// Standard masculine roster, phase aller, no matchday selected.
    pub fn standard(&self) -> ValidationContext<'_> {
        self.ctx(Selection::standard(Phase::Aller, None, ChampionshipType::Masculin))
    }

    pub fn matchday(&self, journee: u32) -> ValidationContext<'_> {
        self.ctx(Selection::standard(
            Phase::Aller,
            Some(journee),
            ChampionshipType::Masculin,
        ))
    }

    pub fn paris(&self) -> ValidationContext<'_> {
        self.ctx(Selection::paris(Phase::Aller))
    }
}

/// Played matchday-1 fixture (phase aller) of `team_id` with the given player ids on the sheet.
pub fn matchday_one(team_id: &str, player_ids: &[&str]) -> Match {
    player_ids
        .iter()
        .fold(Match::new(team_id, 1, Phase::Aller), |m, id| {
            m.with_participant(format!("L-{id}"))
        })
}
