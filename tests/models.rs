//! Integration tests for the building blocks: team numbers, divisions, compositions,
//! match evidence, matchday-1 lookup, classification and configuration.

mod common;

use common::*;
use tt_roster_rules::{
    backfill_team_numbers, burned_team_number, classify_championship_type, extract_team_number,
    match_was_played, storage_championship_type, Article8Policy, ChampionshipType, Composition,
    CompositionScope, DivisionTier, Match, MatchdayOneIndex, Phase, RuleConfig, RuleSet, Selection,
    Team,
};

#[test]
fn team_number_is_extracted_from_display_names() {
    assert_eq!(extract_team_number("SQY PING 3"), Some(3));
    assert_eq!(extract_team_number("Paris 12 (Excellence)"), Some(12));
    assert_eq!(extract_team_number("SQY PING"), None);
    assert_eq!(extract_team_number("Equipe 0"), None);
    assert_eq!(extract_team_number("SQY-PING3"), None);
}

#[test]
fn backfill_only_touches_teams_without_a_number() {
    let mut legacy = Team::new("a", 1, "R1");
    legacy.number = None;
    legacy.name = "SQY PING 4".to_string();
    let mut broken = Team::new("b", 1, "R1");
    broken.number = None;
    broken.name = "SQY PING".to_string();
    let mut teams = vec![legacy, broken, Team::new("c", 2, "R2")];

    assert_eq!(backfill_team_numbers(&mut teams), 1);
    assert_eq!(teams[0].number, Some(4));
    assert_eq!(teams[1].number, None);
    assert_eq!(teams[2].number, Some(2));
}

#[test]
fn division_tiers_parse_from_federation_labels() {
    let cases = [
        ("Nationale 1", DivisionTier::Nationale(1)),
        ("FED_Nationale 3 Poule B", DivisionTier::Nationale(3)),
        ("N2", DivisionTier::Nationale(2)),
        ("Pré-Nationale", DivisionTier::PreNationale),
        ("PN", DivisionTier::PreNationale),
        ("Régionale 2", DivisionTier::Regionale(2)),
        ("R1 Poule A", DivisionTier::Regionale(1)),
        ("Pré-Régionale", DivisionTier::PreRegionale),
        ("Départementale 1", DivisionTier::Departementale(1)),
        ("D3", DivisionTier::Departementale(3)),
        ("Excellence", DivisionTier::Other),
        ("", DivisionTier::Other),
    ];
    for (label, tier) in cases {
        assert_eq!(DivisionTier::parse(label), tier, "{label}");
    }
}

#[test]
fn assignment_moves_a_player_out_of_every_other_team() {
    let composition = Composition::new()
        .with_team("t1", ["a", "b"])
        .with_team("t2", ["c"]);

    let moved = composition.with_assignment("a", "t2", Some(0));
    assert_eq!(moved.roster("t1"), ["b"]);
    assert_eq!(moved.roster("t2"), ["a", "c"]);
    assert_eq!(moved.team_of("a").map(String::as_str), Some("t2"));

    let appended = composition.with_assignment("b", "t3", None);
    assert_eq!(appended.roster("t3"), ["b"]);
    assert!(appended.roster("t9").is_empty());
}

#[test]
fn composition_scopes_map_to_selections() {
    let scope = CompositionScope::Matchday {
        journee: 2,
        phase: Phase::Retour,
        championship: ChampionshipType::Feminin,
    };
    assert_eq!(scope.to_string(), "retour_2_feminin");
    assert_eq!(
        Selection::from(scope),
        Selection::standard(Phase::Retour, Some(2), ChampionshipType::Feminin)
    );

    let paris = CompositionScope::Paris { phase: Phase::Aller };
    assert_eq!(Selection::from(paris), Selection::paris(Phase::Aller));
    assert_eq!(paris.to_string(), "paris_aller");
}

#[test]
fn match_evidence_accepts_any_single_signal() {
    let base = Match::new("t1", 1, Phase::Aller);
    assert!(!match_was_played(&base));

    assert!(match_was_played(&base.clone().with_participant("L-1")));

    let mut scored = base.clone();
    scored.score = Some("8 - 6".to_string());
    assert!(match_was_played(&scored));
    scored.score = Some("0-0".to_string());
    assert!(!match_was_played(&scored));
    scored.score = Some("n/a".to_string());
    assert!(!match_was_played(&scored));

    let mut resulted = base;
    resulted.result = Some("À VENIR".to_string());
    assert!(!match_was_played(&resulted));
    resulted.result = Some("  ".to_string());
    assert!(!match_was_played(&resulted));
    resulted.result = Some("VICTOIRE".to_string());
    assert!(match_was_played(&resulted));
}

#[test]
fn matchday_one_index_keeps_the_strongest_team_of_the_slice() {
    let second_phase = Match::new("t1", 1, Phase::Retour).with_participant("L-r");
    let equipes = vec![
        equipe(1, "R1")
            .with_match(matchday_one("t1", &["a"]))
            .with_match(second_phase),
        equipe(3, "R3").with_match(matchday_one("t3", &["a", "b"])),
        equipe(2, "R2").with_match(Match::new("t2", 2, Phase::Aller).with_participant("L-c")),
        equipe(5, "R3").with_match(matchday_one("t5", &["w"]).female()),
    ];

    let index = MatchdayOneIndex::build(&equipes, Phase::Aller, ChampionshipType::Masculin);
    assert_eq!(index.team_number("L-a"), Some(1));
    assert_eq!(index.team_number("L-b"), Some(3));
    assert_eq!(index.team_number("L-c"), None);
    assert_eq!(index.team_number("L-r"), None);
    assert_eq!(index.team_number("L-w"), None);
    assert_eq!(index.len(), 2);

    assert_eq!(index.lower_team_played(&man("a"), 3), Some(1));
    assert_eq!(index.lower_team_played(&man("b"), 3), None);

    let feminine = MatchdayOneIndex::build(&equipes, Phase::Aller, ChampionshipType::Feminin);
    assert_eq!(feminine.team_number("L-w"), Some(5));
}

#[test]
fn burn_maps_are_selected_by_rule_set_and_slice() {
    let mut p = burned_masculine(man("p"), Phase::Aller, 2);
    p.highest_feminine_team_number_by_phase.insert(Phase::Aller, 1);
    let p = burned_paris(p, Phase::Retour, 4);

    assert_eq!(
        burned_team_number(&p, RuleSet::Standard, ChampionshipType::Masculin, Phase::Aller),
        Some(2)
    );
    assert_eq!(
        burned_team_number(&p, RuleSet::Standard, ChampionshipType::Feminin, Phase::Aller),
        Some(1)
    );
    assert_eq!(
        burned_team_number(&p, RuleSet::Paris, ChampionshipType::Feminin, Phase::Retour),
        Some(4)
    );
    assert_eq!(
        burned_team_number(&p, RuleSet::Paris, ChampionshipType::Masculin, Phase::Aller),
        None
    );
}

#[test]
fn team_is_feminine_when_any_match_is_female() {
    let masculine = equipe(1, "R1").with_match(matchday_one("t1", &[]));
    let feminine = equipe(2, "R1")
        .with_match(matchday_one("t2", &[]))
        .with_match(Match::new("t2", 2, Phase::Aller).female());

    assert_eq!(classify_championship_type(&masculine), ChampionshipType::Masculin);
    assert_eq!(classify_championship_type(&feminine), ChampionshipType::Feminin);
    assert_eq!(
        storage_championship_type(&feminine, RuleSet::Paris),
        ChampionshipType::Masculin
    );
    assert_eq!(
        storage_championship_type(&feminine, RuleSet::Standard),
        ChampionshipType::Feminin
    );
}

#[test]
fn player_records_deserialize_from_ui_documents() {
    let json = r#"{
        "id": "p1",
        "firstName": "Léa",
        "lastName": "Martin",
        "gender": "F",
        "nationality": "C",
        "points": 1234,
        "license": "7512345",
        "highestMasculineTeamNumberByPhase": { "aller": 3 },
        "highestTeamNumberByPhaseParis": { "retour": 2 }
    }"#;
    let player: tt_roster_rules::Player = serde_json::from_str(json).expect("player json");
    assert_eq!(player.display_name(), "Léa Martin");
    assert!(player.is_active);
    assert!(!player.is_foreign());
    assert_eq!(player.highest_masculine_team_number_by_phase.get(&Phase::Aller), Some(&3));
    assert_eq!(player.highest_team_number_by_phase_paris.get(&Phase::Retour), Some(&2));
}

#[test]
fn partial_configuration_keeps_defaults() {
    let config = RuleConfig::from_json_str(r#"{ "trigger_journee": 3, "article8_policy": "enforce" }"#)
        .expect("valid config");
    assert_eq!(config.trigger_journee, 3);
    assert_eq!(config.article8_policy, Article8Policy::Enforce);
    assert_eq!(config.standard_team_size, 4);
    assert_eq!(
        config
            .point_floor(DivisionTier::Nationale(2), ChampionshipType::Masculin)
            .map(|f| f.min_points),
        Some(1400)
    );
    assert!(config
        .point_floor(DivisionTier::Regionale(1), ChampionshipType::Masculin)
        .is_none());
}

#[test]
fn invalid_configuration_is_rejected() {
    let err = RuleConfig::from_json_str(r#"{ "paris_group_size": 0 }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid rule configuration: paris_group_size must be positive"
    );
    assert!(RuleConfig::from_json_str("{ not json").is_err());
    assert!(RuleConfig::from_json_file("/nonexistent/rules.json").is_err());
}
