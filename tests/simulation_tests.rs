mod support;

use punter::app::{run, BookConfig, MatchScript, TimelineEvent};
use punter::domain::{EmotionToken, OutcomeClass};
use punter::error::{Error, ScriptError};
use rust_decimal_macros::dec;
use support::{score, temp_toml, DEMO_SCRIPT};

#[test]
fn demo_match_settles_all_three_bets() {
    let script = MatchScript::from_toml(DEMO_SCRIPT).unwrap();
    let report = run(&script, &BookConfig::default()).unwrap();

    assert_eq!(report.final_score, score(2, 1));
    let classes: Vec<OutcomeClass> = report.settlements.iter().map(|s| s.outcome.class).collect();
    assert_eq!(
        classes,
        vec![OutcomeClass::HalfWin, OutcomeClass::Loss, OutcomeClass::Win]
    );

    let changes: Vec<_> = report.bankrolls.iter().map(|b| b.change()).collect();
    assert_eq!(changes, vec![dec!(43), dec!(-50), dec!(44)]);
    assert_eq!(report.bankrolls[2].end, dec!(244));
    assert_eq!(report.bankrolls[2].mood, EmotionToken::ECSTATIC);
}

#[test]
fn in_play_bet_records_score_at_placement() {
    let script = MatchScript::from_toml(DEMO_SCRIPT).unwrap();
    let report = run(&script, &BookConfig::default()).unwrap();

    let priya = report
        .timeline
        .iter()
        .find_map(|event| match event {
            TimelineEvent::BetPlaced { name, score, .. } if name == "Priya" => Some(*score),
            _ => None,
        })
        .unwrap();
    assert_eq!(priya, score(1, 1));
}

#[test]
fn book_defaults_come_from_config() {
    let script = MatchScript::from_toml(DEMO_SCRIPT).unwrap();
    let config = BookConfig {
        default_bankroll: dec!(80),
        default_odds: dec!(3),
        max_stake: None,
    };
    let report = run(&script, &config).unwrap();

    let otto = &report.bankrolls[1];
    assert_eq!(otto.start, dec!(80));
    assert_eq!(otto.end, dec!(30));
    let TimelineEvent::BetPlaced { odds, .. } = &report.timeline[1] else {
        panic!("expected Otto's bet second");
    };
    assert_eq!(*odds, dec!(3));
}

#[test]
fn stake_limit_stops_the_run() {
    let script = MatchScript::from_toml(DEMO_SCRIPT).unwrap();
    let config = BookConfig {
        max_stake: Some(dec!(60)),
        ..BookConfig::default()
    };
    assert!(matches!(run(&script, &config), Err(Error::Book(_))));
}

#[test]
fn load_reads_script_from_disk() {
    let file = temp_toml(DEMO_SCRIPT);
    let script = MatchScript::load(file.path()).unwrap();
    assert_eq!(script.characters.len(), 3);
    assert_eq!(script.goals.len(), 3);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MatchScript::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Script(ScriptError::ReadFile(_)))));
}

#[test]
fn goals_out_of_order_are_rejected() {
    let script = r#"
final_score = "2-0"

[[goals]]
minute = 50
score = "1-0"

[[goals]]
minute = 20
score = "2-0"
"#;
    assert!(matches!(
        MatchScript::from_toml(script),
        Err(Error::Script(ScriptError::Invalid(_)))
    ));
}

#[test]
fn final_score_behind_last_goal_is_rejected() {
    let script = r#"
final_score = "0-0"

[[goals]]
minute = 10
score = "1-0"
"#;
    assert!(matches!(
        MatchScript::from_toml(script),
        Err(Error::Settlement(_))
    ));
}
