//! Scripted match simulation.
//!
//! A [`MatchScript`] describes who is betting, what they bet at which
//! minute, when the goals go in and how the match ends. [`run`] replays it
//! through a [`Sportsbook`] and collects what happened into a
//! [`SimulationReport`].

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::book::{BetSlip, BookError, MoodChange, Settlement, Sportsbook};
use super::config::BookConfig;
use crate::domain::{
    BetId, BetSelection, EmotionToken, Odds, ScoreSnapshot, SelectionType, SettlementError, Stake,
};
use crate::error::{Result, ScriptError};

fn default_home() -> String {
    "Home".into()
}

fn default_away() -> String {
    "Away".into()
}

/// A character taking part in the simulation.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    /// Starting bankroll; the book default when absent.
    pub bankroll: Option<Decimal>,
}

/// A bet a character places at a given minute.
#[derive(Debug, Clone, Deserialize)]
pub struct BetSpec {
    pub character: String,
    #[serde(default)]
    pub minute: u32,
    pub selection: SelectionType,
    pub line: Decimal,
    pub stake: Stake,
    /// Decimal odds; the book default when absent.
    pub odds: Option<Odds>,
}

/// The score after a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalSpec {
    pub minute: u32,
    pub score: ScoreSnapshot,
}

/// A complete match script.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchScript {
    #[serde(default = "default_home")]
    pub home: String,
    #[serde(default = "default_away")]
    pub away: String,
    pub final_score: ScoreSnapshot,
    #[serde(default)]
    pub characters: Vec<CharacterSpec>,
    #[serde(default)]
    pub bets: Vec<BetSpec>,
    #[serde(default)]
    pub goals: Vec<GoalSpec>,
}

impl MatchScript {
    /// Read and validate a script file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ScriptError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a script from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let script: Self = toml::from_str(content).map_err(ScriptError::Parse)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<()> {
        for (i, character) in self.characters.iter().enumerate() {
            if character.name.trim().is_empty() {
                return Err(ScriptError::Invalid("character names cannot be empty".into()).into());
            }
            let earlier = &self.characters[..i];
            if earlier.iter().any(|c| c.name == character.name) {
                return Err(ScriptError::Invalid(format!(
                    "character '{}' is listed twice",
                    character.name
                ))
                .into());
            }
        }

        for bet in &self.bets {
            if !self.characters.iter().any(|c| c.name == bet.character) {
                return Err(ScriptError::Invalid(format!(
                    "bet refers to unknown character '{}'",
                    bet.character
                ))
                .into());
            }
        }

        let mut last = (0, ScoreSnapshot::KICKOFF);
        for goal in &self.goals {
            if goal.minute < last.0 {
                return Err(ScriptError::Invalid(format!(
                    "goal at minute {} is listed after minute {}",
                    goal.minute, last.0
                ))
                .into());
            }
            if !goal.score.follows(&last.1) {
                return Err(SettlementError::InvalidScore {
                    input: goal.score.to_string(),
                    reason: format!("goals cannot decrease from {}", last.1),
                }
                .into());
            }
            last = (goal.minute, goal.score);
        }

        if !self.final_score.follows(&last.1) {
            return Err(SettlementError::InvalidScore {
                input: self.final_score.to_string(),
                reason: format!("final score is behind the last goal at {}", last.1),
            }
            .into());
        }

        Ok(())
    }
}

/// Something that happened during the match.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimelineEvent {
    BetPlaced {
        minute: u32,
        bet: BetId,
        name: String,
        selection: BetSelection,
        stake: Stake,
        odds: Odds,
        score: ScoreSnapshot,
        mood: EmotionToken,
    },
    Goal {
        minute: u32,
        score: ScoreSnapshot,
        moods: Vec<MoodChange>,
    },
}

impl TimelineEvent {
    #[must_use]
    pub fn minute(&self) -> u32 {
        match self {
            Self::BetPlaced { minute, .. } | Self::Goal { minute, .. } => *minute,
        }
    }
}

/// A character's bankroll before and after the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankrollLine {
    pub name: String,
    pub start: Decimal,
    pub end: Decimal,
    pub mood: EmotionToken,
}

impl BankrollLine {
    #[must_use]
    pub fn change(&self) -> Decimal {
        self.end - self.start
    }
}

/// Everything a simulation run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub home: String,
    pub away: String,
    pub final_score: ScoreSnapshot,
    pub timeline: Vec<TimelineEvent>,
    pub settlements: Vec<Settlement>,
    pub bankrolls: Vec<BankrollLine>,
}

enum Step<'a> {
    Bet(&'a BetSpec),
    Goal(&'a GoalSpec),
}

impl Step<'_> {
    // Bets at a minute are placed before that minute's goal.
    fn sort_key(&self) -> (u32, u8) {
        match self {
            Step::Bet(bet) => (bet.minute, 0),
            Step::Goal(goal) => (goal.minute, 1),
        }
    }
}

/// Replay `script` through a fresh sportsbook.
pub fn run(script: &MatchScript, config: &BookConfig) -> Result<SimulationReport> {
    let mut book = Sportsbook::new(config);

    let mut starting = Vec::with_capacity(script.characters.len());
    for spec in &script.characters {
        let bankroll = spec.bankroll.unwrap_or(config.default_bankroll);
        book.add_character(spec.name.clone(), bankroll)?;
        starting.push((spec.name.clone(), bankroll));
    }

    let mut steps: Vec<Step<'_>> = script
        .bets
        .iter()
        .map(Step::Bet)
        .chain(script.goals.iter().map(Step::Goal))
        .collect();
    steps.sort_by_key(Step::sort_key);

    info!(home = %script.home, away = %script.away, "kickoff");

    let mut timeline = Vec::with_capacity(steps.len());
    for step in steps {
        match step {
            Step::Bet(spec) => {
                let character = book
                    .character_by_name(&spec.character)
                    .ok_or_else(|| BookError::UnknownCharacter(spec.character.clone()))?
                    .id();
                let selection = BetSelection::new(spec.selection, spec.line);
                let odds = spec.odds.unwrap_or(config.default_odds);
                let bet = book.place_bet(BetSlip::new(character, selection, spec.stake, odds))?;

                let mood = book
                    .character(character)
                    .map(|c| c.mood())
                    .unwrap_or_default();
                timeline.push(TimelineEvent::BetPlaced {
                    minute: spec.minute,
                    bet,
                    name: spec.character.clone(),
                    selection,
                    stake: spec.stake,
                    odds,
                    score: book.score(),
                    mood,
                });
            }
            Step::Goal(goal) => {
                info!(minute = goal.minute, score = %goal.score, "goal");
                let moods = book.observe_score(goal.score)?;
                timeline.push(TimelineEvent::Goal {
                    minute: goal.minute,
                    score: goal.score,
                    moods,
                });
            }
        }
    }

    info!(score = %script.final_score, "full time");
    let settlements = book.settle_all(script.final_score)?;

    let bankrolls = starting
        .into_iter()
        .filter_map(|(name, start)| {
            book.character_by_name(&name).map(|c| BankrollLine {
                name,
                start,
                end: c.bankroll(),
                mood: c.mood(),
            })
        })
        .collect();

    Ok(SimulationReport {
        home: script.home.clone(),
        away: script.away.clone(),
        final_score: script.final_score,
        timeline,
        settlements,
        bankrolls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeClass;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    const SCRIPT: &str = r#"
home = "Rovers"
away = "United"
final_score = "2-1"

[[characters]]
name = "Mabel"
bankroll = 500

[[characters]]
name = "Otto"

[[bets]]
character = "Mabel"
selection = "over"
line = 2.75
stake = 100
odds = 1.86

[[bets]]
character = "Otto"
minute = 34
selection = "away"
line = 0.25
stake = 50

[[goals]]
minute = 34
score = "1-0"

[[goals]]
minute = 70
score = "1-1"

[[goals]]
minute = 88
score = "2-1"
"#;

    #[test]
    fn parses_script() {
        let script = MatchScript::from_toml(SCRIPT).unwrap();
        assert_eq!(script.home, "Rovers");
        assert_eq!(script.final_score, ScoreSnapshot::new(2, 1));
        assert_eq!(script.characters.len(), 2);
        assert_eq!(script.bets[1].selection, SelectionType::AwayTeam);
        assert_eq!(script.bets[1].odds, None);
    }

    #[test]
    fn run_settles_every_bet() {
        let script = MatchScript::from_toml(SCRIPT).unwrap();
        let report = run(&script, &BookConfig::default()).unwrap();

        assert_eq!(report.settlements.len(), 2);

        let mabel = &report.settlements[0];
        assert_eq!(mabel.name, "Mabel");
        assert_eq!(mabel.outcome.class, OutcomeClass::HalfWin);
        assert_eq!(mabel.payout, dec!(143));

        // Otto's bet went in before the 34th minute goal, so it counts
        // from 0-0: away lost 1-2, margin -1 + 0.25.
        let otto = &report.settlements[1];
        assert_eq!(otto.outcome.class, OutcomeClass::Loss);
        assert_eq!(otto.outcome.margin, dec!(-0.75));
        assert_eq!(otto.payout, dec!(0));

        assert_eq!(report.bankrolls[0].change(), dec!(43));
        assert_eq!(report.bankrolls[1].start, dec!(1000));
        assert_eq!(report.bankrolls[1].change(), dec!(-50));
        assert_eq!(report.bankrolls[1].mood, EmotionToken::DEVASTATED);
    }

    #[test]
    fn bets_precede_goals_at_the_same_minute() {
        let script = MatchScript::from_toml(SCRIPT).unwrap();
        let report = run(&script, &BookConfig::default()).unwrap();

        let minutes: Vec<u32> = report.timeline.iter().map(TimelineEvent::minute).collect();
        assert_eq!(minutes, vec![0, 34, 34, 70, 88]);
        assert!(matches!(
            &report.timeline[1],
            TimelineEvent::BetPlaced { score, .. } if *score == ScoreSnapshot::KICKOFF
        ));
    }

    #[test]
    fn moods_follow_goals() {
        let script = MatchScript::from_toml(SCRIPT).unwrap();
        let report = run(&script, &BookConfig::default()).unwrap();

        // After 1-1 Mabel (over 2.75, total 2) is still worried; after 2-1
        // the over is a provisional half win.
        let TimelineEvent::Goal { moods, .. } = &report.timeline[4] else {
            panic!("expected goal event");
        };
        let mabel = moods.iter().find(|m| m.name == "Mabel").unwrap();
        assert_eq!(mabel.after, EmotionToken::HOPEFUL);
    }

    #[test]
    fn rejects_unknown_character() {
        let script = r#"
final_score = "0-0"

[[bets]]
character = "Ghost"
selection = "over"
line = 0.5
stake = 10
"#;
        assert!(matches!(
            MatchScript::from_toml(script),
            Err(Error::Script(ScriptError::Invalid(_)))
        ));
    }

    #[test]
    fn rejects_final_score_behind_goals() {
        let script = r#"
final_score = "1-0"

[[goals]]
minute = 10
score = "1-1"
"#;
        assert!(matches!(
            MatchScript::from_toml(script),
            Err(Error::Settlement(SettlementError::InvalidScore { .. }))
        ));
    }

    #[test]
    fn rejects_bad_score_text() {
        let result = MatchScript::from_toml("final_score = \"two-nil\"\n");
        assert!(matches!(result, Err(Error::Script(ScriptError::Parse(_)))));
    }

    #[test]
    fn rejects_bad_selection_text() {
        let script = r#"
final_score = "0-0"

[[characters]]
name = "Mabel"

[[bets]]
character = "Mabel"
selection = "draw"
line = 0
stake = 10
"#;
        assert!(matches!(
            MatchScript::from_toml(script),
            Err(Error::Script(ScriptError::Parse(_)))
        ));
    }

    #[test]
    fn insufficient_bankroll_aborts_run() {
        let script = r#"
final_score = "0-0"

[[characters]]
name = "Mabel"
bankroll = 5

[[bets]]
character = "Mabel"
selection = "under"
line = 0.5
stake = 10
"#;
        let script = MatchScript::from_toml(script).unwrap();
        assert!(matches!(
            run(&script, &BookConfig::default()),
            Err(Error::Book(BookError::InsufficientFunds { .. }))
        ));
    }
}
