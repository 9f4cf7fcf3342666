//! The sportsbook: caller-owned state around the settlement core.
//!
//! Characters, bankrolls and bets live here. The book advances bets through
//! their lifecycle (slip → placed → settled) and keeps each character's
//! mood in step with the score, calling into [`crate::domain`] for every
//! classification and payout.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::config::BookConfig;
use crate::domain::{
    map_in_progress_emotion, map_settled_emotion, pending_emotion, validate_wager, BetContext,
    BetId, BetSelection, CharacterId, EmotionToken, Odds, Outcome, ScoreSnapshot, SettlementError,
    SettlementResult, Stake,
};

/// Errors raised by sportsbook operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    #[error("character '{name}' already exists")]
    DuplicateCharacter { name: String },

    #[error("unknown bet: {0}")]
    UnknownBet(BetId),

    #[error("{name} cannot stake {stake} with a bankroll of {bankroll}")]
    InsufficientFunds {
        name: String,
        stake: Stake,
        bankroll: Decimal,
    },

    #[error("stake {stake} exceeds the book limit of {limit}")]
    StakeLimitExceeded { stake: Stake, limit: Stake },

    #[error("{0} is already settled")]
    AlreadySettled(BetId),

    #[error("{name}'s bankroll cannot take a payout of {payout}")]
    BankrollOverflow { name: String, payout: Decimal },

    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

/// A character who bets and reacts.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    bankroll: Decimal,
    mood: EmotionToken,
}

impl Character {
    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bankroll(&self) -> Decimal {
        self.bankroll
    }

    #[must_use]
    pub fn mood(&self) -> EmotionToken {
        self.mood
    }
}

/// A pending bet: what a character wants to wager, before the book accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetSlip {
    pub character: CharacterId,
    pub selection: BetSelection,
    pub stake: Stake,
    pub odds: Odds,
}

impl BetSlip {
    #[must_use]
    pub const fn new(
        character: CharacterId,
        selection: BetSelection,
        stake: Stake,
        odds: Odds,
    ) -> Self {
        Self {
            character,
            selection,
            stake,
            odds,
        }
    }
}

/// Lifecycle state of an accepted bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BetStatus {
    /// Stake debited, waiting for full time.
    Placed,
    /// Final result applied to the bankroll.
    Settled {
        outcome: Outcome,
        payout: Decimal,
        settled_at: DateTime<Utc>,
    },
}

impl BetStatus {
    /// Returns true while the bet is still open.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, BetStatus::Placed)
    }

    /// Returns true once the bet has been settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, BetStatus::Settled { .. })
    }
}

/// A bet accepted by the book.
#[derive(Debug, Clone, Serialize)]
pub struct Bet {
    id: BetId,
    character: CharacterId,
    selection: BetSelection,
    stake: Stake,
    odds: Odds,
    bet_time_score: ScoreSnapshot,
    placed_at: DateTime<Utc>,
    #[serde(flatten)]
    status: BetStatus,
}

impl Bet {
    #[must_use]
    pub fn id(&self) -> BetId {
        self.id
    }

    #[must_use]
    pub fn character(&self) -> CharacterId {
        self.character
    }

    #[must_use]
    pub fn selection(&self) -> BetSelection {
        self.selection
    }

    #[must_use]
    pub fn stake(&self) -> Stake {
        self.stake
    }

    #[must_use]
    pub fn odds(&self) -> Odds {
        self.odds
    }

    /// Score at the moment the book accepted the bet.
    #[must_use]
    pub fn bet_time_score(&self) -> ScoreSnapshot {
        self.bet_time_score
    }

    #[must_use]
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    #[must_use]
    pub fn status(&self) -> &BetStatus {
        &self.status
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_placed()
    }

    /// Build the settlement context for evaluating this bet at `score`.
    #[must_use]
    pub fn context(&self, score: ScoreSnapshot) -> BetContext {
        BetContext::new(self.selection, Some(self.bet_time_score), score)
    }
}

/// A character's mood moving after a score update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodChange {
    pub character: CharacterId,
    pub name: String,
    /// The bet whose provisional outcome drives the new mood.
    pub bet: BetId,
    pub outcome: Outcome,
    pub before: EmotionToken,
    pub after: EmotionToken,
}

/// The record of one bet being settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub bet: BetId,
    pub character: CharacterId,
    pub name: String,
    pub selection: BetSelection,
    pub stake: Stake,
    pub outcome: Outcome,
    pub payout: Decimal,
    pub bankroll: Decimal,
    pub mood: EmotionToken,
}

impl Settlement {
    /// Payout minus stake.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.payout - self.stake
    }
}

/// Ledger of characters and their bets for one match.
#[derive(Debug)]
pub struct Sportsbook {
    max_stake: Option<Stake>,
    characters: Vec<Character>,
    bets: Vec<Bet>,
    score: ScoreSnapshot,
    next_character_id: u64,
    next_bet_id: u64,
}

impl Sportsbook {
    /// Create an empty book at kickoff.
    #[must_use]
    pub fn new(config: &BookConfig) -> Self {
        Self {
            max_stake: config.max_stake,
            characters: Vec::new(),
            bets: Vec::new(),
            score: ScoreSnapshot::KICKOFF,
            next_character_id: 1,
            next_bet_id: 1,
        }
    }

    /// Register a character with a starting bankroll.
    pub fn add_character(
        &mut self,
        name: impl Into<String>,
        bankroll: Decimal,
    ) -> Result<CharacterId, BookError> {
        let name = name.into();
        if bankroll <= Decimal::ZERO {
            return Err(SettlementError::InvalidArgument {
                field: "bankroll",
                value: bankroll,
                reason: "must be positive",
            }
            .into());
        }
        if self.character_by_name(&name).is_some() {
            return Err(BookError::DuplicateCharacter { name });
        }

        let id = CharacterId::new(self.next_character_id);
        self.next_character_id += 1;

        debug!(character = %id, name = %name, bankroll = %bankroll, "character joined");
        self.characters.push(Character {
            id,
            name,
            bankroll,
            mood: pending_emotion(),
        });
        Ok(id)
    }

    /// Accept a slip at the current score, debiting the stake.
    ///
    /// The selection is classified once against the current score so a
    /// line that can never settle is rejected here rather than at full
    /// time. The character's mood follows that provisional outcome.
    pub fn place_bet(&mut self, slip: BetSlip) -> Result<BetId, BookError> {
        validate_wager(slip.stake, slip.odds)?;
        if let Some(limit) = self.max_stake {
            if slip.stake > limit {
                return Err(BookError::StakeLimitExceeded {
                    stake: slip.stake,
                    limit,
                });
            }
        }

        let context = BetContext::new(slip.selection, Some(self.score), self.score);
        let provisional = context.classify()?;

        let score = self.score;
        let character = self.character_mut(slip.character)?;
        if character.bankroll < slip.stake {
            return Err(BookError::InsufficientFunds {
                name: character.name.clone(),
                stake: slip.stake,
                bankroll: character.bankroll,
            });
        }
        character.bankroll -= slip.stake;
        character.mood = map_in_progress_emotion(provisional.class);
        let name = character.name.clone();

        let id = BetId::new(self.next_bet_id);
        self.next_bet_id += 1;

        info!(
            bet = %id,
            character = %name,
            selection = %slip.selection,
            stake = %slip.stake,
            odds = %slip.odds,
            score = %score,
            "bet placed"
        );

        self.bets.push(Bet {
            id,
            character: slip.character,
            selection: slip.selection,
            stake: slip.stake,
            odds: slip.odds,
            bet_time_score: score,
            placed_at: Utc::now(),
            status: BetStatus::Placed,
        });
        Ok(id)
    }

    /// Record a live score and refresh moods from open bets.
    ///
    /// A character with several open bets takes the mood of the most
    /// recently placed one. Returns only the moods that changed.
    pub fn observe_score(&mut self, score: ScoreSnapshot) -> Result<Vec<MoodChange>, BookError> {
        self.advance_score(score)?;

        let mut latest: Vec<(CharacterId, BetId, Outcome)> = Vec::new();
        for bet in self.bets.iter().filter(|b| b.is_open()) {
            let outcome = bet.context(score).classify()?;
            match latest.iter_mut().find(|(c, _, _)| *c == bet.character) {
                Some(entry) => *entry = (bet.character, bet.id, outcome),
                None => latest.push((bet.character, bet.id, outcome)),
            }
        }

        let mut changes = Vec::new();
        for character in &mut self.characters {
            let entry = latest.iter().find(|(c, _, _)| *c == character.id);
            let Some((_, bet, outcome)) = entry else {
                continue;
            };
            let after = map_in_progress_emotion(outcome.class);
            if after == character.mood {
                continue;
            }
            debug!(
                character = %character.name,
                bet = %bet,
                outcome = %outcome,
                mood = %after,
                "mood changed"
            );
            changes.push(MoodChange {
                character: character.id,
                name: character.name.clone(),
                bet: *bet,
                outcome: outcome.clone(),
                before: character.mood,
                after,
            });
            character.mood = after;
        }

        Ok(changes)
    }

    /// Settle every open bet against the final score.
    ///
    /// All bets are evaluated and every credit is checked against its
    /// bankroll before anything is touched, so an error leaves the book
    /// unchanged.
    pub fn settle_all(&mut self, final_score: ScoreSnapshot) -> Result<Vec<Settlement>, BookError> {
        self.ensure_follows(final_score)?;

        let mut evaluated = Vec::new();
        let mut projected: Vec<(CharacterId, Decimal)> = Vec::new();
        for bet in self.bets.iter().filter(|b| b.is_open()) {
            let outcome = bet.context(final_score).classify()?;
            let result = SettlementResult::new(outcome.class, bet.stake, bet.odds)?;

            let character = self.character_or_err(bet.character)?;
            let bankroll = projected
                .iter()
                .rev()
                .find(|(c, _)| *c == bet.character)
                .map_or(character.bankroll, |(_, bankroll)| *bankroll);
            projected.push((bet.character, credit(character, bankroll, result.payout)?));

            evaluated.push((bet.id, outcome, result));
        }

        self.score = final_score;
        evaluated
            .into_iter()
            .map(|(id, outcome, result)| self.apply_settlement(id, outcome, result))
            .collect()
    }

    /// Settle a single bet against the final score.
    pub fn settle_bet(
        &mut self,
        id: BetId,
        final_score: ScoreSnapshot,
    ) -> Result<Settlement, BookError> {
        self.ensure_follows(final_score)?;

        let bet = self.bet(id).ok_or(BookError::UnknownBet(id))?;
        if !bet.is_open() {
            return Err(BookError::AlreadySettled(id));
        }
        let outcome = bet.context(final_score).classify()?;
        let result = SettlementResult::new(outcome.class, bet.stake, bet.odds)?;
        let character = self.character_or_err(bet.character)?;
        credit(character, character.bankroll, result.payout)?;

        self.score = final_score;
        self.apply_settlement(id, outcome, result)
    }

    fn apply_settlement(
        &mut self,
        id: BetId,
        outcome: Outcome,
        result: SettlementResult,
    ) -> Result<Settlement, BookError> {
        let character_id = self.bet(id).ok_or(BookError::UnknownBet(id))?.character;
        let bankroll = {
            let character = self.character_or_err(character_id)?;
            credit(character, character.bankroll, result.payout)?
        };

        let bet = self
            .bets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookError::UnknownBet(id))?;
        bet.status = BetStatus::Settled {
            outcome: outcome.clone(),
            payout: result.payout,
            settled_at: Utc::now(),
        };
        let (selection, stake) = (bet.selection, bet.stake);

        let character = self.character_mut(character_id)?;
        character.bankroll = bankroll;
        character.mood = map_settled_emotion(result.outcome);

        info!(
            bet = %id,
            character = %character.name,
            outcome = %outcome,
            payout = %result.payout,
            bankroll = %character.bankroll,
            "bet settled"
        );

        Ok(Settlement {
            bet: id,
            character: character_id,
            name: character.name.clone(),
            selection,
            stake,
            outcome,
            payout: result.payout,
            bankroll: character.bankroll,
            mood: character.mood,
        })
    }

    fn advance_score(&mut self, score: ScoreSnapshot) -> Result<(), BookError> {
        self.ensure_follows(score)?;
        self.score = score;
        Ok(())
    }

    fn ensure_follows(&self, score: ScoreSnapshot) -> Result<(), BookError> {
        if score.follows(&self.score) {
            Ok(())
        } else {
            Err(SettlementError::InvalidScore {
                input: score.to_string(),
                reason: format!("goals cannot decrease from {}", self.score),
            }
            .into())
        }
    }

    fn character_or_err(&self, id: CharacterId) -> Result<&Character, BookError> {
        self.character(id)
            .ok_or_else(|| BookError::UnknownCharacter(id.to_string()))
    }

    fn character_mut(&mut self, id: CharacterId) -> Result<&mut Character, BookError> {
        self.characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BookError::UnknownCharacter(id.to_string()))
    }

    /// The latest score the book has seen.
    #[must_use]
    pub fn score(&self) -> ScoreSnapshot {
        self.score
    }

    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn character_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn bet(&self, id: BetId) -> Option<&Bet> {
        self.bets.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Get an iterator over all open bets.
    pub fn open_bets(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter().filter(|b| b.is_open())
    }

    /// Total stake riding on open bets.
    #[must_use]
    pub fn exposure(&self) -> Stake {
        self.open_bets()
            .map(Bet::stake)
            .fold(Decimal::ZERO, |acc, stake| acc.saturating_add(stake))
    }
}

fn credit(character: &Character, bankroll: Decimal, payout: Decimal) -> Result<Decimal, BookError> {
    bankroll
        .checked_add(payout)
        .ok_or_else(|| BookError::BankrollOverflow {
            name: character.name.clone(),
            payout,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeClass, SelectionType};
    use rust_decimal_macros::dec;

    fn book() -> Sportsbook {
        Sportsbook::new(&BookConfig::default())
    }

    fn over(line: Decimal) -> BetSelection {
        BetSelection::new(SelectionType::Over, line)
    }

    fn home(line: Decimal) -> BetSelection {
        BetSelection::new(SelectionType::HomeTeam, line)
    }

    #[test]
    fn new_character_is_waiting() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        let mabel = book.character(id).unwrap();
        assert_eq!(mabel.name(), "Mabel");
        assert_eq!(mabel.bankroll(), dec!(500));
        assert_eq!(mabel.mood(), pending_emotion());
    }

    #[test]
    fn duplicate_character_is_rejected() {
        let mut book = book();
        book.add_character("Mabel", dec!(500)).unwrap();
        assert_eq!(
            book.add_character("Mabel", dec!(100)),
            Err(BookError::DuplicateCharacter {
                name: "Mabel".into()
            })
        );
    }

    #[test]
    fn non_positive_bankroll_is_rejected() {
        let mut book = book();
        assert!(matches!(
            book.add_character("Broke", dec!(0)),
            Err(BookError::Settlement(SettlementError::InvalidArgument {
                field: "bankroll",
                ..
            }))
        ));
    }

    #[test]
    fn placing_debits_stake_and_records_score() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        book.observe_score(ScoreSnapshot::new(1, 0)).unwrap();

        let bet_id = book
            .place_bet(BetSlip::new(id, home(dec!(0.25)), dec!(100), dec!(1.9)))
            .unwrap();

        assert_eq!(book.character(id).unwrap().bankroll(), dec!(400));
        let bet = book.bet(bet_id).unwrap();
        assert_eq!(bet.bet_time_score(), ScoreSnapshot::new(1, 0));
        assert!(bet.is_open());
        assert_eq!(book.exposure(), dec!(100));
        // 0 goals since placement + 0.25 is a provisional half win.
        assert_eq!(book.character(id).unwrap().mood(), EmotionToken::HOPEFUL);
    }

    #[test]
    fn placing_more_than_bankroll_fails_without_debit() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(50)).unwrap();
        let result = book.place_bet(BetSlip::new(id, over(dec!(2.5)), dec!(80), dec!(1.9)));
        assert!(matches!(result, Err(BookError::InsufficientFunds { .. })));
        assert_eq!(book.character(id).unwrap().bankroll(), dec!(50));
        assert!(book.bets().is_empty());
    }

    #[test]
    fn stake_limit_is_enforced() {
        let config = BookConfig {
            max_stake: Some(dec!(25)),
            ..BookConfig::default()
        };
        let mut book = Sportsbook::new(&config);
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        assert!(matches!(
            book.place_bet(BetSlip::new(id, over(dec!(2.5)), dec!(30), dec!(1.9))),
            Err(BookError::StakeLimitExceeded { .. })
        ));
    }

    #[test]
    fn unsettleable_line_is_rejected_at_placement() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        let result = book.place_bet(BetSlip::new(id, over(dec!(2.1)), dec!(10), dec!(1.9)));
        assert!(matches!(
            result,
            Err(BookError::Settlement(
                SettlementError::UnclassifiableMargin { .. }
            ))
        ));
        assert_eq!(book.character(id).unwrap().bankroll(), dec!(500));
    }

    #[test]
    fn unknown_character_cannot_bet() {
        let mut book = book();
        let result = book.place_bet(BetSlip::new(
            CharacterId::new(99),
            over(dec!(2.5)),
            dec!(10),
            dec!(1.9),
        ));
        assert!(matches!(result, Err(BookError::UnknownCharacter(_))));
    }

    #[test]
    fn observe_score_reports_changed_moods_only() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        book.place_bet(BetSlip::new(id, over(dec!(1.5)), dec!(100), dec!(1.9)))
            .unwrap();
        assert_eq!(book.character(id).unwrap().mood(), EmotionToken::WORRIED);

        // One goal: still under 1.5.
        let changes = book.observe_score(ScoreSnapshot::new(1, 0)).unwrap();
        assert!(changes.is_empty());

        let changes = book.observe_score(ScoreSnapshot::new(1, 1)).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].before, EmotionToken::WORRIED);
        assert_eq!(changes[0].after, EmotionToken::HOPEFUL);
        assert_eq!(changes[0].outcome.class, OutcomeClass::Win);
    }

    #[test]
    fn score_cannot_go_backwards() {
        let mut book = book();
        book.observe_score(ScoreSnapshot::new(2, 0)).unwrap();
        assert!(matches!(
            book.observe_score(ScoreSnapshot::new(1, 0)),
            Err(BookError::Settlement(SettlementError::InvalidScore { .. }))
        ));
        assert_eq!(book.score(), ScoreSnapshot::new(2, 0));
    }

    #[test]
    fn settle_all_pays_out_and_sets_final_mood() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        book.place_bet(BetSlip::new(id, over(dec!(2.75)), dec!(100), dec!(1.86)))
            .unwrap();

        let settlements = book.settle_all(ScoreSnapshot::new(2, 1)).unwrap();
        assert_eq!(settlements.len(), 1);
        let s = &settlements[0];
        assert_eq!(s.outcome.class, OutcomeClass::HalfWin);
        assert_eq!(s.payout, dec!(143));
        assert_eq!(s.profit(), dec!(43));
        assert_eq!(s.bankroll, dec!(543));
        assert_eq!(s.mood, EmotionToken::PLEASED);
        assert_eq!(book.exposure(), Decimal::ZERO);
        assert!(book.bets()[0].status().is_settled());
    }

    #[test]
    fn settle_all_skips_already_settled_bets() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        let first = book
            .place_bet(BetSlip::new(id, over(dec!(0.5)), dec!(10), dec!(2)))
            .unwrap();
        book.place_bet(BetSlip::new(id, over(dec!(3.5)), dec!(10), dec!(2)))
            .unwrap();

        book.settle_bet(first, ScoreSnapshot::new(1, 0)).unwrap();
        let rest = book.settle_all(ScoreSnapshot::new(1, 0)).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].outcome.class, OutcomeClass::Loss);
        // 500 - 10 - 10 + 20 + 0
        assert_eq!(book.character(id).unwrap().bankroll(), dec!(500));
    }

    #[test]
    fn settle_bet_twice_fails() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        let bet = book
            .place_bet(BetSlip::new(id, home(dec!(0)), dec!(10), dec!(2)))
            .unwrap();
        book.settle_bet(bet, ScoreSnapshot::new(0, 0)).unwrap();
        assert_eq!(
            book.settle_bet(bet, ScoreSnapshot::new(0, 0)).unwrap_err(),
            BookError::AlreadySettled(bet)
        );
    }

    #[test]
    fn settle_all_rejects_final_score_behind_live_score() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        book.place_bet(BetSlip::new(id, over(dec!(0.5)), dec!(10), dec!(2)))
            .unwrap();
        book.observe_score(ScoreSnapshot::new(1, 1)).unwrap();

        assert!(book.settle_all(ScoreSnapshot::new(1, 0)).is_err());
        assert_eq!(book.open_bets().count(), 1);
        assert_eq!(book.character(id).unwrap().bankroll(), dec!(490));
    }

    #[test]
    fn latest_bet_drives_mood() {
        let mut book = book();
        let id = book.add_character("Mabel", dec!(500)).unwrap();
        book.place_bet(BetSlip::new(id, over(dec!(0.5)), dec!(10), dec!(2)))
            .unwrap();
        let under = BetSelection::new(SelectionType::Under, dec!(0.5));
        book.place_bet(BetSlip::new(id, under, dec!(10), dec!(2)))
            .unwrap();

        let changes = book.observe_score(ScoreSnapshot::new(1, 0)).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].bet, BetId::new(2));
        assert_eq!(changes[0].after, EmotionToken::WORRIED);
    }

    #[test]
    fn settlement_beyond_bankroll_range_leaves_book_unchanged() {
        let mut book = book();
        let mabel = book.add_character("Mabel", dec!(500)).unwrap();
        let whale = book.add_character("Whale", Decimal::MAX).unwrap();
        book.place_bet(BetSlip::new(mabel, over(dec!(0.5)), dec!(10), dec!(2)))
            .unwrap();
        let big = book
            .place_bet(BetSlip::new(whale, over(dec!(0.5)), dec!(10), dec!(2)))
            .unwrap();

        let err = book.settle_all(ScoreSnapshot::new(1, 0)).unwrap_err();
        assert_eq!(
            err,
            BookError::BankrollOverflow {
                name: "Whale".into(),
                payout: dec!(20),
            }
        );
        assert_eq!(book.open_bets().count(), 2);
        assert_eq!(book.character(mabel).unwrap().bankroll(), dec!(490));
        assert_eq!(book.score(), ScoreSnapshot::KICKOFF);

        assert!(matches!(
            book.settle_bet(big, ScoreSnapshot::new(1, 0)),
            Err(BookError::BankrollOverflow { .. })
        ));
        assert!(book.bet(big).unwrap().is_open());
    }

    #[test]
    fn exposure_saturates_instead_of_overflowing() {
        let mut book = book();
        for name in ["Whale", "Orca"] {
            let id = book.add_character(name, Decimal::MAX).unwrap();
            book.place_bet(BetSlip::new(id, over(dec!(0.5)), Decimal::MAX, dec!(1)))
                .unwrap();
        }
        assert_eq!(book.exposure(), Decimal::MAX);
    }
}
