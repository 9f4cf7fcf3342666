//! Handler for the `settle` command.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::command::SettleArgs;
use crate::cli::output;
use crate::domain::{
    map_in_progress_emotion, map_settled_emotion, settle, BetContext, BetSelection, EmotionToken,
    Outcome, ScoreSnapshot,
};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SettleReport {
    selection: BetSelection,
    score: ScoreSnapshot,
    bet_time_score: Option<ScoreSnapshot>,
    in_progress: bool,
    outcome: Outcome,
    emotion: EmotionToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    wager: Option<WagerReport>,
}

#[derive(Debug, Serialize)]
struct WagerReport {
    stake: Decimal,
    odds: Decimal,
    payout: Decimal,
    profit: Decimal,
}

/// Execute `settle`.
pub fn execute(args: &SettleArgs) -> Result<()> {
    let selection = BetSelection::new(args.selection, args.line);
    let context = BetContext::new(selection, args.bet_time_score, args.score);

    let wager = match (args.stake, args.odds) {
        (Some(stake), Some(odds)) => {
            let result = settle(&context, stake, odds)?;
            Some(WagerReport {
                stake,
                odds,
                payout: result.payout.normalize(),
                profit: result.profit(stake).normalize(),
            })
        }
        _ => None,
    };

    let outcome = context.classify()?;
    let emotion = if args.in_progress {
        map_in_progress_emotion(outcome.class)
    } else {
        map_settled_emotion(outcome.class)
    };
    tracing::debug!(%selection, score = %args.score, outcome = %outcome, "classified bet");

    let report = SettleReport {
        selection,
        score: args.score,
        bet_time_score: args.bet_time_score,
        in_progress: args.in_progress,
        outcome,
        emotion,
        wager,
    };
    if output::record("settlement", &report)? {
        return Ok(());
    }
    render(&report);
    Ok(())
}

fn render(report: &SettleReport) {
    output::section("Settlement");
    output::field("Selection", output::highlight(report.selection));
    output::field("Score", report.score);
    if let Some(since) = report.bet_time_score {
        output::field("Placed at", since);
    }

    let class = report.outcome.class;
    let outcome = if class.is_winning() {
        output::positive(class)
    } else if class.is_losing() {
        output::negative(class)
    } else {
        class.to_string()
    };
    output::field("Outcome", format!("{outcome} {}", report.outcome.detail));
    output::field("Emotion", report.emotion);

    if let Some(wager) = &report.wager {
        output::field("Stake", wager.stake);
        output::field("Odds", wager.odds);
        output::field("Payout", wager.payout);
        output::field("Profit", output::signed(wager.profit));
    }
    if report.in_progress {
        output::note("live score; the result may still change");
    }
}
