//! Handler for the `emotion` command.

use serde::Serialize;

use crate::cli::command::EmotionArgs;
use crate::cli::output;
use crate::domain::{
    map_in_progress_emotion, map_settled_emotion, pending_emotion, EmotionToken, OutcomeClass,
};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct EmotionReport {
    outcome: Option<OutcomeClass>,
    state: &'static str,
    emotion: EmotionToken,
}

/// Execute `emotion`.
pub fn execute(args: &EmotionArgs) -> Result<()> {
    let (state, emotion) = match args.outcome {
        None => ("pending", pending_emotion()),
        Some(class) if args.in_progress => ("in_progress", map_in_progress_emotion(class)),
        Some(class) => ("settled", map_settled_emotion(class)),
    };

    let report = EmotionReport {
        outcome: args.outcome,
        state,
        emotion,
    };
    if output::record("emotion", &report)? {
        return Ok(());
    }

    if output::is_quiet() {
        println!("{}", report.emotion);
        return Ok(());
    }
    output::section("Emotion");
    match report.outcome {
        Some(class) => output::field("Outcome", class),
        None => output::field("Outcome", "(none yet)"),
    }
    output::field("State", report.state.replace('_', " "));
    output::field("Feels", output::highlight(report.emotion));
    Ok(())
}
