//! Handler for the `simulate` command.

use crate::app::{run, Config, MatchScript, SimulationReport, TimelineEvent};
use crate::cli::command::SimulateArgs;
use crate::cli::{diagnostic, output};
use crate::error::Result;

/// Execute `simulate` with an already loaded configuration.
pub fn execute(args: &SimulateArgs, config: &Config) -> Result<()> {
    let script = diagnostic::annotate(MatchScript::load(&args.script), &args.script)?;
    let report = run(&script, &config.book)?;

    if output::record("simulation", &report)? {
        return Ok(());
    }
    render(&report);
    Ok(())
}

fn render(report: &SimulationReport) {
    output::section(&format!("{} vs {}", report.home, report.away));
    for event in &report.timeline {
        match event {
            TimelineEvent::BetPlaced {
                minute,
                name,
                selection,
                stake,
                odds,
                score,
                mood,
                ..
            } => output::event(
                *minute,
                "bet",
                &format!("{name} backs {selection} for {stake} @ {odds} at {score} {mood}"),
            ),
            TimelineEvent::Goal {
                minute,
                score,
                moods,
            } => {
                output::event(*minute, "goal", &output::highlight(score));
                for change in moods.iter().filter(|c| c.before != c.after) {
                    output::note(&format!(
                        "      {} {} -> {} ({})",
                        change.name, change.before, change.after, change.outcome
                    ));
                }
            }
        }
    }
    output::field("Full time", output::highlight(report.final_score));

    output::section("Settlements");
    for settlement in &report.settlements {
        output::field(
            &settlement.name,
            format!(
                "{} {} pays {} ({}) {}",
                settlement.selection,
                settlement.outcome,
                settlement.payout.normalize(),
                output::signed(settlement.profit()),
                settlement.mood
            ),
        );
    }

    output::section("Bankrolls");
    for line in &report.bankrolls {
        output::field(
            &line.name,
            format!(
                "{} -> {} ({}) {}",
                line.start.normalize(),
                line.end.normalize(),
                output::signed(line.change()),
                line.mood
            ),
        );
        if line.end.is_zero() {
            output::warning(&format!("{} is out of money", line.name));
        }
    }
}
