//! Terminal output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode and colour control. In JSON mode every call
//! emits one line of the form
//! `{"type": <kind>, "payload": <object>}`.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Style text with ANSI colours.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration, resolving `auto` colour against stdout.
    #[must_use]
    pub fn new(json: bool, quiet: bool, color: &ColorChoice) -> Self {
        let color = match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self {
            json,
            quiet,
            color: color && !json,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply a style only when colours are enabled.
fn paint<T: Display>(value: T, style: impl FnOnce(&T) -> String) -> String {
    if read_config().color {
        style(&value)
    } else {
        value.to_string()
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let label = paint(format!("{label:<12}"), |s| s.dimmed().to_string());
    println!("  {label} {value}");
}

/// Emit a structured record.
///
/// In JSON mode the value is printed as the payload of a `kind` line and
/// `true` is returned; otherwise nothing is printed and the caller renders
/// the value itself.
pub fn record<T: Serialize>(kind: &str, value: &T) -> crate::error::Result<bool> {
    if !is_json() {
        return Ok(false);
    }
    emit_json_line(kind, serde_json::to_value(value)?);
    Ok(true)
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", paint("✓", |s| s.green().to_string()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", paint("⚠", |s| s.yellow().to_string()), message);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint("×", |s| s.red().to_string()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", paint(title, |s| s.bold().to_string()));
}

/// Print a timeline line with a minute marker.
pub fn event(minute: u32, label: &str, message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(
            "event",
            json!({ "minute": minute, "label": label, "message": message }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {} {} {}",
        paint(format!("{minute:>3}'"), |s| s.dimmed().to_string()),
        paint(format!("{label:<8}"), |s| s.cyan().to_string()),
        message
    );
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", paint(message, |s| s.dimmed().to_string()));
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    paint(value, |s| s.green().to_string())
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    paint(value, |s| s.red().to_string())
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    paint(value, |s| s.cyan().to_string())
}

/// Format a signed amount green when positive and red when negative.
pub fn signed(value: rust_decimal::Decimal) -> String {
    let value = value.normalize();
    if value > rust_decimal::Decimal::ZERO {
        positive(format!("+{value}"))
    } else if value < rust_decimal::Decimal::ZERO {
        negative(value)
    } else {
        value.to_string()
    }
}
