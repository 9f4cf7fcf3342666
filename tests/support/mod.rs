#![allow(dead_code)]

use punter::domain::ScoreSnapshot;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

/// The demo match shipped with the crate.
pub const DEMO_SCRIPT: &str = include_str!("../../demos/match.toml");

/// Write `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn temp_toml(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .prefix("punter-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    std::fs::write(file.path(), contents).expect("write temp file");
    file
}

pub fn score(home: u32, away: u32) -> ScoreSnapshot {
    ScoreSnapshot::new(home, away)
}

/// Read a decimal that serde wrote as a JSON string.
pub fn json_decimal(value: &serde_json::Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {value}"))
        .parse()
        .expect("parse decimal")
}
