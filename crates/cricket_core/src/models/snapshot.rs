use serde::{Deserialize, Serialize};

/// Read-only projection of the current innings, recomputed from counters
/// on demand. Two snapshots taken from the same state compare equal.
///
/// The chase fields are present only during a second innings: `target`
/// is first-innings runs plus one, `runs_required` floors at zero once
/// the chase succeeds, and `required_run_rate` is `None` when no balls
/// remain or the format is uncapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedSnapshot {
    /// Engine sequence this snapshot was derived from.
    pub sequence: u64,
    pub innings: u8,
    pub runs: u32,
    pub wickets: u8,
    pub completed_overs: u16,
    pub balls_in_current_over: u8,
    pub overs: String,
    /// Runs per over so far, rounded to two decimals. Zero before the
    /// first legal ball.
    pub current_run_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_required: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balls_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_run_rate: Option<f64>,
}

impl DerivedSnapshot {
    /// Placeholder snapshot for a match with no innings under way.
    pub fn empty(sequence: u64) -> Self {
        DerivedSnapshot {
            sequence,
            innings: 0,
            runs: 0,
            wickets: 0,
            completed_overs: 0,
            balls_in_current_over: 0,
            overs: "0.0".to_string(),
            current_run_rate: 0.0,
            target: None,
            runs_required: None,
            balls_remaining: None,
            required_run_rate: None,
        }
    }
}
