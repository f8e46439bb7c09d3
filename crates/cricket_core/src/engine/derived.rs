use super::ScoringEngine;
use crate::models::DerivedSnapshot;

/// Two-decimal rounding, half away from zero. All rates on snapshots
/// and scorecards go through this.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ScoringEngine {
    /// Projects the current innings counters into a read-only snapshot.
    ///
    /// Pure: calling it twice on the same state yields equal snapshots,
    /// and it never mutates the engine.
    pub fn derived(&self) -> DerivedSnapshot {
        let Some(innings) = self.current_innings() else {
            return DerivedSnapshot::empty(self.sequence());
        };

        let legal_balls = innings.legal_balls_bowled();
        let current_run_rate = if legal_balls == 0 {
            0.0
        } else {
            round2(innings.runs as f64 * 6.0 / legal_balls as f64)
        };

        let target = self.chase_target();
        let (runs_required, balls_remaining, required_run_rate) = match target {
            Some(target) => {
                let required = target.saturating_sub(innings.runs);
                let remaining = self
                    .match_type()
                    .balls_per_innings()
                    .map(|total| total.saturating_sub(legal_balls));
                let rate = match remaining {
                    Some(remaining) if remaining > 0 => {
                        Some(round2(required as f64 * 6.0 / remaining as f64))
                    }
                    _ => None,
                };
                (Some(required), remaining, rate)
            }
            None => (None, None, None),
        };

        DerivedSnapshot {
            sequence: self.sequence(),
            innings: innings.number,
            runs: innings.runs,
            wickets: innings.wickets,
            completed_overs: innings.completed_overs,
            balls_in_current_over: innings.balls_in_current_over,
            overs: innings.overs_display(),
            current_run_rate,
            target,
            runs_required,
            balls_remaining,
            required_run_rate,
        }
    }
}
