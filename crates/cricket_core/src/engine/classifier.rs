use crate::error::{Result, ScoringError};
use crate::models::{BallEvent, ExtraKind};

/// Per-delivery facts derived from a validated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedDelivery {
    /// Whether the delivery consumes one of the over's six legal balls.
    pub legal: bool,
    /// Total added to the innings score: bat runs plus extras.
    pub attributed_runs: u32,
    /// Runs credited to the batter personally. Nonzero only when the
    /// delivery carries no extra at all; byes and leg-byes score for the
    /// team through the `runs_off_bat` channel without crediting anyone.
    pub batting_runs: u8,
}

/// Bat runs beyond a six have no legal scoring path.
const MAX_RUNS_OFF_BAT: u8 = 6;

/// Validates the internal coherence of a ball event and derives its
/// scoring classification. Rejects malformed events before any state is
/// touched; the caller checks names and positions separately.
pub fn classify(event: &BallEvent) -> Result<ClassifiedDelivery> {
    if event.runs_off_bat > MAX_RUNS_OFF_BAT {
        return Err(ScoringError::InvalidEvent(format!(
            "runs off the bat cannot exceed {MAX_RUNS_OFF_BAT}, got {}",
            event.runs_off_bat
        )));
    }
    if event.is_wicket && event.dismissal_kind.is_none() {
        return Err(ScoringError::InvalidEvent(
            "wicket event is missing its dismissal kind".to_string(),
        ));
    }
    if !event.is_wicket && event.dismissal_kind.is_some() {
        return Err(ScoringError::InvalidEvent(
            "dismissal kind present on a non-wicket event".to_string(),
        ));
    }
    if !event.is_wicket && event.dismissed_batter_slot.is_some() {
        return Err(ScoringError::InvalidEvent(
            "dismissed batter slot present on a non-wicket event".to_string(),
        ));
    }
    if event.extra_kind == ExtraKind::Wide && event.runs_off_bat > 0 {
        // A ball the batter reached was not wide; runs on a wide are extras.
        return Err(ScoringError::InvalidEvent(
            "a wide cannot carry runs off the bat".to_string(),
        ));
    }

    let legal = event.extra_kind.is_legal();
    if !legal {
        log::debug!(
            "illegal delivery ({}): over count unchanged",
            event.extra_kind.as_str()
        );
    }

    let batting_runs = if event.extra_kind == ExtraKind::None {
        event.runs_off_bat
    } else {
        0
    };

    Ok(ClassifiedDelivery {
        legal,
        attributed_runs: event.runs_off_bat as u32 + event.extra_runs as u32,
        batting_runs,
    })
}
