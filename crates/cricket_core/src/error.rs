use thiserror::Error;

/// Rejection reasons for a single scoring operation.
///
/// Every variant is raised before any state is touched, so a rejected
/// operation leaves the match exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Malformed or self-contradictory ball event (out-of-range runs,
    /// dismissal fields without a wicket, unknown batter at the crease).
    #[error("invalid ball event: {0}")]
    InvalidEvent(String),

    /// Event correlation tags (innings / over / ball / sequence) do not
    /// match the current state. Duplicates and out-of-order submissions
    /// land here.
    #[error("sequence conflict: {0}")]
    SequenceConflict(String),

    /// Counter would pass a hard cap: an 11th wicket, or a delivery
    /// against an innings whose over allocation is already used up.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Operation is not valid in the current match phase (scoring a
    /// closed innings, replacing a batter when no slot is vacant, ...).
    #[error("illegal state transition: {0}")]
    IllegalStateTransition(String),
}

impl ScoringError {
    /// Sequence conflicts are worth retrying against a fresh snapshot;
    /// everything else needs corrected input from the scorer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScoringError::SequenceConflict(_))
    }

    /// Stable machine-readable code, used by the JSON boundary.
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::InvalidEvent(_) => "E_INVALID_EVENT",
            ScoringError::SequenceConflict(_) => "E_SEQUENCE_CONFLICT",
            ScoringError::Overflow(_) => "E_OVERFLOW",
            ScoringError::IllegalStateTransition(_) => "E_ILLEGAL_STATE",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
