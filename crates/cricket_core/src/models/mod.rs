//! Data types shared across the engine: ball events, innings state,
//! lineups, signals and scorecard rows. Everything here serializes with
//! serde so hosts can persist or transport state as JSON.

pub mod ball;
pub mod innings;
pub mod lineup;
pub mod match_type;
pub mod scorecard;
pub mod signals;
pub mod snapshot;

pub use ball::{BallEvent, BallReference, BatterSlot, DismissalKind, ExtraKind};
pub use innings::{DeliveryRecord, InningsCloseReason, InningsState};
pub use lineup::LineupState;
pub use match_type::MatchType;
pub use scorecard::{
    BattingCard, BowlingCard, FallOfWicket, InningsScorecard, MatchScorecard, OverSummary,
};
pub use signals::Signal;
pub use snapshot::DerivedSnapshot;

use serde::{Deserialize, Serialize};

/// Which configured team a value refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Lifecycle phase of a scored match.
///
/// Deliveries are accepted only while `Live`. The two waiting phases
/// reject deliveries with an illegal-state error rather than a scoring
/// error, and `Completed` matches are immutable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPhase {
    /// Created, waiting for the first innings openers.
    AwaitingOpeners,
    Live,
    /// An innings closed and the next one has not started.
    InningsBreak,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wire_names_are_kebab_case() {
        let json = serde_json::to_string(&MatchPhase::AwaitingOpeners).unwrap();
        assert_eq!(json, "\"awaiting-openers\"");
        let json = serde_json::to_string(&MatchPhase::InningsBreak).unwrap();
        assert_eq!(json, "\"innings-break\"");
    }

    #[test]
    fn team_side_other_flips() {
        assert_eq!(TeamSide::Home.other(), TeamSide::Away);
        assert_eq!(TeamSide::Away.other(), TeamSide::Home);
    }
}
