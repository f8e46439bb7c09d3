use serde::{Deserialize, Serialize};

use super::ball::BatterSlot;
use super::innings::InningsCloseReason;

/// Side effects the caller must react to after an accepted event.
///
/// When several fire off one delivery they are emitted in declaration
/// order: over completion first, then the bowler prompt, then the batter
/// replacement prompt, then innings closure, then match completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    /// A six-ball over just finished.
    OverCompleted { over_number: u16 },
    /// The innings continues and a bowler must be nominated for the next over.
    RequestNextBowler,
    /// A batter slot is empty and the innings continues.
    RequestBatterReplacement { slot: BatterSlot },
    /// The innings stopped accepting deliveries.
    InningsClosed {
        innings: u8,
        reason: InningsCloseReason,
    },
    /// The match is archived; every further event is rejected.
    MatchComplete,
}

impl Signal {
    pub fn is_prompt(&self) -> bool {
        matches!(
            self,
            Signal::RequestNextBowler | Signal::RequestBatterReplacement { .. }
        )
    }
}
