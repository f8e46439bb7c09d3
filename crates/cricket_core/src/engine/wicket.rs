use super::ScoringEngine;
use crate::models::{BatterSlot, Signal};

impl ScoringEngine {
    /// Lineup bookkeeping for a dismissal that has already been counted.
    ///
    /// The dismissed slot is emptied and strike is forced back to the
    /// striker's end, so the incoming batter faces next when the striker
    /// fell and the surviving batter faces when the non-striker did.
    /// Returns the replacement prompt unless the innings just closed,
    /// in which case nobody comes in.
    pub(crate) fn process_dismissal(
        &mut self,
        slot: BatterSlot,
        innings_closed: bool,
    ) -> Option<Signal> {
        self.lineup.set_batter(slot, None);
        self.lineup.on_strike = BatterSlot::Striker;
        if innings_closed {
            log::debug!("no replacement requested, innings is over");
            None
        } else {
            Some(Signal::RequestBatterReplacement { slot })
        }
    }
}
