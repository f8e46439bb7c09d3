use serde::{Deserialize, Serialize};

use super::ball::BatterSlot;

/// Who is at the crease and who is bowling.
///
/// Batters occupy named slots; `on_strike` points at the slot facing the
/// next delivery. Strike rotation flips the pointer rather than swapping
/// the names, which keeps the dismissal bookkeeping straightforward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineupState {
    pub striker: Option<String>,
    pub non_striker: Option<String>,
    pub on_strike: BatterSlot,
    /// `None` between overs until the next bowler is nominated.
    pub bowler: Option<String>,
}

impl LineupState {
    pub fn empty() -> Self {
        LineupState {
            striker: None,
            non_striker: None,
            on_strike: BatterSlot::Striker,
            bowler: None,
        }
    }

    pub fn with_openers(striker: &str, non_striker: &str, bowler: &str) -> Self {
        LineupState {
            striker: Some(striker.to_string()),
            non_striker: Some(non_striker.to_string()),
            on_strike: BatterSlot::Striker,
            bowler: Some(bowler.to_string()),
        }
    }

    pub fn batter_at(&self, slot: BatterSlot) -> Option<&str> {
        match slot {
            BatterSlot::Striker => self.striker.as_deref(),
            BatterSlot::NonStriker => self.non_striker.as_deref(),
        }
    }

    pub fn set_batter(&mut self, slot: BatterSlot, name: Option<String>) {
        match slot {
            BatterSlot::Striker => self.striker = name,
            BatterSlot::NonStriker => self.non_striker = name,
        }
    }

    /// The batter facing the next delivery.
    pub fn batter_on_strike(&self) -> Option<&str> {
        self.batter_at(self.on_strike)
    }

    /// The slot left empty by a dismissal, if any.
    pub fn vacant_slot(&self) -> Option<BatterSlot> {
        if self.striker.is_none() {
            Some(BatterSlot::Striker)
        } else if self.non_striker.is_none() {
            Some(BatterSlot::NonStriker)
        } else {
            None
        }
    }

    pub fn swap_strike(&mut self) {
        self.on_strike = self.on_strike.other();
    }

    /// True when both batters and a bowler are present.
    pub fn is_complete(&self) -> bool {
        self.striker.is_some() && self.non_striker.is_some() && self.bowler.is_some()
    }

    pub fn contains_batter(&self, name: &str) -> bool {
        self.striker.as_deref() == Some(name) || self.non_striker.as_deref() == Some(name)
    }
}
