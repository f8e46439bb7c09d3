use serde::{Deserialize, Serialize};
use std::fmt;

/// Match format. The wire names follow the common scorer vocabulary
/// (`T10`, `T20`, `ODI`, `Test`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum MatchType {
    #[serde(rename = "T10")]
    T10,
    #[serde(rename = "T20")]
    T20,
    #[serde(rename = "ODI")]
    Odi,
    /// Multi-day format. No over cap; an innings closes only on wickets
    /// or an explicit declaration.
    #[serde(rename = "Test")]
    MultiDay,
}

impl MatchType {
    /// Overs available to each innings, `None` for the uncapped format.
    pub fn over_limit(&self) -> Option<u16> {
        match self {
            MatchType::T10 => Some(10),
            MatchType::T20 => Some(20),
            MatchType::Odi => Some(50),
            MatchType::MultiDay => None,
        }
    }

    /// Legal deliveries available to each innings, `None` when uncapped.
    pub fn balls_per_innings(&self) -> Option<u32> {
        self.over_limit().map(|overs| overs as u32 * 6)
    }

    /// Limited-overs formats finish after the second innings closes.
    pub fn is_limited_overs(&self) -> bool {
        self.over_limit().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::T10 => "T10",
            MatchType::T20 => "T20",
            MatchType::Odi => "ODI",
            MatchType::MultiDay => "Test",
        }
    }
}

impl Default for MatchType {
    fn default() -> Self {
        MatchType::T20
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
