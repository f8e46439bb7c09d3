use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ball::DismissalKind;
use super::innings::InningsCloseReason;
use super::match_type::MatchType;

/// One batter's line on the card, in batting order of first appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattingCard {
    pub name: String,
    /// Personal runs only; byes, leg-byes and penalty extras never land here.
    pub runs: u32,
    /// Legal deliveries faced. Wides and no-balls are not balls faced.
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    /// Runs per hundred balls, two decimals. Zero before the first ball faced.
    pub strike_rate: f64,
    /// `None` while not out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<String>,
}

/// One bowler's line on the card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BowlingCard {
    pub name: String,
    pub balls_bowled: u32,
    /// `completed.balls` notation for the balls bowled.
    pub overs: String,
    /// Every run scored off the bowler's deliveries, extras included.
    pub runs_conceded: u32,
    /// Dismissals credited to the bowler; run-outs are excluded.
    pub wickets: u32,
    /// Runs per over, two decimals. Zero before the first ball bowled.
    pub economy: f64,
}

/// Score at which each wicket fell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallOfWicket {
    pub wicket_number: u8,
    pub batter_name: String,
    pub team_score: u32,
    /// Over position of the dismissal, `completed.balls` at the time.
    pub over: String,
    pub dismissal: DismissalKind,
}

/// Per-over totals for the worm and manhattan views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverSummary {
    pub over_number: u16,
    pub runs: u32,
    pub wickets: u8,
    pub cumulative_runs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsScorecard {
    pub innings: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub total_runs: u32,
    pub wickets: u8,
    pub overs: String,
    pub extras: u32,
    pub batting: Vec<BattingCard>,
    pub bowling: Vec<BowlingCard>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub over_summaries: Vec<OverSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_reason: Option<InningsCloseReason>,
}

/// Full card for the match, one entry per innings in playing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchScorecard {
    pub match_id: Uuid,
    pub match_type: MatchType,
    pub home_team: String,
    pub away_team: String,
    pub innings: Vec<InningsScorecard>,
}
