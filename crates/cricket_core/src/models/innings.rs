use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ball::{DismissalKind, ExtraKind};

/// Why an innings stopped accepting deliveries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "kebab-case")]
pub enum InningsCloseReason {
    AllOut,
    OversExhausted,
    ChaseComplete,
    Declared,
}

/// Immutable record of one applied delivery.
///
/// `over_number` and `ball_number` are the 1-based position the delivery
/// was bowled at. `legal_ball_number` is the running count of legal
/// deliveries in the innings; an illegal delivery repeats the number of
/// the legal ball before it (floored at 1 when the innings opens with
/// a wide or no-ball).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryRecord {
    pub id: Uuid,
    /// Engine sequence at which this delivery was accepted.
    pub sequence: u64,
    pub over_number: u16,
    pub ball_number: u8,
    pub legal_ball_number: u32,
    pub batter_name: String,
    pub bowler_name: String,
    pub runs_off_bat: u8,
    pub extra_runs: u8,
    pub extra_kind: ExtraKind,
    /// Runs credited to the batter personally. Zero for every extra kind
    /// other than `none`.
    pub batting_runs: u8,
    pub is_wicket: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal_kind: Option<DismissalKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissed_batter_name: Option<String>,
    pub commentary: String,
    pub recorded_at: DateTime<Utc>,
}

impl DeliveryRecord {
    /// Total added to the innings score by this delivery.
    pub fn attributed_runs(&self) -> u32 {
        self.runs_off_bat as u32 + self.extra_runs as u32
    }
}

/// Score state for a single innings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsState {
    /// 1-based innings number within the match.
    pub number: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u8,
    pub completed_overs: u16,
    /// Legal deliveries bowled in the over in progress, always 0..=5.
    pub balls_in_current_over: u8,
    /// Runs not credited to any batter: wides, no-balls, byes, leg-byes.
    pub extras: u32,
    pub delivery_log: Vec<DeliveryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_reason: Option<InningsCloseReason>,
}

impl InningsState {
    pub fn new(number: u8, batting_team: &str, bowling_team: &str) -> Self {
        InningsState {
            number,
            batting_team: batting_team.to_string(),
            bowling_team: bowling_team.to_string(),
            runs: 0,
            wickets: 0,
            completed_overs: 0,
            balls_in_current_over: 0,
            extras: 0,
            delivery_log: Vec::new(),
            close_reason: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.close_reason.is_some()
    }

    /// Legal deliveries bowled so far.
    pub fn legal_balls_bowled(&self) -> u32 {
        self.completed_overs as u32 * 6 + self.balls_in_current_over as u32
    }

    /// Overs in the conventional `completed.balls` notation, e.g. `12.3`.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.completed_overs, self.balls_in_current_over)
    }

    /// Overs bowled as a decimal fraction of six-ball overs.
    pub fn overs_as_decimal(&self) -> f64 {
        self.legal_balls_bowled() as f64 / 6.0
    }
}
