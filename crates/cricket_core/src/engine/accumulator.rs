use chrono::Utc;
use uuid::Uuid;

use super::classifier::ClassifiedDelivery;
use super::policy::BALLS_PER_OVER;
use crate::models::{BallEvent, DeliveryRecord, InningsState};

/// Folds one validated delivery into the innings counters and appends it
/// to the delivery log. Never fails: every precondition is checked
/// before this point, so the mutation is all-or-nothing at the call
/// site. Returns whether the delivery completed the over.
pub fn apply_delivery(
    innings: &mut InningsState,
    event: &BallEvent,
    outcome: &ClassifiedDelivery,
    sequence: u64,
    commentary: String,
    dismissed_batter_name: Option<String>,
) -> bool {
    let over_number = innings.completed_overs + 1;
    let ball_number = innings.balls_in_current_over + 1;
    let legal_balls_before = innings.legal_balls_bowled();

    innings.runs += outcome.attributed_runs;
    innings.extras += outcome.attributed_runs - outcome.batting_runs as u32;
    if event.is_wicket {
        innings.wickets += 1;
        log::info!(
            "wicket {} down at {}/{}",
            innings.wickets,
            innings.runs,
            innings.wickets
        );
    }

    let mut over_completed = false;
    let legal_ball_number;
    if outcome.legal {
        legal_ball_number = legal_balls_before + 1;
        innings.balls_in_current_over += 1;
        if innings.balls_in_current_over == BALLS_PER_OVER {
            innings.balls_in_current_over = 0;
            innings.completed_overs += 1;
            over_completed = true;
            log::debug!("over {} complete", innings.completed_overs);
        }
    } else {
        // Illegal deliveries repeat the preceding legal ball's number.
        legal_ball_number = legal_balls_before.max(1);
    }

    innings.delivery_log.push(DeliveryRecord {
        id: Uuid::new_v4(),
        sequence,
        over_number,
        ball_number,
        legal_ball_number,
        batter_name: event.batter_name.clone(),
        bowler_name: event.bowler_name.clone(),
        runs_off_bat: event.runs_off_bat,
        extra_runs: event.extra_runs,
        extra_kind: event.extra_kind,
        batting_runs: outcome.batting_runs,
        is_wicket: event.is_wicket,
        dismissal_kind: event.dismissal_kind,
        dismissed_batter_name,
        commentary,
        recorded_at: Utc::now(),
    });

    over_completed
}
