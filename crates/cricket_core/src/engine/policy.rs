use crate::models::{InningsCloseReason, InningsState, MatchType};

/// Legal deliveries in a completed over.
pub const BALLS_PER_OVER: u8 = 6;

/// Wickets that end an innings; eleven batters, ten partnerships.
pub const MAX_WICKETS: u8 = 10;

pub fn is_all_out(innings: &InningsState) -> bool {
    innings.wickets >= MAX_WICKETS
}

pub fn overs_exhausted(innings: &InningsState, match_type: MatchType) -> bool {
    match match_type.over_limit() {
        Some(limit) => innings.completed_overs >= limit,
        None => false,
    }
}

/// The over in progress is the innings' final one, either because the
/// over allocation runs out with it or because the side is already all
/// out. The over-limit arm never fires for the uncapped format.
pub fn is_last_over(innings: &InningsState, match_type: MatchType) -> bool {
    if is_all_out(innings) {
        return true;
    }
    match match_type.over_limit() {
        Some(limit) => innings.completed_overs + 1 >= limit,
        None => false,
    }
}

/// The next legal delivery would be the innings' last.
pub fn is_last_ball(innings: &InningsState, match_type: MatchType) -> bool {
    if is_all_out(innings) {
        return true;
    }
    match match_type.over_limit() {
        Some(limit) => {
            innings.completed_overs + 1 == limit
                && innings.balls_in_current_over == BALLS_PER_OVER - 1
        }
        None => false,
    }
}

/// Why the innings must stop accepting deliveries, if any reason holds.
///
/// A successful chase outranks the other reasons: when the winning run
/// and a simultaneous dismissal arrive on the same delivery the innings
/// closes as a completed chase. Chase closure applies to limited-overs
/// formats only; in the uncapped format passing the first-innings total
/// is merely a lead, so play continues.
pub fn close_reason(
    innings: &InningsState,
    match_type: MatchType,
    target: Option<u32>,
) -> Option<InningsCloseReason> {
    if let Some(target) = target {
        if match_type.is_limited_overs() && innings.runs >= target {
            return Some(InningsCloseReason::ChaseComplete);
        }
    }
    if is_all_out(innings) {
        return Some(InningsCloseReason::AllOut);
    }
    if overs_exhausted(innings, match_type) {
        return Some(InningsCloseReason::OversExhausted);
    }
    None
}
