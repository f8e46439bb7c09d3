//! Ball-by-ball scoring engine.
//!
//! The engine is a pure state machine: feed it one [`BallEvent`] at a
//! time through [`ScoringEngine::apply`] and it either rejects the event
//! with the state untouched or folds it in and reports the follow-up
//! actions the host must take (next bowler, replacement batter, innings
//! closed, match complete). It performs no IO and holds no locks; see
//! [`crate::state`] for the shared registry hosts usually wrap it in.

pub mod accumulator;
pub mod classifier;
pub mod commentary;
pub mod derived;
pub mod policy;
pub mod rotation;
mod scorecard;
mod wicket;

#[cfg(test)]
mod proptest_gen;

pub use classifier::{classify, ClassifiedDelivery};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{
    BallEvent, BallReference, BatterSlot, DeliveryRecord, DerivedSnapshot, InningsCloseReason,
    InningsState, LineupState, MatchPhase, MatchType, Signal, TeamSide,
};

/// Static description of a match to be scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    pub match_id: Uuid,
    pub match_type: MatchType,
    pub home_team: String,
    pub away_team: String,
    pub batting_first: TeamSide,
}

impl MatchConfig {
    pub fn new(match_type: MatchType, home_team: &str, away_team: &str) -> Self {
        MatchConfig {
            match_id: Uuid::new_v4(),
            match_type,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            batting_first: TeamSide::Home,
        }
    }

    pub fn with_batting_first(mut self, side: TeamSide) -> Self {
        self.batting_first = side;
        self
    }

    pub fn with_match_id(mut self, match_id: Uuid) -> Self {
        self.match_id = match_id;
        self
    }
}

/// Opening pair and opening bowler for a new innings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsOpeners {
    pub striker: String,
    pub non_striker: String,
    pub bowler: String,
}

impl InningsOpeners {
    pub fn new(striker: &str, non_striker: &str, bowler: &str) -> Self {
        InningsOpeners {
            striker: striker.to_string(),
            non_striker: non_striker.to_string(),
            bowler: bowler.to_string(),
        }
    }
}

/// What one accepted delivery produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplyOutcome {
    /// Engine sequence after the event was folded in.
    pub sequence: u64,
    pub signals: Vec<Signal>,
    pub snapshot: DerivedSnapshot,
}

/// Scoring state machine for a single match.
///
/// All mutation goes through the lifecycle methods and [`apply`]; each
/// successful call bumps `sequence` by one, so callers can use the
/// sequence for optimistic concurrency and duplicate detection. Every
/// rejected call leaves the state exactly as it was.
///
/// [`apply`]: ScoringEngine::apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringEngine {
    match_id: Uuid,
    match_type: MatchType,
    home_team: String,
    away_team: String,
    batting_first: TeamSide,
    phase: MatchPhase,
    innings: Vec<InningsState>,
    lineup: LineupState,
    sequence: u64,
    /// Who bowled the over that just ended; barred from the next one.
    last_over_bowler: Option<String>,
}

impl ScoringEngine {
    pub fn new(config: MatchConfig) -> Self {
        log::info!(
            "match {} created: {} vs {} ({})",
            config.match_id,
            config.home_team,
            config.away_team,
            config.match_type
        );
        ScoringEngine {
            match_id: config.match_id,
            match_type: config.match_type,
            home_team: config.home_team,
            away_team: config.away_team,
            batting_first: config.batting_first,
            phase: MatchPhase::AwaitingOpeners,
            innings: Vec::new(),
            lineup: LineupState::empty(),
            sequence: 0,
            last_over_bowler: None,
        }
    }

    /// Opens the next innings with its opening pair and bowler.
    pub fn start_innings(&mut self, openers: InningsOpeners) -> Result<()> {
        match self.phase {
            MatchPhase::AwaitingOpeners | MatchPhase::InningsBreak => {}
            MatchPhase::Live => {
                return Err(ScoringError::IllegalStateTransition(
                    "an innings is already in progress".to_string(),
                ))
            }
            MatchPhase::Completed => {
                return Err(ScoringError::IllegalStateTransition(
                    "match is complete".to_string(),
                ))
            }
        }
        validate_person_name(&openers.striker, "striker")?;
        validate_person_name(&openers.non_striker, "non-striker")?;
        validate_person_name(&openers.bowler, "bowler")?;
        if openers.striker == openers.non_striker {
            return Err(ScoringError::InvalidEvent(
                "the two openers must be different batters".to_string(),
            ));
        }
        if openers.bowler == openers.striker || openers.bowler == openers.non_striker {
            return Err(ScoringError::InvalidEvent(
                "the opening bowler cannot also be batting".to_string(),
            ));
        }

        let number = self.innings.len() as u8 + 1;
        let (batting, bowling) = self.teams_for_innings(number);
        log::info!("innings {} under way: {} batting against {}", number, batting, bowling);
        self.innings.push(InningsState::new(number, &batting, &bowling));
        self.lineup =
            LineupState::with_openers(&openers.striker, &openers.non_striker, &openers.bowler);
        self.last_over_bowler = None;
        self.phase = MatchPhase::Live;
        self.sequence += 1;
        Ok(())
    }

    /// Validates and applies one delivery.
    ///
    /// Validation runs to completion before any counter moves, so a
    /// rejected event leaves the engine byte-for-byte unchanged. On
    /// success the returned signals are ordered: over completion, bowler
    /// prompt, replacement prompt, innings closure, match completion.
    pub fn apply(&mut self, event: BallEvent) -> Result<ApplyOutcome> {
        self.ensure_live_for(&event)?;
        self.ensure_lineup_ready()?;
        let outcome = classifier::classify(&event)?;
        self.ensure_names_match(&event)?;
        let dismissed_slot = self.resolve_dismissed_slot(&event)?;
        self.ensure_correlation(&event)?;

        // Nothing below may fail once the innings counters move.
        let sequence = self.sequence + 1;

        let dismissed_name =
            dismissed_slot.and_then(|slot| self.lineup.batter_at(slot).map(str::to_string));
        let commentary = event
            .free_text
            .clone()
            .unwrap_or_else(|| commentary::describe(&event, dismissed_name.as_deref()));

        let target = self.chase_target();
        let match_type = self.match_type;
        let (over_completed, close, innings_number, over_number) = {
            let Some(innings) = self.innings.last_mut() else {
                return Err(ScoringError::IllegalStateTransition(
                    "no innings in progress".to_string(),
                ));
            };
            let over_completed = accumulator::apply_delivery(
                innings,
                &event,
                &outcome,
                sequence,
                commentary,
                dismissed_name,
            );
            let close = policy::close_reason(innings, match_type, target);
            if let Some(reason) = close {
                innings.close_reason = Some(reason);
            }
            (over_completed, close, innings.number, innings.completed_overs)
        };
        self.sequence = sequence;

        let mut signals = Vec::new();
        if over_completed {
            signals.push(Signal::OverCompleted { over_number });
            self.last_over_bowler = self.lineup.bowler.take();
            if close.is_none() {
                signals.push(Signal::RequestNextBowler);
            }
        }
        if let Some(slot) = dismissed_slot {
            if let Some(signal) = self.process_dismissal(slot, close.is_some()) {
                signals.push(signal);
            }
        } else if rotation::should_rotate_strike(event.runs_off_bat, over_completed, false) {
            self.lineup.swap_strike();
        }
        if let Some(reason) = close {
            signals.push(Signal::InningsClosed {
                innings: innings_number,
                reason,
            });
            signals.extend(self.finish_innings());
        }

        Ok(ApplyOutcome {
            sequence,
            signals,
            snapshot: self.derived(),
        })
    }

    /// Fills the slot vacated by a dismissal.
    pub fn replace_batter(&mut self, batter: &str) -> Result<()> {
        if self.phase != MatchPhase::Live {
            return Err(ScoringError::IllegalStateTransition(
                "no innings in progress".to_string(),
            ));
        }
        let slot = self.lineup.vacant_slot().ok_or_else(|| {
            ScoringError::IllegalStateTransition("no batter replacement is pending".to_string())
        })?;
        validate_person_name(batter, "batter")?;
        if self.lineup.contains_batter(batter) {
            return Err(ScoringError::InvalidEvent(format!(
                "{batter} is already at the crease"
            )));
        }
        self.lineup.set_batter(slot, Some(batter.to_string()));
        self.sequence += 1;
        log::info!("{} comes in at the {} end", batter, slot.as_str());
        Ok(())
    }

    /// Nominates the bowler for the over about to start.
    pub fn set_bowler(&mut self, bowler: &str) -> Result<()> {
        if self.phase != MatchPhase::Live {
            return Err(ScoringError::IllegalStateTransition(
                "no innings in progress".to_string(),
            ));
        }
        if self.lineup.bowler.is_some() {
            return Err(ScoringError::IllegalStateTransition(
                "a bowler is already mid-over".to_string(),
            ));
        }
        validate_person_name(bowler, "bowler")?;
        if self.last_over_bowler.as_deref() == Some(bowler) {
            return Err(ScoringError::InvalidEvent(format!(
                "{bowler} bowled the previous over and cannot bowl consecutive overs"
            )));
        }
        if self.lineup.contains_batter(bowler) {
            return Err(ScoringError::InvalidEvent(format!(
                "{bowler} is currently batting"
            )));
        }
        self.lineup.bowler = Some(bowler.to_string());
        self.sequence += 1;
        Ok(())
    }

    /// Closes the innings in progress, typically as a declaration.
    pub fn close_innings(&mut self, reason: InningsCloseReason) -> Result<Vec<Signal>> {
        if self.phase != MatchPhase::Live {
            return Err(ScoringError::IllegalStateTransition(
                "no innings in progress".to_string(),
            ));
        }
        let Some(innings) = self.innings.last_mut() else {
            return Err(ScoringError::IllegalStateTransition(
                "no innings in progress".to_string(),
            ));
        };
        innings.close_reason = Some(reason);
        let number = innings.number;
        self.sequence += 1;
        log::info!("innings {} closed: {:?}", number, reason);
        let mut signals = vec![Signal::InningsClosed {
            innings: number,
            reason,
        }];
        signals.extend(self.finish_innings());
        Ok(signals)
    }

    /// Archives the match. Used for abandonments and for ending the
    /// uncapped format, which never completes on its own.
    pub fn complete_match(&mut self) -> Result<Vec<Signal>> {
        if self.phase == MatchPhase::Completed {
            return Err(ScoringError::IllegalStateTransition(
                "match is already complete".to_string(),
            ));
        }
        let mut signals = Vec::new();
        if self.phase == MatchPhase::Live {
            if let Some(innings) = self.innings.last_mut() {
                if !innings.is_closed() {
                    innings.close_reason = Some(InningsCloseReason::Declared);
                    signals.push(Signal::InningsClosed {
                        innings: innings.number,
                        reason: InningsCloseReason::Declared,
                    });
                }
            }
        }
        self.phase = MatchPhase::Completed;
        self.sequence += 1;
        log::info!("match {} archived", self.match_id);
        signals.push(Signal::MatchComplete);
        Ok(signals)
    }

    /// Position of the next delivery, for tagging outgoing events.
    ///
    /// Illegal deliveries do not advance the position, so two wides in a
    /// row share a reference; senders that need exact duplicate detection
    /// set `at_sequence` as well.
    pub fn next_ball_reference(&self) -> BallReference {
        match self.innings.last() {
            Some(innings) if !innings.is_closed() => BallReference {
                innings: innings.number,
                over_number: innings.completed_overs + 1,
                ball_number: innings.balls_in_current_over + 1,
            },
            Some(innings) => BallReference {
                innings: innings.number + 1,
                over_number: 1,
                ball_number: 1,
            },
            None => BallReference {
                innings: 1,
                over_number: 1,
                ball_number: 1,
            },
        }
    }

    pub fn match_id(&self) -> Uuid {
        self.match_id
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn lineup(&self) -> &LineupState {
        &self.lineup
    }

    pub fn innings_count(&self) -> usize {
        self.innings.len()
    }

    /// Innings by 1-based number.
    pub fn innings(&self, number: u8) -> Option<&InningsState> {
        self.innings.iter().find(|i| i.number == number)
    }

    pub fn current_innings(&self) -> Option<&InningsState> {
        self.innings.last()
    }

    /// Most recent deliveries of the innings in progress, newest first.
    pub fn recent_deliveries(&self, count: usize) -> Vec<&DeliveryRecord> {
        match self.innings.last() {
            Some(innings) => innings.delivery_log.iter().rev().take(count).collect(),
            None => Vec::new(),
        }
    }

    /// First-innings runs plus one, defined only while the second
    /// innings bats.
    fn chase_target(&self) -> Option<u32> {
        if self.innings.len() == 2 {
            self.innings.first().map(|first| first.runs + 1)
        } else {
            None
        }
    }

    fn teams_for_innings(&self, number: u8) -> (String, String) {
        let batting_side = if number % 2 == 1 {
            self.batting_first
        } else {
            self.batting_first.other()
        };
        match batting_side {
            TeamSide::Home => (self.home_team.clone(), self.away_team.clone()),
            TeamSide::Away => (self.away_team.clone(), self.home_team.clone()),
        }
    }

    fn ensure_live_for(&self, event: &BallEvent) -> Result<()> {
        match self.phase {
            MatchPhase::Live => Ok(()),
            MatchPhase::AwaitingOpeners => Err(ScoringError::IllegalStateTransition(
                "no innings in progress; set the openers first".to_string(),
            )),
            MatchPhase::InningsBreak | MatchPhase::Completed => {
                Err(self.closed_innings_error(event))
            }
        }
    }

    /// Rejection kind for a delivery aimed at a closed innings. Events
    /// that would push a capped counter past its bound report the
    /// capacity problem; everything else is a state error.
    fn closed_innings_error(&self, event: &BallEvent) -> ScoringError {
        if let Some(last) = self.innings.last() {
            if event.is_wicket && policy::is_all_out(last) {
                return ScoringError::Overflow(format!(
                    "innings {} is already all out at {} wickets",
                    last.number, last.wickets
                ));
            }
            if policy::overs_exhausted(last, self.match_type) {
                return ScoringError::Overflow(format!(
                    "innings {} has used its full {} overs",
                    last.number, last.completed_overs
                ));
            }
        }
        match self.phase {
            MatchPhase::Completed => {
                ScoringError::IllegalStateTransition("match is complete".to_string())
            }
            _ => ScoringError::IllegalStateTransition("innings is closed".to_string()),
        }
    }

    fn ensure_lineup_ready(&self) -> Result<()> {
        if let Some(slot) = self.lineup.vacant_slot() {
            return Err(ScoringError::IllegalStateTransition(format!(
                "the {} slot is empty; replace the dismissed batter first",
                slot.as_str()
            )));
        }
        if self.lineup.bowler.is_none() {
            return Err(ScoringError::IllegalStateTransition(
                "no bowler nominated for this over".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_names_match(&self, event: &BallEvent) -> Result<()> {
        match self.lineup.batter_on_strike() {
            Some(on_strike) if on_strike == event.batter_name => {}
            Some(on_strike) => {
                return Err(ScoringError::InvalidEvent(format!(
                    "batter {} is not on strike ({} is)",
                    event.batter_name, on_strike
                )))
            }
            None => {
                return Err(ScoringError::IllegalStateTransition(
                    "no batter is on strike".to_string(),
                ))
            }
        }
        match self.lineup.bowler.as_deref() {
            Some(bowler) if bowler == event.bowler_name => Ok(()),
            Some(bowler) => Err(ScoringError::InvalidEvent(format!(
                "bowler {} does not match the current bowler {}",
                event.bowler_name, bowler
            ))),
            None => Err(ScoringError::IllegalStateTransition(
                "no bowler nominated for this over".to_string(),
            )),
        }
    }

    /// Resolves which slot a wicket event empties. Defaults to the slot
    /// on strike when the event does not say.
    fn resolve_dismissed_slot(&self, event: &BallEvent) -> Result<Option<BatterSlot>> {
        if !event.is_wicket {
            return Ok(None);
        }
        let slot = event.dismissed_batter_slot.unwrap_or(self.lineup.on_strike);
        if self.lineup.batter_at(slot).is_none() {
            return Err(ScoringError::InvalidEvent(format!(
                "no batter occupies the {} slot",
                slot.as_str()
            )));
        }
        Ok(Some(slot))
    }

    fn ensure_correlation(&self, event: &BallEvent) -> Result<()> {
        let expected = self.next_ball_reference();
        if event.innings != expected.innings
            || event.over_number != expected.over_number
            || event.ball_number != expected.ball_number
        {
            return Err(ScoringError::SequenceConflict(format!(
                "event targets innings {} over {} ball {}, engine is at innings {} over {} ball {}",
                event.innings,
                event.over_number,
                event.ball_number,
                expected.innings,
                expected.over_number,
                expected.ball_number
            )));
        }
        if let Some(at) = event.at_sequence {
            if at != self.sequence {
                return Err(ScoringError::SequenceConflict(format!(
                    "event was prepared at sequence {at}, engine is at {}",
                    self.sequence
                )));
            }
        }
        Ok(())
    }

    /// Phase transition after an innings closes. Limited-overs matches
    /// archive themselves once the second innings is done.
    fn finish_innings(&mut self) -> Vec<Signal> {
        if self.match_type.is_limited_overs() && self.innings.len() >= 2 {
            self.phase = MatchPhase::Completed;
            log::info!("match {} complete", self.match_id);
            vec![Signal::MatchComplete]
        } else {
            self.phase = MatchPhase::InningsBreak;
            Vec::new()
        }
    }
}

fn validate_person_name(name: &str, role: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ScoringError::InvalidEvent(format!(
            "{role} name cannot be empty"
        )));
    }
    Ok(())
}
