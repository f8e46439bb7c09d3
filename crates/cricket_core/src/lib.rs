//! # cricket_core - Deterministic Cricket Match Scoring Engine
//!
//! Ball-by-ball scoring for limited-overs and multi-day cricket:
//!
//! - Delivery classification: wides and no-balls concede runs without
//!   consuming a legal ball; byes and leg-byes score for the team only
//! - Over and innings progression with all-or-nothing event validation
//! - Strike rotation (odd runs, over end, the two cancelling) and
//!   dismissal handling with replacement prompts
//! - Derived chase state, ball-by-ball commentary and full scorecards
//! - A process-wide match registry and a JSON boundary for hosts
//!
//! The engine itself is pure and synchronous: one [`BallEvent`] in,
//! a new state plus [`Signal`]s out. Anything rejected leaves the
//! state untouched.

#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

pub use api::{
    close_innings_json, complete_match_json, create_match_json, replace_batter_json,
    scorecard_json, score_ball_json, set_bowler_json, snapshot_json, start_innings_json,
};
pub use engine::{ApplyOutcome, InningsOpeners, MatchConfig, ScoringEngine};
pub use error::{Result, ScoringError};
pub use models::{
    BallEvent, BallReference, BatterSlot, DeliveryRecord, DerivedSnapshot, DismissalKind,
    ExtraKind, InningsCloseReason, InningsState, LineupState, MatchPhase, MatchScorecard,
    MatchType, Signal, TeamSide,
};
pub use state::{register_match, remove_match, reset_registry, with_match};

/// Crate version, from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the JSON request/response schema.
pub const SCHEMA_VERSION: u8 = 1;
