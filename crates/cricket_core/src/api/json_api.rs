//! JSON string boundary for embedding hosts.
//!
//! Every entry point takes a JSON request and returns either a JSON
//! response or an error string of the form `CODE: detail`. Requests
//! carry a `schema_version` so hosts notice a mismatch instead of
//! silently misreading fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{InningsOpeners, MatchConfig, ScoringEngine};
use crate::error::ScoringError;
use crate::models::{
    BallEvent, BallReference, DerivedSnapshot, InningsCloseReason, MatchPhase, MatchScorecard,
    MatchType, Signal, TeamSide,
};
use crate::state;
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: &str) -> String {
    format!("{code}: {message}")
}

fn scoring_err(err: &ScoringError) -> String {
    err_code(err.code(), &err.to_string())
}

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

fn check_schema_version(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(err_code(
            "E_SCHEMA_VERSION",
            &format!("expected {SCHEMA_VERSION}, got {version}"),
        ));
    }
    Ok(())
}

fn parse_request<T: serde::de::DeserializeOwned>(request_json: &str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| err_code("E_PARSE", &e.to_string()))
}

fn to_json<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| err_code("E_SERIALIZE", &e.to_string()))
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    #[serde(default)]
    pub match_type: MatchType,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub batting_first: Option<TeamSide>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMatchResponse {
    pub schema_version: u8,
    pub match_id: Uuid,
    pub match_type: MatchType,
    pub phase: MatchPhase,
}

#[derive(Debug, Deserialize)]
pub struct StartInningsRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
    pub striker: String,
    pub non_striker: String,
    pub bowler: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreBallRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
    pub event: BallEvent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreBallResponse {
    pub schema_version: u8,
    pub sequence: u64,
    pub signals: Vec<Signal>,
    pub snapshot: DerivedSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceBatterRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
    pub batter: String,
}

#[derive(Debug, Deserialize)]
pub struct SetBowlerRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
    pub bowler: String,
}

#[derive(Debug, Deserialize)]
pub struct CloseInningsRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
    #[serde(default = "default_close_reason")]
    pub reason: InningsCloseReason,
}

fn default_close_reason() -> InningsCloseReason {
    InningsCloseReason::Declared
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub match_id: Uuid,
}

/// Shared response for lifecycle operations that return no scorecard.
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationResponse {
    pub schema_version: u8,
    pub sequence: u64,
    pub phase: MatchPhase,
    pub signals: Vec<Signal>,
    pub next_ball: BallReference,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub schema_version: u8,
    pub phase: MatchPhase,
    pub snapshot: DerivedSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScorecardResponse {
    pub schema_version: u8,
    pub scorecard: MatchScorecard,
}

/// Creates a match and registers it for subsequent calls.
pub fn create_match_json(request_json: &str) -> Result<String, String> {
    let request: CreateMatchRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let mut config = MatchConfig::new(request.match_type, &request.home_team, &request.away_team);
    if let Some(side) = request.batting_first {
        config = config.with_batting_first(side);
    }
    let engine = ScoringEngine::new(config);
    let response = CreateMatchResponse {
        schema_version: SCHEMA_VERSION,
        match_id: engine.match_id(),
        match_type: engine.match_type(),
        phase: engine.phase(),
    };
    state::register_match(engine);
    tracing::info!(match_id = %response.match_id, "match registered");
    to_json(&response)
}

pub fn start_innings_json(request_json: &str) -> Result<String, String> {
    let request: StartInningsRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let openers = InningsOpeners::new(&request.striker, &request.non_striker, &request.bowler);
    operation_response(&request.match_id, move |engine| {
        engine.start_innings(openers)?;
        Ok(Vec::new())
    })
}

/// Applies one ball event. The error string keeps the engine's code, so
/// callers can distinguish a retryable sequence conflict from bad input.
pub fn score_ball_json(request_json: &str) -> Result<String, String> {
    let request: ScoreBallRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let outcome = state::with_match(&request.match_id, |engine| engine.apply(request.event))
        .map_err(|e| {
            tracing::debug!(match_id = %request.match_id, error = %e, "ball rejected");
            scoring_err(&e)
        })?;
    to_json(&ScoreBallResponse {
        schema_version: SCHEMA_VERSION,
        sequence: outcome.sequence,
        signals: outcome.signals,
        snapshot: outcome.snapshot,
    })
}

pub fn replace_batter_json(request_json: &str) -> Result<String, String> {
    let request: ReplaceBatterRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    operation_response(&request.match_id, move |engine| {
        engine.replace_batter(&request.batter)?;
        Ok(Vec::new())
    })
}

pub fn set_bowler_json(request_json: &str) -> Result<String, String> {
    let request: SetBowlerRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    operation_response(&request.match_id, move |engine| {
        engine.set_bowler(&request.bowler)?;
        Ok(Vec::new())
    })
}

pub fn close_innings_json(request_json: &str) -> Result<String, String> {
    let request: CloseInningsRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    operation_response(&request.match_id, move |engine| {
        engine.close_innings(request.reason)
    })
}

pub fn complete_match_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    operation_response(&request.match_id, |engine| engine.complete_match())
}

pub fn snapshot_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let (phase, snapshot) = state::with_match(&request.match_id, |engine| {
        Ok((engine.phase(), engine.derived()))
    })
    .map_err(|e| scoring_err(&e))?;
    to_json(&SnapshotResponse {
        schema_version: SCHEMA_VERSION,
        phase,
        snapshot,
    })
}

pub fn scorecard_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let scorecard = state::with_match(&request.match_id, |engine| Ok(engine.scorecard()))
        .map_err(|e| scoring_err(&e))?;
    to_json(&ScorecardResponse {
        schema_version: SCHEMA_VERSION,
        scorecard,
    })
}

fn operation_response<F>(match_id: &Uuid, f: F) -> Result<String, String>
where
    F: FnOnce(&mut ScoringEngine) -> crate::error::Result<Vec<Signal>>,
{
    let response = state::with_match(match_id, |engine| {
        let signals = f(engine)?;
        Ok(OperationResponse {
            schema_version: SCHEMA_VERSION,
            sequence: engine.sequence(),
            phase: engine.phase(),
            signals,
            next_ball: engine.next_ball_reference(),
        })
    })
    .map_err(|e| scoring_err(&e))?;
    to_json(&response)
}
