//! Host-facing boundaries. Currently a single JSON string API; the
//! typed engine in [`crate::engine`] is the surface for Rust callers.

pub mod json_api;

pub use json_api::{
    close_innings_json, complete_match_json, create_match_json, replace_batter_json,
    scorecard_json, score_ball_json, set_bowler_json, snapshot_json, start_innings_json,
};
