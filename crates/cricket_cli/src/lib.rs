//! Replays JSONL event logs through the scoring engine.
//!
//! A replay file is one JSON object per line, each tagged with an `op`.
//! The first line must be `create_match`; everything after that arrives
//! in match order. Ball lines may leave their position tags at zero, in
//! which case the replayer fills them from the engine, the same way a
//! live scoring client would.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use uuid::Uuid;

use cricket_core::{
    ApplyOutcome, BallEvent, DerivedSnapshot, InningsCloseReason, InningsOpeners, MatchConfig,
    MatchPhase, MatchScorecard, MatchType, ScoringEngine, TeamSide,
};

/// One line of a replay file.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayOp {
    CreateMatch {
        #[serde(default)]
        match_type: MatchType,
        home_team: String,
        away_team: String,
        #[serde(default)]
        batting_first: Option<TeamSide>,
    },
    StartInnings {
        striker: String,
        non_striker: String,
        bowler: String,
    },
    Ball {
        #[serde(flatten)]
        event: BallEvent,
    },
    ReplaceBatter {
        batter: String,
    },
    SetBowler {
        bowler: String,
    },
    CloseInnings {
        #[serde(default)]
        reason: Option<InningsCloseReason>,
    },
    CompleteMatch,
}

/// What a finished replay produced.
#[derive(Debug)]
pub struct ReplaySummary {
    pub match_id: Uuid,
    pub final_phase: MatchPhase,
    pub balls_applied: u32,
    pub operations: u32,
    pub sequence: u64,
    pub snapshot: DerivedSnapshot,
    pub scorecard: MatchScorecard,
}

/// Replays a file from disk. See [`replay_reader`].
pub fn replay_path(path: &Path) -> Result<ReplaySummary> {
    let file = File::open(path)
        .with_context(|| format!("opening replay file {}", path.display()))?;
    replay_reader(BufReader::new(file), |_, _| {})
}

/// Replays line-delimited ops from any reader, invoking `on_ball` with
/// the line number and outcome of every applied delivery.
pub fn replay_reader<R, F>(reader: R, mut on_ball: F) -> Result<ReplaySummary>
where
    R: BufRead,
    F: FnMut(usize, &ApplyOutcome),
{
    let mut engine: Option<ScoringEngine> = None;
    let mut balls_applied = 0u32;
    let mut operations = 0u32;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("reading line {line_number}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let op: ReplayOp = serde_json::from_str(trimmed)
            .with_context(|| format!("parsing line {line_number}"))?;
        operations += 1;

        match op {
            ReplayOp::CreateMatch {
                match_type,
                home_team,
                away_team,
                batting_first,
            } => {
                if engine.is_some() {
                    bail!("line {line_number}: match already created");
                }
                let mut config = MatchConfig::new(match_type, &home_team, &away_team);
                if let Some(side) = batting_first {
                    config = config.with_batting_first(side);
                }
                engine = Some(ScoringEngine::new(config));
            }
            op => {
                let engine = engine
                    .as_mut()
                    .ok_or_else(|| anyhow::anyhow!("line {line_number}: replay must begin with a create_match line"))?;
                apply_op(engine, op, line_number, &mut balls_applied, &mut on_ball)?;
            }
        }
    }

    let engine = engine.context("replay file contained no create_match line")?;
    Ok(ReplaySummary {
        match_id: engine.match_id(),
        final_phase: engine.phase(),
        balls_applied,
        operations,
        sequence: engine.sequence(),
        snapshot: engine.derived(),
        scorecard: engine.scorecard(),
    })
}

fn apply_op<F>(
    engine: &mut ScoringEngine,
    op: ReplayOp,
    line_number: usize,
    balls_applied: &mut u32,
    on_ball: &mut F,
) -> Result<()>
where
    F: FnMut(usize, &ApplyOutcome),
{
    match op {
        ReplayOp::CreateMatch { .. } => {
            bail!("line {line_number}: match already created")
        }
        ReplayOp::StartInnings {
            striker,
            non_striker,
            bowler,
        } => {
            engine
                .start_innings(InningsOpeners::new(&striker, &non_striker, &bowler))
                .with_context(|| format!("line {line_number}: start_innings"))?;
        }
        ReplayOp::Ball { mut event } => {
            if event.innings == 0 {
                // Untagged line: pick up the engine's position, like a
                // live client submitting the next ball.
                event = event.with_reference(engine.next_ball_reference());
            }
            let outcome = engine
                .apply(event)
                .with_context(|| format!("line {line_number}: ball rejected"))?;
            *balls_applied += 1;
            on_ball(line_number, &outcome);
        }
        ReplayOp::ReplaceBatter { batter } => {
            engine
                .replace_batter(&batter)
                .with_context(|| format!("line {line_number}: replace_batter"))?;
        }
        ReplayOp::SetBowler { bowler } => {
            engine
                .set_bowler(&bowler)
                .with_context(|| format!("line {line_number}: set_bowler"))?;
        }
        ReplayOp::CloseInnings { reason } => {
            engine
                .close_innings(reason.unwrap_or(InningsCloseReason::Declared))
                .with_context(|| format!("line {line_number}: close_innings"))?;
        }
        ReplayOp::CompleteMatch => {
            engine
                .complete_match()
                .with_context(|| format!("line {line_number}: complete_match"))?;
        }
    }
    Ok(())
}

/// Plain-text rendering of a full match card.
pub fn render_scorecard(card: &MatchScorecard) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} vs {}\n",
        card.match_type, card.home_team, card.away_team
    ));

    for innings in &card.innings {
        let close = innings
            .close_reason
            .map(|reason| format!(" [{reason:?}]"))
            .unwrap_or_default();
        out.push_str(&format!(
            "\nInnings {}: {} {}/{} ({} ov){}\n",
            innings.innings,
            innings.batting_team,
            innings.total_runs,
            innings.wickets,
            innings.overs,
            close
        ));

        out.push_str(&format!(
            "  {:<24} {:>4} {:>4} {:>3} {:>3} {:>8}\n",
            "Batting", "R", "B", "4s", "6s", "SR"
        ));
        for batter in &innings.batting {
            let name = match &batter.dismissal {
                Some(how) => format!("{} ({})", batter.name, how),
                None => format!("{} (not out)", batter.name),
            };
            out.push_str(&format!(
                "  {:<24} {:>4} {:>4} {:>3} {:>3} {:>8.2}\n",
                name, batter.runs, batter.balls_faced, batter.fours, batter.sixes,
                batter.strike_rate
            ));
        }
        out.push_str(&format!("  Extras: {}\n", innings.extras));

        out.push_str(&format!(
            "  {:<24} {:>6} {:>4} {:>3} {:>8}\n",
            "Bowling", "O", "R", "W", "Econ"
        ));
        for bowler in &innings.bowling {
            out.push_str(&format!(
                "  {:<24} {:>6} {:>4} {:>3} {:>8.2}\n",
                bowler.name, bowler.overs, bowler.runs_conceded, bowler.wickets,
                bowler.economy
            ));
        }

        if !innings.fall_of_wickets.is_empty() {
            let falls: Vec<String> = innings
                .fall_of_wickets
                .iter()
                .map(|fall| {
                    format!(
                        "{}-{} ({}, {})",
                        fall.wicket_number, fall.team_score, fall.batter_name, fall.over
                    )
                })
                .collect();
            out.push_str(&format!("  Fall: {}\n", falls.join(", ")));
        }
    }
    out
}

/// Line-format reference printed by the `schema` subcommand.
pub fn schema_text() -> String {
    [
        "Replay files are JSON Lines: one operation object per line.",
        "Blank lines and lines starting with '#' are skipped.",
        "",
        r#"{"op":"create_match","match_type":"T20","home_team":"India","away_team":"Australia","batting_first":"home"}"#,
        r#"{"op":"start_innings","striker":"Gill","non_striker":"Jaiswal","bowler":"Starc"}"#,
        r#"{"op":"ball","innings":0,"over_number":0,"ball_number":0,"batter_name":"Gill","bowler_name":"Starc","runs_off_bat":4}"#,
        r#"{"op":"ball","innings":0,"over_number":0,"ball_number":0,"batter_name":"Gill","bowler_name":"Starc","extra_kind":"wide","extra_runs":1}"#,
        r#"{"op":"ball","innings":0,"over_number":0,"ball_number":0,"batter_name":"Gill","bowler_name":"Starc","is_wicket":true,"dismissal_kind":"bowled","dismissed_batter_slot":"striker"}"#,
        r#"{"op":"replace_batter","batter":"Pant"}"#,
        r#"{"op":"set_bowler","bowler":"Cummins"}"#,
        r#"{"op":"close_innings","reason":"declared"}"#,
        r#"{"op":"complete_match"}"#,
        "",
        "Position tags (innings/over_number/ball_number) may be zero to",
        "let the replayer fill them from the engine's current position.",
    ]
    .join("\n")
}
