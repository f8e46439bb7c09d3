use std::collections::BTreeMap;

use super::derived::round2;
use super::ScoringEngine;
use crate::models::{
    BattingCard, BowlingCard, DeliveryRecord, FallOfWicket, InningsScorecard, InningsState,
    MatchScorecard, OverSummary,
};

impl ScoringEngine {
    /// Full reconstructed card for every innings, derived entirely from
    /// the delivery logs so it can be rebuilt at any point of the match.
    pub fn scorecard(&self) -> MatchScorecard {
        MatchScorecard {
            match_id: self.match_id(),
            match_type: self.match_type(),
            home_team: self.home_team().to_string(),
            away_team: self.away_team().to_string(),
            innings: (1..=self.innings_count() as u8)
                .filter_map(|number| self.innings(number))
                .map(innings_scorecard)
                .collect(),
        }
    }
}

fn innings_scorecard(innings: &InningsState) -> InningsScorecard {
    let mut batting: Vec<BattingCard> = Vec::new();
    let mut bowling: Vec<BowlingCard> = Vec::new();
    let mut fall_of_wickets = Vec::new();
    let mut overs: BTreeMap<u16, (u32, u8)> = BTreeMap::new();
    let mut team_score = 0u32;
    let mut wickets_down = 0u8;

    for record in &innings.delivery_log {
        team_score += record.attributed_runs();

        let batter = batting_entry(&mut batting, &record.batter_name);
        if record.extra_kind.is_legal() {
            batter.balls_faced += 1;
        }
        batter.runs += record.batting_runs as u32;
        if record.batting_runs == 4 {
            batter.fours += 1;
        } else if record.batting_runs == 6 {
            batter.sixes += 1;
        }

        let bowler = bowling_entry(&mut bowling, &record.bowler_name);
        if record.extra_kind.is_legal() {
            bowler.balls_bowled += 1;
        }
        bowler.runs_conceded += record.attributed_runs();

        if record.is_wicket {
            wickets_down += 1;
            record_dismissal(
                &mut batting,
                &mut bowling,
                &mut fall_of_wickets,
                record,
                team_score,
                wickets_down,
            );
        }

        let over = overs.entry(record.over_number).or_insert((0, 0));
        over.0 += record.attributed_runs();
        if record.is_wicket {
            over.1 += 1;
        }
    }

    for card in &mut batting {
        card.strike_rate = if card.balls_faced == 0 {
            0.0
        } else {
            round2(card.runs as f64 * 100.0 / card.balls_faced as f64)
        };
    }
    for card in &mut bowling {
        card.overs = format!("{}.{}", card.balls_bowled / 6, card.balls_bowled % 6);
        card.economy = if card.balls_bowled == 0 {
            0.0
        } else {
            round2(card.runs_conceded as f64 * 6.0 / card.balls_bowled as f64)
        };
    }

    let mut cumulative = 0u32;
    let over_summaries = overs
        .into_iter()
        .map(|(over_number, (runs, wickets))| {
            cumulative += runs;
            OverSummary {
                over_number,
                runs,
                wickets,
                cumulative_runs: cumulative,
            }
        })
        .collect();

    InningsScorecard {
        innings: innings.number,
        batting_team: innings.batting_team.clone(),
        bowling_team: innings.bowling_team.clone(),
        total_runs: innings.runs,
        wickets: innings.wickets,
        overs: innings.overs_display(),
        extras: innings.extras,
        batting,
        bowling,
        fall_of_wickets,
        over_summaries,
        close_reason: innings.close_reason,
    }
}

fn record_dismissal(
    batting: &mut Vec<BattingCard>,
    bowling: &mut [BowlingCard],
    fall_of_wickets: &mut Vec<FallOfWicket>,
    record: &DeliveryRecord,
    team_score: u32,
    wicket_number: u8,
) {
    let Some(kind) = record.dismissal_kind else {
        return;
    };
    let dismissed = record
        .dismissed_batter_name
        .as_deref()
        .unwrap_or(&record.batter_name);

    let description = if kind.credits_bowler() {
        if let Some(card) = bowling.iter_mut().find(|b| b.name == record.bowler_name) {
            card.wickets += 1;
        }
        format!("{} b {}", kind.as_str(), record.bowler_name)
    } else {
        kind.as_str().to_string()
    };
    batting_entry(batting, dismissed).dismissal = Some(description);

    // Over position from the legal-ball count: a wicket on a wide shows
    // the last completed legal ball, not the slot the wide was aimed at.
    let over = format!(
        "{}.{}",
        record.legal_ball_number / 6,
        record.legal_ball_number % 6
    );
    fall_of_wickets.push(FallOfWicket {
        wicket_number,
        batter_name: dismissed.to_string(),
        team_score,
        over,
        dismissal: kind,
    });
}

fn batting_entry<'a>(batting: &'a mut Vec<BattingCard>, name: &str) -> &'a mut BattingCard {
    if let Some(index) = batting.iter().position(|card| card.name == name) {
        return &mut batting[index];
    }
    batting.push(BattingCard {
        name: name.to_string(),
        runs: 0,
        balls_faced: 0,
        fours: 0,
        sixes: 0,
        strike_rate: 0.0,
        dismissal: None,
    });
    let last = batting.len() - 1;
    &mut batting[last]
}

fn bowling_entry<'a>(bowling: &'a mut Vec<BowlingCard>, name: &str) -> &'a mut BowlingCard {
    if let Some(index) = bowling.iter().position(|card| card.name == name) {
        return &mut bowling[index];
    }
    bowling.push(BowlingCard {
        name: name.to_string(),
        balls_bowled: 0,
        overs: "0.0".to_string(),
        runs_conceded: 0,
        wickets: 0,
        economy: 0.0,
    });
    let last = bowling.len() - 1;
    &mut bowling[last]
}
