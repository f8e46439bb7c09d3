use serde::{Deserialize, Serialize};

/// Extra classification for a delivery.
///
/// Wide and no-ball are illegal deliveries: they concede runs but do not
/// consume one of the six legal balls in the over. Bye and leg-bye are
/// legal deliveries whose run value never reaches the batter's tally.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "kebab-case")]
pub enum ExtraKind {
    #[default]
    None,
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// A legal delivery advances the six-ball over count.
    pub fn is_legal(&self) -> bool {
        !matches!(self, ExtraKind::Wide | ExtraKind::NoBall)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraKind::None => "none",
            ExtraKind::Wide => "wide",
            ExtraKind::NoBall => "no-ball",
            ExtraKind::Bye => "bye",
            ExtraKind::LegBye => "leg-bye",
        }
    }
}

/// How a batter was dismissed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "kebab-case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    RunOut,
    HitWicket,
}

impl DismissalKind {
    /// Run-outs are the one dismissal not credited to the bowler.
    pub fn credits_bowler(&self) -> bool {
        !matches!(self, DismissalKind::RunOut)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DismissalKind::Bowled => "bowled",
            DismissalKind::Caught => "caught",
            DismissalKind::Lbw => "lbw",
            DismissalKind::Stumped => "stumped",
            DismissalKind::RunOut => "run-out",
            DismissalKind::HitWicket => "hit-wicket",
        }
    }
}

/// One of the two batting positions at the crease.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "kebab-case")]
pub enum BatterSlot {
    Striker,
    NonStriker,
}

impl BatterSlot {
    pub fn other(&self) -> BatterSlot {
        match self {
            BatterSlot::Striker => BatterSlot::NonStriker,
            BatterSlot::NonStriker => BatterSlot::Striker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatterSlot::Striker => "striker",
            BatterSlot::NonStriker => "non-striker",
        }
    }
}

/// Position of the next delivery, used to correlate incoming events
/// against the engine's current progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BallReference {
    pub innings: u8,
    pub over_number: u16,
    pub ball_number: u8,
}

/// A single delivery as reported by the scorer.
///
/// `runs_off_bat` carries the batted value, and for byes and leg-byes it
/// also carries the run value even though the batter is never credited.
/// `extra_runs` carries the penalty and overthrow component of wides and
/// no-balls. `innings`, `over_number` and `ball_number` tag the event with
/// the position the sender believed the match was at; a mismatch against
/// the engine is reported as a sequence conflict rather than applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BallEvent {
    pub innings: u8,
    pub over_number: u16,
    pub ball_number: u8,
    pub batter_name: String,
    pub bowler_name: String,
    #[serde(default)]
    pub runs_off_bat: u8,
    #[serde(default)]
    pub extra_runs: u8,
    #[serde(default)]
    pub extra_kind: ExtraKind,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal_kind: Option<DismissalKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed_batter_slot: Option<BatterSlot>,
    /// Scorer-supplied commentary. When absent the engine generates a line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text: Option<String>,
    /// Optimistic-concurrency tag: the engine sequence the sender last saw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_sequence: Option<u64>,
}

impl BallEvent {
    fn base(batter: &str, bowler: &str) -> Self {
        BallEvent {
            innings: 0,
            over_number: 0,
            ball_number: 0,
            batter_name: batter.to_string(),
            bowler_name: bowler.to_string(),
            runs_off_bat: 0,
            extra_runs: 0,
            extra_kind: ExtraKind::None,
            is_wicket: false,
            dismissal_kind: None,
            dismissed_batter_slot: None,
            free_text: None,
            at_sequence: None,
        }
    }

    /// Ordinary batted delivery: dot ball, single, boundary and so on.
    pub fn runs(batter: &str, bowler: &str, runs: u8) -> Self {
        let mut event = Self::base(batter, bowler);
        event.runs_off_bat = runs;
        event
    }

    /// Wide delivery; `extra_runs` includes the mandatory penalty run.
    pub fn wide(batter: &str, bowler: &str, extra_runs: u8) -> Self {
        let mut event = Self::base(batter, bowler);
        event.extra_kind = ExtraKind::Wide;
        event.extra_runs = extra_runs;
        event
    }

    /// No-ball; bat runs scored off it go through [`BallEvent::with_bat_runs`].
    pub fn no_ball(batter: &str, bowler: &str, extra_runs: u8) -> Self {
        let mut event = Self::base(batter, bowler);
        event.extra_kind = ExtraKind::NoBall;
        event.extra_runs = extra_runs;
        event
    }

    /// Byes run while the ball beat everyone. The value travels in the
    /// `runs_off_bat` channel but is never credited to the batter.
    pub fn bye(batter: &str, bowler: &str, runs: u8) -> Self {
        let mut event = Self::base(batter, bowler);
        event.extra_kind = ExtraKind::Bye;
        event.runs_off_bat = runs;
        event
    }

    /// Leg-byes off the pads; same channel convention as [`BallEvent::bye`].
    pub fn leg_bye(batter: &str, bowler: &str, runs: u8) -> Self {
        let mut event = Self::base(batter, bowler);
        event.extra_kind = ExtraKind::LegBye;
        event.runs_off_bat = runs;
        event
    }

    /// Dismissal on an otherwise scoreless legal delivery.
    pub fn wicket(batter: &str, bowler: &str, kind: DismissalKind, slot: BatterSlot) -> Self {
        let mut event = Self::base(batter, bowler);
        event.is_wicket = true;
        event.dismissal_kind = Some(kind);
        event.dismissed_batter_slot = Some(slot);
        event
    }

    pub fn with_correlation(mut self, innings: u8, over_number: u16, ball_number: u8) -> Self {
        self.innings = innings;
        self.over_number = over_number;
        self.ball_number = ball_number;
        self
    }

    pub fn with_reference(self, reference: BallReference) -> Self {
        self.with_correlation(reference.innings, reference.over_number, reference.ball_number)
    }

    pub fn with_bat_runs(mut self, runs: u8) -> Self {
        self.runs_off_bat = runs;
        self
    }

    pub fn with_extra_runs(mut self, extra_runs: u8) -> Self {
        self.extra_runs = extra_runs;
        self
    }

    pub fn with_wicket(mut self, kind: DismissalKind, slot: BatterSlot) -> Self {
        self.is_wicket = true;
        self.dismissal_kind = Some(kind);
        self.dismissed_batter_slot = Some(slot);
        self
    }

    pub fn with_free_text(mut self, text: &str) -> Self {
        self.free_text = Some(text.to_string());
        self
    }

    pub fn with_at_sequence(mut self, sequence: u64) -> Self {
        self.at_sequence = Some(sequence);
        self
    }
}
