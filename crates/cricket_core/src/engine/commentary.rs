use crate::models::{BallEvent, ExtraKind};

/// Generates the ball-by-ball line for a delivery when the scorer did
/// not supply one. Wickets outrank extras, extras outrank plain runs,
/// so a stumping off a wide reads as a wicket.
pub fn describe(event: &BallEvent, dismissed_batter: Option<&str>) -> String {
    if event.is_wicket {
        let who = dismissed_batter.unwrap_or(&event.batter_name);
        let how = event
            .dismissal_kind
            .map(|kind| kind.as_str())
            .unwrap_or("out");
        return format!("{} is {}! {} strikes!", who, how, event.bowler_name);
    }

    match event.extra_kind {
        ExtraKind::Wide => {
            return format!(
                "Wide delivery! {} strays down the leg side",
                event.bowler_name
            )
        }
        ExtraKind::NoBall => {
            return format!("No Ball! {} oversteps the crease", event.bowler_name)
        }
        ExtraKind::Bye => {
            return "Byes! The ball beats everyone and they scamper through".to_string()
        }
        ExtraKind::LegBye => return "Leg bye! Off the pads and they take a run".to_string(),
        ExtraKind::None => {}
    }

    match event.runs_off_bat {
        0 => format!("Dot ball! {} keeps it tight", event.bowler_name),
        1 => format!("Single taken! {} rotates the strike", event.batter_name),
        2 => "Two runs! Good running between the wickets".to_string(),
        3 => format!("Three runs! Excellent running by {}", event.batter_name),
        4 => format!("FOUR! {} finds the boundary with a lovely shot", event.batter_name),
        6 => format!("SIX! {} sends it sailing over the boundary!", event.batter_name),
        n => format!("{} runs! Good cricket all around", n),
    }
}
