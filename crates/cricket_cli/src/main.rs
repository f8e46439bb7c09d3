//! Command-line front end for replaying match event logs.

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use cricket_cli::{render_scorecard, replay_reader, schema_text};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cricket_cli", version, about = "Replay cricket event logs into scorecards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL event log and print the final scorecard
    Replay {
        /// Path to the event log
        file: PathBuf,
        /// Print the derived snapshot after every ball
        #[arg(long)]
        snapshots: bool,
    },
    /// Print the replay file format with example lines
    Schema,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { file, snapshots } => run_replay(&file, snapshots),
        Commands::Schema => {
            println!("{}", schema_text());
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn run_replay(file: &PathBuf, snapshots: bool) -> Result<()> {
    use anyhow::Context;
    use std::fs::File;
    use std::io::BufReader;

    println!("🏏 Replaying {}...", file.display());
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("opening replay file {}", file.display()))?,
    );

    let summary = replay_reader(reader, |line, outcome| {
        if snapshots {
            match serde_json::to_string(&outcome.snapshot) {
                Ok(json) => println!("  line {line}: {json}"),
                Err(e) => eprintln!("  line {line}: snapshot failed to serialize: {e}"),
            }
        }
        for signal in &outcome.signals {
            println!("  line {line}: ⚡ {signal:?}");
        }
    })?;

    println!(
        "✅ Applied {} balls over {} operations (match {}, final phase {:?})",
        summary.balls_applied, summary.operations, summary.match_id, summary.final_phase
    );
    println!("{}", render_scorecard(&summary.scorecard));
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("cricket_cli was built without the `cli` feature; rebuild with `--features cli`");
    std::process::exit(1);
}
