use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{GameConfig, ReplayResult, load_journal_from_file, replay::replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSONL journal to replay
    journal: PathBuf,
    /// Ruleset the journal was recorded under; defaults to the stock rules
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config: GameConfig = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            serde_json::from_str(&data).context("failed to deserialize config JSON")?
        }
        None => GameConfig::default(),
    };

    let loaded = load_journal_from_file(&args.journal)
        .with_context(|| format!("failed to load journal: {}", args.journal.display()))?;

    let result: ReplayResult = replay_to_end(&config, &loaded.journal)
        .map_err(|e| anyhow::anyhow!("replay failed: {e:?}"))?;

    println!("Replay complete.");
    println!("Final level: {}", result.final_level);
    println!("Final tick: {}", result.final_tick);
    println!("Outcome: {:?}", result.final_outcome);
    println!("Snapshot hash: {}", result.final_snapshot_hash);

    Ok(())
}
