use std::collections::HashSet;

use anyhow::{Result, bail};
use clap::Parser;
use game_core::{AdvanceStopReason, Direction, GameConfig, RunOutcome, Session};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// How many sessions to drive (each is run twice and compared)
    #[arg(long, default_value_t = 32)]
    sessions: u32,
    /// Tick budget per session
    #[arg(long, default_value_t = 4000)]
    max_ticks: u64,
}

/// splitmix64, to spread session indices across the seed space.
fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[derive(Debug, PartialEq, Eq)]
struct SoakReport {
    hash: u64,
    tick: u64,
    log_len: usize,
    outcome: Option<RunOutcome>,
    level: u32,
}

fn run_session(seed: u64, bot_seed: u64, max_ticks: u64) -> Result<SoakReport> {
    let mut session = Session::new(seed, GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(bot_seed);

    while session.current_tick() < max_ticks {
        let result = session.advance(10);

        match result.stop_reason {
            AdvanceStopReason::Finished(_) => break,
            AdvanceStopReason::AwaitingInput => {
                let direction = Direction::ALL[rng.next_u64() as usize % Direction::ALL.len()];
                if session.submit_move(direction).is_err() {
                    bail!("input stop refused a move on seed {seed}");
                }
            }
            AdvanceStopReason::LevelComplete { .. } => {
                if session.reset_level().is_err() {
                    bail!("completed level refused a reset on seed {seed}");
                }
            }
            AdvanceStopReason::BudgetExhausted => {}
        }

        let state = session.state();
        let mut occupied = HashSet::new();
        for (_, actor) in state.actors.iter() {
            if !state.board.in_bounds(actor.pos) {
                bail!("actor out of bounds at {:?} on seed {seed}", actor.pos);
            }
            if !occupied.insert(actor.pos) {
                bail!("two actors share {:?} on seed {seed}", actor.pos);
            }
            if state.wall_at(actor.pos).is_some() {
                bail!("actor inside a wall at {:?} on seed {seed}", actor.pos);
            }
        }
        if session.outcome() == Some(RunOutcome::Victory) {
            bail!("endless session claimed victory on seed {seed}");
        }
    }

    Ok(SoakReport {
        hash: session.snapshot_hash(),
        tick: session.current_tick(),
        log_len: session.log().len(),
        outcome: session.outcome(),
        level: session.level(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Soaking {} sessions from seed {}...", args.sessions, args.seed);

    let mut defeats = 0u32;
    let mut deepest = 1u32;
    for index in 0..args.sessions {
        let session_seed = mix(args.seed.wrapping_add(u64::from(index)));
        let bot_seed = mix(session_seed);

        let first = run_session(session_seed, bot_seed, args.max_ticks)?;
        let second = run_session(session_seed, bot_seed, args.max_ticks)?;
        if first != second {
            bail!("seed {session_seed} did not reproduce itself: {first:?} vs {second:?}");
        }

        if first.outcome == Some(RunOutcome::Defeat) {
            defeats += 1;
        }
        deepest = deepest.max(first.level);
    }

    println!(
        "Soak completed: {} sessions, {} defeats, deepest level {}.",
        args.sessions, defeats, deepest
    );
    Ok(())
}
