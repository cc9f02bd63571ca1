use core::journal::InputJournal;
use core::replay::replay_to_end;
use core::{AdvanceStopReason, Direction, GameConfig, RunOutcome, Session};

/// Seven cells right along the top rim, then seven down the right rim.
/// Level 1 spawns nothing on the rim and no enemies, so this walk reaches
/// the exit for any seed.
fn rim_walk() -> Vec<Direction> {
    let mut moves = vec![Direction::Right; 7];
    moves.extend([Direction::Down; 7]);
    moves
}

fn rim_walk_journal(seed: u64, config: &GameConfig) -> InputJournal {
    let mut journal = InputJournal::new(seed, config.content_hash());
    for (seq, direction) in rim_walk().into_iter().enumerate() {
        journal.append_move(direction, seq as u64);
    }
    journal
}

#[test]
fn identical_seeds_produce_the_same_hash() {
    let config = GameConfig { final_level: Some(1), ..GameConfig::default() };

    let result1 = replay_to_end(&config, &rim_walk_journal(12345, &config)).expect("replay 1");
    let result2 = replay_to_end(&config, &rim_walk_journal(12345, &config)).expect("replay 2");

    assert_eq!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "identical runs must produce identical hashes"
    );
    assert_eq!(result1.final_tick, result2.final_tick);
    assert_eq!(result1.final_outcome, RunOutcome::Victory);
}

#[test]
fn different_seeds_produce_different_hashes() {
    let config = GameConfig { final_level: Some(1), ..GameConfig::default() };

    let result1 = replay_to_end(&config, &rim_walk_journal(123, &config)).expect("replay 1");
    let result2 = replay_to_end(&config, &rim_walk_journal(456, &config)).expect("replay 2");

    assert_ne!(result1.final_snapshot_hash, result2.final_snapshot_hash);
}

#[test]
fn an_extra_detour_move_diverges_the_run() {
    let config = GameConfig { final_level: Some(1), ..GameConfig::default() };

    let mut direct = Session::new(7, config.clone());
    for direction in rim_walk() {
        direct.submit_move(direction).unwrap();
        direct.advance(64);
    }

    let mut detour = Session::new(7, config.clone());
    let mut moves = vec![Direction::Down, Direction::Up];
    moves.extend(rim_walk());
    for direction in moves {
        detour.submit_move(direction).unwrap();
        detour.advance(64);
    }

    assert_eq!(direct.outcome(), Some(RunOutcome::Victory));
    assert_eq!(detour.outcome(), Some(RunOutcome::Victory));
    assert_ne!(direct.current_tick(), detour.current_tick());
    assert_ne!(direct.snapshot_hash(), detour.snapshot_hash());
}

#[test]
fn fixed_seed_produces_a_stable_log_trace() {
    fn run_trace(seed: u64) -> Vec<String> {
        let mut session = Session::new(seed, GameConfig::default());
        let mut trace = Vec::new();
        let mut seen_logs = 0usize;

        while session.current_tick() < 400 {
            let result = session.advance(1);
            match result.stop_reason {
                AdvanceStopReason::Finished(_) => break,
                AdvanceStopReason::AwaitingInput => {
                    let player = session.state().player().pos;
                    let exit = session.state().board.exit;
                    let direction =
                        if player.x < exit.x { Direction::Right } else { Direction::Down };
                    session.submit_move(direction).expect("input stop accepts a move");
                }
                AdvanceStopReason::LevelComplete { .. } => {
                    session.reset_level().expect("completed level accepts a reset");
                }
                AdvanceStopReason::BudgetExhausted => {}
            }

            let logs = session.log();
            for event in &logs[seen_logs..] {
                trace.push(format!("{event:?}"));
            }
            seen_logs = logs.len();
        }

        trace
    }

    let left = run_trace(12345);
    let right = run_trace(12345);
    assert!(!left.is_empty());
    assert_eq!(left, right, "same seed should produce the same log trace");
}
