use core::{
    AdvanceStopReason, CharacterStats, Direction, GameConfig, GameError, LogEvent, RunOutcome,
    Session, SpawnRange,
};

/// Drive a run to the given final level with harmless enemies, walking
/// the rim and bumping through blockers. Returns the finished session.
fn greedy_run(seed: u64, final_level: u32) -> Session {
    let config = GameConfig {
        easy_enemy: CharacterStats { hit_points: 4, attack: 0 },
        hard_enemy: CharacterStats { hit_points: 3, attack: 0 },
        final_level: Some(final_level),
        ..GameConfig::default()
    };
    let mut session = Session::new(seed, config);

    // 512 exchanges is far more than three rim walks plus bumps need.
    for _ in 0..512 {
        let result = session.advance(100);
        match result.stop_reason {
            AdvanceStopReason::Finished(_) => break,
            AdvanceStopReason::AwaitingInput => {
                let player = session.state().player().pos;
                let exit = session.state().board.exit;
                let direction = if player.x < exit.x { Direction::Right } else { Direction::Down };
                session.submit_move(direction).unwrap();
            }
            AdvanceStopReason::LevelComplete { .. } => session.reset_level().unwrap(),
            AdvanceStopReason::BudgetExhausted => {}
        }
    }
    session
}

#[test]
fn a_greedy_run_clears_three_levels() {
    let session = greedy_run(12345, 3);
    assert_eq!(session.outcome(), Some(RunOutcome::Victory));
    assert_eq!(session.level(), 3);
    assert!(session.snapshot_hash() != 0);
    assert!(session.log().contains(&LogEvent::ReachedExit { level: 3 }));
}

#[test]
fn two_greedy_runs_agree_move_for_move() {
    let left = greedy_run(999, 3);
    let right = greedy_run(999, 3);
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!(left.current_tick(), right.current_tick());
    assert_eq!(left.log(), right.log());
}

#[test]
fn greedy_runs_on_different_seeds_diverge() {
    let left = greedy_run(12345, 3);
    let right = greedy_run(54321, 3);
    assert_ne!(left.snapshot_hash(), right.snapshot_hash());
}

#[test]
fn endless_mode_keeps_handing_out_levels() {
    let config = GameConfig {
        wall_count: SpawnRange::new(0, 0),
        food_count: SpawnRange::new(0, 0),
        ..GameConfig::default()
    };
    let mut session = Session::new(8, config);

    for _ in 0..7 {
        session.submit_move(Direction::Right).unwrap();
        session.advance(64);
    }
    for _ in 0..7 {
        session.submit_move(Direction::Down).unwrap();
        session.advance(64);
    }
    assert_eq!(session.advance(0).stop_reason, AdvanceStopReason::LevelComplete { level: 1 });

    session.reset_level().unwrap();
    assert_eq!(session.level(), 2);
    assert_eq!(session.live_enemy_count(), 1);
    assert_eq!(session.state().player().pos, session.state().board.entry);
    assert!(session.log().contains(&LogEvent::LevelStarted { level: 2 }));
    assert_eq!(session.outcome(), None);
}

/// A player who refuses to move off the entry gets run down on any level
/// whose enemy can track. Enemy kinds are drawn per level, so a handful
/// of seeds is enough to see it happen.
#[test]
fn hostile_levels_maul_a_motionless_player() {
    let mut defeats = 0usize;

    for seed in 0..24 {
        let config = GameConfig {
            wall_count: SpawnRange::new(0, 0),
            food_count: SpawnRange::new(0, 0),
            easy_enemy: CharacterStats { hit_points: 4, attack: 9 },
            hard_enemy: CharacterStats { hit_points: 3, attack: 9 },
            detection_radius: 7,
            ..GameConfig::default()
        };
        let mut session = Session::new(seed, config);

        for _ in 0..7 {
            session.submit_move(Direction::Right).unwrap();
            session.advance(64);
        }
        for _ in 0..7 {
            session.submit_move(Direction::Down).unwrap();
            session.advance(64);
        }
        session.reset_level().unwrap();

        // Bump the boundary until the level-2 enemy settles it or 200
        // exchanges pass (a wanderer may never arrive).
        for _ in 0..200 {
            if session.submit_move(Direction::Up).is_err() {
                break;
            }
            let result = session.advance(64);
            if result.stop_reason == AdvanceStopReason::Finished(RunOutcome::Defeat) {
                break;
            }
        }

        if session.outcome() == Some(RunOutcome::Defeat) {
            defeats += 1;
            assert_eq!(session.log().last(), Some(&LogEvent::PlayerDied));
            assert_eq!(session.submit_move(Direction::Up), Err(GameError::SessionFinished));
            assert_eq!(
                session.advance(64).stop_reason,
                AdvanceStopReason::Finished(RunOutcome::Defeat)
            );
        }
    }

    assert!(defeats > 0, "no tracking enemy showed up across 24 seeds");
}
