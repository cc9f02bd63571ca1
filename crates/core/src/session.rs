//! Session root: one explicitly constructed run of the dungeon. Owns the
//! RNG stream, the level arenas, the player turn machine, and the event
//! log. `advance` in `scheduler` is the only thing that moves time.

use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::state::{Actor, Board, LevelState};
use crate::types::*;

mod combat;
mod enemy;
mod hash;
mod levels;
mod movement;
mod player;
mod probe;
mod scheduler;
#[cfg(test)]
pub(crate) mod test_support;

pub use probe::probe_step;

use player::TurnMachine;

/// Where the scheduler is inside the player/enemy cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    PlayerTurn,
    EnemySweep { queue: Vec<EntityId>, cursor: usize, cooldown: u32 },
    AwaitingReset,
}

pub struct Session {
    seed: u64,
    config: GameConfig,
    rng: ChaCha8Rng,
    tick: u64,
    level: u32,
    state: LevelState,
    turn: TurnMachine,
    phase: Phase,
    pending_intent: Option<Direction>,
    next_input_seq: u64,
    log: Vec<LogEvent>,
    finished: Option<RunOutcome>,
}

impl Session {
    pub fn new(seed: u64, config: GameConfig) -> Session {
        debug_assert!(config.board_rows >= 2 && config.board_cols >= 2);
        let board = Board::new(config.board_rows, config.board_cols);
        let mut actors = SlotMap::with_key();
        let player_id = actors.insert(Actor {
            id: EntityId::default(),
            kind: ActorKind::Player,
            pos: board.entry,
            hp: config.player.hit_points,
            attack: config.player.attack,
            ai: None,
        });
        actors[player_id].id = player_id;

        let state = LevelState {
            board,
            actors,
            walls: SlotMap::with_key(),
            food: SlotMap::with_key(),
            player_id,
        };
        let mut session = Session {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            tick: 0,
            level: 1,
            state,
            turn: TurnMachine::new(),
            phase: Phase::PlayerTurn,
            pending_intent: None,
            next_input_seq: 0,
            log: Vec::new(),
            finished: None,
        };
        session.install_level();
        session
    }

    /// Queue the player's next step. Legal only while the simulation is
    /// stopped waiting for input; one intent per turn.
    pub fn submit_move(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.finished.is_some() {
            return Err(GameError::SessionFinished);
        }
        if !matches!(self.phase, Phase::PlayerTurn) || self.pending_intent.is_some() {
            return Err(GameError::NotPlayersTurn);
        }
        self.pending_intent = Some(direction);
        self.next_input_seq += 1;
        Ok(())
    }

    /// Move on to the next level after the exit latched. The old layout
    /// is torn down wholesale; only the player and their current health
    /// carry over.
    pub fn reset_level(&mut self) -> Result<(), GameError> {
        if self.finished.is_some() {
            return Err(GameError::SessionFinished);
        }
        if !matches!(self.phase, Phase::AwaitingReset) {
            return Err(GameError::LevelNotComplete);
        }
        self.level += 1;
        self.install_level();
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Consume the session and report how it ended. Every entity dies
    /// with it; a fresh `Session::new` is the only way back in.
    pub fn end_session(self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            level: self.level,
            tick: self.tick,
            outcome: self.finished,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn live_enemy_count(&self) -> usize {
        self.state.live_enemy_count()
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn submit_is_rejected_outside_the_input_stop() {
        let mut session = empty_session(3);
        session.submit_move(Direction::Right).unwrap();
        assert_eq!(session.submit_move(Direction::Right), Err(GameError::NotPlayersTurn));
    }

    #[test]
    fn reset_is_rejected_mid_level() {
        let mut session = empty_session(3);
        assert_eq!(session.reset_level(), Err(GameError::LevelNotComplete));
    }

    #[test]
    fn finished_session_rejects_everything() {
        let mut session = empty_session(9);
        let enemy = place_enemy(&mut session, EnemyKind::Easy, Pos { y: 0, x: 1 });
        engage_enemy(&mut session, enemy);
        set_player_hp(&mut session, 1);

        // Boundary bump keeps the player at (0,0); the tracking enemy's
        // primary step lands on them and the hit is lethal.
        let result = play_move(&mut session, Direction::Up);
        assert_eq!(result.stop_reason, AdvanceStopReason::Finished(RunOutcome::Defeat));
        assert_eq!(session.submit_move(Direction::Up), Err(GameError::SessionFinished));
        assert_eq!(session.reset_level(), Err(GameError::SessionFinished));
    }

    #[test]
    fn end_session_reports_the_run() {
        let session = empty_session(77);
        let summary = session.end_session();
        assert_eq!(summary.seed, 77);
        assert_eq!(summary.level, 1);
        assert_eq!(summary.outcome, None);
    }

    #[test]
    fn new_session_opens_with_the_player_holding_the_turn() {
        let session = empty_session(5);
        assert_eq!(session.turn_state(), TurnState::HasNextTurn);
        assert_eq!(session.state().player().pos, Pos { y: 0, x: 0 });
        assert_eq!(session.log(), &[LogEvent::LevelStarted { level: 1 }]);
    }
}
