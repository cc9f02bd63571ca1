//! Fixture helpers for the session test modules. Scenarios that need a
//! hand-placed arena build on `empty_session` and the `place_*` helpers
//! instead of fishing for a seed that generates the right layout.

use crate::config::{GameConfig, SpawnRange};
use crate::state::{Actor, Food, LevelState, Wall};
use crate::types::*;

use super::Session;

impl Session {
    pub(crate) fn state_mut(&mut self) -> &mut LevelState {
        &mut self.state
    }
}

fn barren_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.wall_count = SpawnRange::new(0, 0);
    config.food_count = SpawnRange::new(0, 0);
    config
}

/// Default 8x8 board with nothing on it but the player at the entry.
pub(crate) fn empty_session(seed: u64) -> Session {
    Session::new(seed, barren_config())
}

pub(crate) fn empty_session_with_pacing(seed: u64, pacing: u32) -> Session {
    let mut config = barren_config();
    config.enemy_pacing_ticks = pacing;
    Session::new(seed, config)
}

pub(crate) fn final_level_session(seed: u64, final_level: u32) -> Session {
    let mut config = barren_config();
    config.final_level = Some(final_level);
    Session::new(seed, config)
}

pub(crate) fn place_wall(session: &mut Session, pos: Pos) -> WallId {
    let hp = session.config.wall_hit_points;
    let id = session.state.walls.insert(Wall { id: WallId::default(), pos, hp });
    session.state.walls[id].id = id;
    id
}

pub(crate) fn place_food(session: &mut Session, pos: Pos) -> ItemId {
    let regen = session.config.food_regen;
    let id = session.state.food.insert(Food { id: ItemId::default(), pos, regen });
    session.state.food[id].id = id;
    id
}

pub(crate) fn place_enemy(session: &mut Session, kind: EnemyKind, pos: Pos) -> EntityId {
    let stats = session.config.enemy_stats(kind);
    let ai = match kind {
        EnemyKind::Easy => Some(EnemyAiState::Waiting),
        EnemyKind::Hard => None,
    };
    let id = session.state.actors.insert(Actor {
        id: EntityId::default(),
        kind: ActorKind::Enemy(kind),
        pos,
        hp: stats.hit_points,
        attack: stats.attack,
        ai,
    });
    session.state.actors[id].id = id;
    id
}

/// Flip an easy enemy straight to tracking, as if it had detected the
/// player earlier, without the engagement showing up in the log.
pub(crate) fn engage_enemy(session: &mut Session, enemy: EntityId) {
    session.state.actors[enemy].ai = Some(EnemyAiState::Tracking);
}

pub(crate) fn set_player_pos(session: &mut Session, pos: Pos) {
    let player_id = session.state.player_id;
    session.state.actors[player_id].pos = pos;
}

pub(crate) fn set_player_hp(session: &mut Session, hp: i32) {
    let player_id = session.state.player_id;
    session.state.actors[player_id].hp = hp;
}

/// One full exchange: queue the move, then run until the next stop.
pub(crate) fn play_move(session: &mut Session, direction: Direction) -> AdvanceResult {
    session.submit_move(direction).unwrap();
    session.advance(64)
}
