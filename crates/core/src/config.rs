//! Session tunables. The whole ruleset travels as plain constructor
//! data, so a session cannot exist half-configured.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::EnemyKind;

/// Inclusive count range for random placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: usize,
    pub max: usize,
}

impl SpawnRange {
    pub fn new(min: usize, max: usize) -> SpawnRange {
        SpawnRange { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub hit_points: i32,
    pub attack: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_rows: usize,
    pub board_cols: usize,
    pub wall_count: SpawnRange,
    pub food_count: SpawnRange,
    pub player: CharacterStats,
    pub easy_enemy: CharacterStats,
    pub hard_enemy: CharacterStats,
    pub wall_hit_points: i32,
    pub food_regen: i32,
    /// Chebyshev distance at which a waiting easy enemy latches on.
    pub detection_radius: u32,
    /// Idle ticks inserted after each acting enemy during a sweep.
    pub enemy_pacing_ticks: u32,
    /// Clearing this level wins the run. `None` descends forever.
    pub final_level: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            board_rows: 8,
            board_cols: 8,
            wall_count: SpawnRange::new(5, 9),
            food_count: SpawnRange::new(1, 5),
            player: CharacterStats { hit_points: 5, attack: 1 },
            easy_enemy: CharacterStats { hit_points: 4, attack: 1 },
            hard_enemy: CharacterStats { hit_points: 3, attack: 2 },
            wall_hit_points: 2,
            food_regen: 1,
            detection_radius: 2,
            enemy_pacing_ticks: 2,
            final_level: None,
        }
    }
}

impl GameConfig {
    pub fn enemy_stats(&self, kind: EnemyKind) -> CharacterStats {
        match kind {
            EnemyKind::Easy => self.easy_enemy,
            EnemyKind::Hard => self.hard_enemy,
        }
    }

    /// Ruleset fingerprint stamped into journals. Replaying a journal
    /// against a different config must fail loudly, not diverge quietly.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Sha256::new();
        for value in [
            self.board_rows as u64,
            self.board_cols as u64,
            self.wall_count.min as u64,
            self.wall_count.max as u64,
            self.food_count.min as u64,
            self.food_count.max as u64,
        ] {
            hasher.update(value.to_be_bytes());
        }
        for stats in [self.player, self.easy_enemy, self.hard_enemy] {
            hasher.update(stats.hit_points.to_be_bytes());
            hasher.update(stats.attack.to_be_bytes());
        }
        hasher.update(self.wall_hit_points.to_be_bytes());
        hasher.update(self.food_regen.to_be_bytes());
        hasher.update(self.detection_radius.to_be_bytes());
        hasher.update(self.enemy_pacing_ticks.to_be_bytes());
        match self.final_level {
            None => hasher.update(0_u64.to_be_bytes()),
            Some(level) => {
                hasher.update(1_u64.to_be_bytes());
                hasher.update(u64::from(level).to_be_bytes());
            }
        }
        let digest = hasher.finalize();
        u64::from_be_bytes(digest[..8].try_into().unwrap_or([0; 8]))
    }
}
