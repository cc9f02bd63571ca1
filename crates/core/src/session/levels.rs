use crate::levelgen::generate_level;
use crate::state::{Actor, Food, Wall};
use crate::types::*;

use super::Session;

impl Session {
    /// Tears down everything except the player and populates the arena for
    /// `self.level`. The player is moved back to the entry corner with
    /// whatever health it carried in.
    pub(crate) fn install_level(&mut self) {
        self.state.walls.clear();
        self.state.food.clear();
        let player_id = self.state.player_id;
        self.state.actors.retain(|id, _| id == player_id);

        let layout = generate_level(&mut self.rng, &self.config, self.level);
        for pos in layout.walls {
            let id = self.state.walls.insert(Wall {
                id: WallId::default(),
                pos,
                hp: self.config.wall_hit_points,
            });
            self.state.walls[id].id = id;
        }
        for pos in layout.food {
            let id = self.state.food.insert(Food {
                id: ItemId::default(),
                pos,
                regen: self.config.food_regen,
            });
            self.state.food[id].id = id;
        }
        for (kind, pos) in layout.enemies {
            let stats = self.config.enemy_stats(kind);
            let ai = match kind {
                EnemyKind::Easy => Some(EnemyAiState::Waiting),
                EnemyKind::Hard => None,
            };
            let id = self.state.actors.insert(Actor {
                id: EntityId::default(),
                kind: ActorKind::Enemy(kind),
                pos,
                hp: stats.hit_points,
                attack: stats.attack,
                ai,
            });
            self.state.actors[id].id = id;
        }

        self.state.actors[player_id].pos = self.state.board.entry;
        self.turn.reset_for_level();
        self.pending_intent = None;
        self.log.push(LogEvent::LevelStarted { level: self.level });
    }
}
