use slotmap::SlotMap;

use crate::types::*;

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Pos,
    pub hp: i32,
    pub attack: i32,
    /// `Some` exactly for easy enemies; the player and hard enemies carry
    /// no tracking state.
    pub ai: Option<EnemyAiState>,
}

#[derive(Clone, Debug)]
pub struct Wall {
    pub id: WallId,
    pub pos: Pos,
    pub hp: i32,
}

#[derive(Clone, Debug)]
pub struct Food {
    pub id: ItemId,
    pub pos: Pos,
    pub regen: i32,
}

/// Playable rectangle. Anything outside it is the indestructible
/// boundary; no boundary entities are materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    pub entry: Pos,
    pub exit: Pos,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            entry: Pos { y: 0, x: 0 },
            exit: Pos { y: rows as i32 - 1, x: cols as i32 - 1 },
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.y >= 0 && pos.x >= 0 && (pos.y as usize) < self.rows && (pos.x as usize) < self.cols
    }
}

#[derive(Clone, Debug)]
pub struct LevelState {
    pub board: Board,
    pub actors: SlotMap<EntityId, Actor>,
    pub walls: SlotMap<WallId, Wall>,
    pub food: SlotMap<ItemId, Food>,
    pub player_id: EntityId,
}

impl LevelState {
    pub fn player(&self) -> &Actor {
        &self.actors[self.player_id]
    }

    pub fn wall_at(&self, pos: Pos) -> Option<WallId> {
        self.walls.iter().find(|(_, wall)| wall.pos == pos).map(|(id, _)| id)
    }

    pub fn food_at(&self, pos: Pos) -> Option<ItemId> {
        self.food.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    pub fn actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors.iter().find(|(_, actor)| actor.pos == pos).map(|(id, _)| id)
    }

    /// Live enemies in arena order. Arena order is spawn order, which is
    /// what keeps sweep scheduling replay-stable.
    pub fn enemy_ids(&self) -> Vec<EntityId> {
        self.actors
            .iter()
            .filter(|(_, actor)| actor.kind.is_enemy())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn live_enemy_count(&self) -> usize {
        self.actors.values().filter(|actor| actor.kind.is_enemy()).count()
    }
}
