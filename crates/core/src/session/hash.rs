use xxhash_rust::xxh3::Xxh3;

use crate::types::*;

use super::{Phase, Session};

fn write_u64(hasher: &mut Xxh3, value: u64) {
    hasher.update(&value.to_le_bytes());
}

fn write_i32(hasher: &mut Xxh3, value: i32) {
    hasher.update(&value.to_le_bytes());
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    write_i32(hasher, pos.y);
    write_i32(hasher, pos.x);
}

impl Session {
    /// Order-stable digest of everything replay-relevant. Two sessions
    /// reporting the same hash at the same stop are interchangeable.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        write_u64(&mut hasher, self.seed);
        write_u64(&mut hasher, self.tick);
        write_u64(&mut hasher, self.next_input_seq);
        write_u64(&mut hasher, u64::from(self.level));

        match &self.phase {
            Phase::PlayerTurn => write_u64(&mut hasher, 0),
            Phase::EnemySweep { queue, cursor, cooldown } => {
                write_u64(&mut hasher, 1);
                write_u64(&mut hasher, queue.len() as u64);
                write_u64(&mut hasher, *cursor as u64);
                write_u64(&mut hasher, u64::from(*cooldown));
            }
            Phase::AwaitingReset => write_u64(&mut hasher, 2),
        }
        let turn_tag = match self.turn.state() {
            TurnState::WaitingForTurn => 0,
            TurnState::HasNextTurn => 1,
            TurnState::TurnInProgress => 2,
            TurnState::FoundExit => 3,
        };
        write_u64(&mut hasher, turn_tag);
        let outcome_tag = match self.finished {
            None => 0,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat) => 2,
        };
        write_u64(&mut hasher, outcome_tag);

        for (_, actor) in self.state.actors.iter() {
            let kind_tag = match actor.kind {
                ActorKind::Player => 0,
                ActorKind::Enemy(EnemyKind::Easy) => 1,
                ActorKind::Enemy(EnemyKind::Hard) => 2,
            };
            write_u64(&mut hasher, kind_tag);
            write_pos(&mut hasher, actor.pos);
            write_i32(&mut hasher, actor.hp);
            write_i32(&mut hasher, actor.attack);
            let ai_tag = match actor.ai {
                None => 0,
                Some(EnemyAiState::Waiting) => 1,
                Some(EnemyAiState::Tracking) => 2,
            };
            write_u64(&mut hasher, ai_tag);
        }
        for (_, wall) in self.state.walls.iter() {
            write_pos(&mut hasher, wall.pos);
            write_i32(&mut hasher, wall.hp);
        }
        for (_, item) in self.state.food.iter() {
            write_pos(&mut hasher, item.pos);
            write_i32(&mut hasher, item.regen);
        }
        hasher.digest()
    }
}
