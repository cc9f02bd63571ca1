use crate::types::*;

use super::Session;

impl Session {
    /// Hit-point decrement with death handling. Zero and negative amounts
    /// are ignored, as are targets that are already down.
    pub(crate) fn damage_actor(&mut self, target: EntityId, amount: i32) {
        let Some(actor) = self.state.actors.get_mut(target) else { return };
        if amount <= 0 || actor.hp <= 0 {
            return;
        }
        actor.hp -= amount;
        let hp = actor.hp;
        let is_player = actor.kind == ActorKind::Player;
        if is_player {
            self.log.push(LogEvent::PlayerHealthChanged { health: hp.max(0) });
        }
        if hp <= 0 {
            if is_player {
                // The body stays in the arena; `finished` stops the world
                // before anyone could care.
                self.log.push(LogEvent::PlayerDied);
                self.finished = Some(RunOutcome::Defeat);
            } else {
                self.log.push(LogEvent::EnemyDied { enemy: target });
                self.state.actors.remove(target);
            }
        }
    }

    pub(crate) fn damage_wall(&mut self, wall_id: WallId, amount: i32) {
        let Some(wall) = self.state.walls.get_mut(wall_id) else { return };
        if amount <= 0 || wall.hp <= 0 {
            return;
        }
        wall.hp -= amount;
        if wall.hp <= 0 {
            self.log.push(LogEvent::WallDestroyed { wall: wall_id });
            self.state.walls.remove(wall_id);
        }
    }

    /// Food heal. There is no cap; the event carries the new total.
    pub(crate) fn regen_player(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        let player_id = self.state.player_id;
        let Some(player) = self.state.actors.get_mut(player_id) else { return };
        if player.hp <= 0 {
            return;
        }
        player.hp += amount;
        let health = player.hp;
        self.log.push(LogEvent::PlayerHealthChanged { health });
    }
}
