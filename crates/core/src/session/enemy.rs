//! Enemy decisions. Hard enemies wander; easy enemies idle until the
//! player first comes within range, then track for the rest of the level.

use rand_chacha::rand_core::Rng;

use crate::types::*;

use super::{Session, movement};

/// Candidate ladder toward `target`: primary axis, the other axis, then
/// their reverses. `|dx| > |dy|` picks the horizontal axis; ties fall to
/// vertical. A zero gap on an axis degrades to Down or Right.
pub(crate) fn chase_directions(from: Pos, target: Pos) -> [Direction; 4] {
    let dy = target.y - from.y;
    let dx = target.x - from.x;
    let horizontal = if dx >= 0 { Direction::Right } else { Direction::Left };
    let vertical = if dy >= 0 { Direction::Down } else { Direction::Up };
    let (primary, alternative) =
        if dx.abs() > dy.abs() { (horizontal, vertical) } else { (vertical, horizontal) };
    [primary, alternative, primary.opposite(), alternative.opposite()]
}

impl Session {
    /// One enemy decision, at most. Dead or stale handles fall through
    /// silently.
    pub(crate) fn enemy_act(&mut self, enemy_id: EntityId) {
        let Some(actor) = self.state.actors.get(enemy_id) else { return };
        match actor.kind {
            ActorKind::Enemy(EnemyKind::Hard) => self.wander(enemy_id),
            ActorKind::Enemy(EnemyKind::Easy) => self.detect_and_chase(enemy_id),
            ActorKind::Player => {}
        }
    }

    fn detect_and_chase(&mut self, enemy_id: EntityId) {
        let player_pos = self.state.player().pos;
        let actor = &self.state.actors[enemy_id];
        if actor.ai != Some(EnemyAiState::Tracking) {
            if chebyshev(actor.pos, player_pos) > self.config.detection_radius {
                // Still waiting; no move this turn.
                return;
            }
            self.state.actors[enemy_id].ai = Some(EnemyAiState::Tracking);
            self.log.push(LogEvent::EnemyEngaged { enemy: enemy_id });
        }
        self.chase(enemy_id, player_pos);
    }

    /// Random-direction draw without replacement: at most four probes,
    /// never a spin. Running into the player converts the move into a
    /// standing attack; every other obstacle burns the candidate.
    fn wander(&mut self, enemy_id: EntityId) {
        let mut candidates = Direction::ALL.to_vec();
        while !candidates.is_empty() {
            let index = self.rng.next_u64() as usize % candidates.len();
            let direction = candidates.swap_remove(index);
            if self.try_step(enemy_id, direction, true) {
                return;
            }
        }
        // All four neighbors blocked by non-player obstacles: forfeit.
    }

    /// Greedy pursuit down the fixed ladder, committing to the first step
    /// that works. The reverse directions only relieve a box-in; they
    /// never attack.
    fn chase(&mut self, enemy_id: EntityId, target: Pos) {
        let from = self.state.actors[enemy_id].pos;
        let [primary, alternative, rev_primary, rev_alternative] = chase_directions(from, target);
        for direction in [primary, alternative] {
            if self.try_step(enemy_id, direction, true) {
                return;
            }
        }
        for direction in [rev_primary, rev_alternative] {
            if self.try_step(enemy_id, direction, false) {
                return;
            }
        }
        // Trapped: no move and no damage dealt.
    }

    /// Returns whether the turn was consumed. A clear cell commits the
    /// move; the player soaks a hit instead when `attack_player` is set.
    fn try_step(&mut self, enemy_id: EntityId, direction: Direction, attack_player: bool) -> bool {
        let outcome = movement::attempt_move(&mut self.state, enemy_id, direction.delta());
        match outcome.obstacle() {
            None => true,
            Some(Obstacle::Player) if attack_player => {
                let attack = self.state.actors[enemy_id].attack;
                let player_id = self.state.player_id;
                self.damage_actor(player_id, attack);
                true
            }
            Some(_) => false,
        }
    }
}
