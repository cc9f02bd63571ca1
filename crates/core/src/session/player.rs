use crate::types::*;

use super::{Session, movement};

/// Guard table for the player's turn lifecycle. Requests outside the
/// table are ignored without effect rather than panicking.
#[derive(Clone, Debug)]
pub(crate) struct TurnMachine {
    state: TurnState,
}

impl TurnMachine {
    /// Sessions and fresh levels open with the player holding the turn.
    pub(crate) fn new() -> TurnMachine {
        TurnMachine { state: TurnState::HasNextTurn }
    }

    pub(crate) fn state(&self) -> TurnState {
        self.state
    }

    /// Request a transition; returns whether it took effect. `FoundExit`
    /// additionally requires the level to be clear of live enemies, and
    /// once entered nothing leads back out.
    pub(crate) fn try_transition(&mut self, next: TurnState, live_enemies: usize) -> bool {
        use TurnState::*;
        let legal = match (self.state, next) {
            (WaitingForTurn, HasNextTurn) => true,
            (HasNextTurn, TurnInProgress) => true,
            (TurnInProgress, WaitingForTurn) => true,
            (WaitingForTurn | HasNextTurn | TurnInProgress, FoundExit) => live_enemies == 0,
            _ => false,
        };
        if legal {
            self.state = next;
        }
        legal
    }

    /// Level-boundary reinitialization. The guard table only governs
    /// in-level flow; crossing into a new level starts the cycle over.
    pub(crate) fn reset_for_level(&mut self) {
        self.state = TurnState::HasNextTurn;
    }
}

impl Session {
    /// Resolve one player step. Bump attacks consume the turn exactly
    /// like a committed move; after the exit latches, further calls are
    /// complete no-ops.
    pub(crate) fn player_move(&mut self, direction: Direction) {
        if self.turn.state() == TurnState::FoundExit {
            return;
        }
        let live = self.state.live_enemy_count();
        self.turn.try_transition(TurnState::TurnInProgress, live);

        let player_id = self.state.player_id;
        let attack = self.state.actors[player_id].attack;
        let outcome = movement::attempt_move(&mut self.state, player_id, direction.delta());
        match outcome.obstacle() {
            Some(Obstacle::Wall(wall_id)) => self.damage_wall(wall_id, attack),
            Some(Obstacle::Enemy(enemy_id)) => self.damage_actor(enemy_id, attack),
            Some(Obstacle::Boundary | Obstacle::Player) => {}
            None => self.after_player_step(),
        }

        let live = self.state.live_enemy_count();
        self.turn.try_transition(TurnState::WaitingForTurn, live);
    }

    /// Pickups and the exit latch, applied to the cell the step landed
    /// on. The latch is refused while enemies live; the player can step
    /// off and come back.
    fn after_player_step(&mut self) {
        let pos = self.state.player().pos;
        if let Some(item_id) = self.state.food_at(pos)
            && let Some(food) = self.state.food.remove(item_id)
        {
            self.log.push(LogEvent::FoodConsumed { item: item_id, regen: food.regen });
            self.regen_player(food.regen);
        }
        if pos == self.state.board.exit {
            let live = self.state.live_enemy_count();
            if self.turn.try_transition(TurnState::FoundExit, live) {
                self.log.push(LogEvent::ReachedExit { level: self.level });
            }
        }
    }
}
