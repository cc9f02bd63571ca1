//! Turn scheduling. One player action, then one sweep granting every
//! live enemy a single decision with pacing ticks between them, forever
//! alternating until death or the exit.

use crate::types::*;

use super::{Phase, Session};

enum SweepStep {
    Pace,
    Act(EntityId),
    HandBack,
}

impl Session {
    /// Run up to `max_steps` simulation ticks. Returns early at the
    /// stopped states: waiting for input, a completed level, or the end
    /// of the run. Stopped states report themselves even on a zero
    /// budget.
    pub fn advance(&mut self, max_steps: u32) -> AdvanceResult {
        let mut steps = 0_u32;
        loop {
            if let Some(outcome) = self.finished {
                return halt(steps, AdvanceStopReason::Finished(outcome));
            }
            match &self.phase {
                Phase::AwaitingReset => {
                    return halt(steps, AdvanceStopReason::LevelComplete { level: self.level });
                }
                Phase::PlayerTurn if self.pending_intent.is_none() => {
                    return halt(steps, AdvanceStopReason::AwaitingInput);
                }
                _ => {}
            }
            if steps >= max_steps {
                return halt(steps, AdvanceStopReason::BudgetExhausted);
            }

            match &self.phase {
                Phase::PlayerTurn => {
                    debug_assert_eq!(self.turn.state(), TurnState::HasNextTurn);
                    if let Some(direction) = self.pending_intent.take() {
                        self.player_move(direction);
                        self.tick += 1;
                        steps += 1;
                        self.after_player_phase();
                    }
                }
                Phase::EnemySweep { .. } => match self.sweep_step() {
                    SweepStep::Pace => {
                        self.tick += 1;
                        steps += 1;
                    }
                    SweepStep::Act(enemy_id) => {
                        self.enemy_act(enemy_id);
                        self.tick += 1;
                        steps += 1;
                    }
                    SweepStep::HandBack => self.hand_back_turn(),
                },
                Phase::AwaitingReset => {}
            }
        }
    }

    /// Route the aftermath of the player's action: the exit latch ends
    /// the level (or the run, on the final one), a spent turn starts the
    /// enemy sweep.
    fn after_player_phase(&mut self) {
        match self.turn.state() {
            TurnState::FoundExit => {
                if self.config.final_level == Some(self.level) {
                    self.finished = Some(RunOutcome::Victory);
                } else {
                    self.phase = Phase::AwaitingReset;
                }
            }
            TurnState::WaitingForTurn => self.phase = self.begin_sweep(),
            _ => {}
        }
    }

    /// Snapshot the live enemies in arena order. Enemies dying after the
    /// snapshot are skipped at their slot; nothing joins mid-sweep. An
    /// empty sweep still burns the pacing ticks before handing back.
    fn begin_sweep(&self) -> Phase {
        let queue = self.state.enemy_ids();
        let cooldown = if queue.is_empty() { self.config.enemy_pacing_ticks } else { 0 };
        Phase::EnemySweep { queue, cursor: 0, cooldown }
    }

    /// One scheduling decision inside the sweep: burn a pacing tick,
    /// pick the next living enemy, or hand the turn back.
    fn sweep_step(&mut self) -> SweepStep {
        let Phase::EnemySweep { queue, cursor, cooldown } = &mut self.phase else {
            return SweepStep::HandBack;
        };
        if *cooldown > 0 {
            *cooldown -= 1;
            return SweepStep::Pace;
        }
        while *cursor < queue.len() {
            let enemy_id = queue[*cursor];
            *cursor += 1;
            if self.state.actors.contains_key(enemy_id) {
                *cooldown = self.config.enemy_pacing_ticks;
                return SweepStep::Act(enemy_id);
            }
        }
        SweepStep::HandBack
    }

    fn hand_back_turn(&mut self) {
        let live = self.state.live_enemy_count();
        self.turn.try_transition(TurnState::HasNextTurn, live);
        self.phase = Phase::PlayerTurn;
    }
}

fn halt(steps: u32, stop_reason: AdvanceStopReason) -> AdvanceResult {
    AdvanceResult { simulated_ticks: steps, stop_reason }
}
