use crate::state::LevelState;
use crate::types::{CollisionOutcome, Delta, EntityId};

use super::probe;

/// Single-cell move with an atomic commit: a clear probe snaps the mover
/// to the target, any block leaves state untouched and hands the obstacle
/// back for the caller to interpret. Repeating a blocked attempt changes
/// nothing.
pub(crate) fn attempt_move(
    state: &mut LevelState,
    mover: EntityId,
    delta: Delta,
) -> CollisionOutcome {
    let origin = state.actors[mover].pos;
    let outcome = probe::probe_step(state, mover, origin, delta);
    if !outcome.occurred() {
        state.actors[mover].pos = origin.offset(delta);
    }
    outcome
}
