use crate::state::LevelState;
use crate::types::{ActorKind, CollisionOutcome, Delta, EntityId, Obstacle, Pos};

/// Single-cell occupancy probe. Read-only: reports at most one blocker,
/// scanning boundary, then walls, then occupants. The probing entity's
/// own footprint never blocks, so a zero-delta probe always comes back
/// clear. Food and the exit cell do not block.
pub fn probe_step(
    state: &LevelState,
    mover: EntityId,
    origin: Pos,
    delta: Delta,
) -> CollisionOutcome {
    let target = origin.offset(delta);
    if !state.board.in_bounds(target) {
        return CollisionOutcome::blocked(Obstacle::Boundary);
    }
    if let Some(wall_id) = state.wall_at(target) {
        return CollisionOutcome::blocked(Obstacle::Wall(wall_id));
    }
    for (id, actor) in state.actors.iter() {
        if id != mover && actor.pos == target {
            let obstacle = match actor.kind {
                ActorKind::Player => Obstacle::Player,
                ActorKind::Enemy(_) => Obstacle::Enemy(id),
            };
            return CollisionOutcome::blocked(obstacle);
        }
    }
    CollisionOutcome::clear()
}
