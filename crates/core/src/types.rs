use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct WallId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, delta: Delta) -> Pos {
        Pos { y: self.y + delta.dy, x: self.x + delta.dx }
    }
}

/// Single-cell displacement. Movement never composes these; one step per
/// action is a rule, not a convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delta {
    pub dy: i32,
    pub dx: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { dy: 0, dx: 0 };
}

pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    let dy = (a.y - b.y).unsigned_abs();
    let dx = (a.x - b.x).unsigned_abs();
    dy.max(dx)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed candidate order for exhaustive draws.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> Delta {
        match self {
            Direction::Up => Delta { dy: -1, dx: 0 },
            Direction::Down => Delta { dy: 1, dx: 0 },
            Direction::Left => Delta { dy: 0, dx: -1 },
            Direction::Right => Delta { dy: 0, dx: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Easy,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Enemy(EnemyKind),
}

impl ActorKind {
    pub fn is_enemy(self) -> bool {
        matches!(self, ActorKind::Enemy(_))
    }
}

/// Easy enemies idle until the player first comes within detection range,
/// then track for the rest of the level. The latch never releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAiState {
    Waiting,
    Tracking,
}

/// The closed set of things a single-cell probe can run into. The outer
/// boundary is positional, not an entity; everything else carries the
/// blocker's arena key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstacle {
    Boundary,
    Wall(WallId),
    Enemy(EntityId),
    Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionOutcome {
    obstacle: Option<Obstacle>,
}

impl CollisionOutcome {
    pub(crate) fn clear() -> CollisionOutcome {
        CollisionOutcome { obstacle: None }
    }

    pub(crate) fn blocked(obstacle: Obstacle) -> CollisionOutcome {
        CollisionOutcome { obstacle: Some(obstacle) }
    }

    pub fn occurred(&self) -> bool {
        self.obstacle.is_some()
    }

    pub fn obstacle(&self) -> Option<Obstacle> {
        self.obstacle
    }
}

/// Player turn lifecycle. All mutation goes through the turn machine's
/// guard table; requests outside it are ignored without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    WaitingForTurn,
    HasNextTurn,
    TurnInProgress,
    FoundExit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    LevelStarted { level: u32 },
    /// New absolute value after any effective heal or hit. The lethal hit
    /// still reports, with `health` at zero.
    PlayerHealthChanged { health: i32 },
    PlayerDied,
    EnemyEngaged { enemy: EntityId },
    EnemyDied { enemy: EntityId },
    WallDestroyed { wall: WallId },
    FoodConsumed { item: ItemId, regen: i32 },
    ReachedExit { level: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    /// The player holds the turn and no intent is queued.
    AwaitingInput,
    /// The exit latched; `reset_level` is the only legal next call.
    LevelComplete { level: u32 },
    Finished(RunOutcome),
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Intent submitted while the session was not stopped awaiting one.
    NotPlayersTurn,
    /// `reset_level` called anywhere but a `LevelComplete` stop.
    LevelNotComplete,
    /// The run already ended; start a new session instead.
    SessionFinished,
}

/// Terminal report produced when a session is torn down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub level: u32,
    pub tick: u64,
    pub outcome: Option<RunOutcome>,
}
