//! Per-level layout. Everything is drawn from the session RNG stream in a
//! fixed order (walls, food, enemies) so a replay repopulates an
//! identical level.

use rand_chacha::{ChaCha8Rng, rand_core::Rng};

use crate::config::{GameConfig, SpawnRange};
use crate::types::{EnemyKind, Pos};

#[derive(Clone, Debug)]
pub struct GeneratedLevel {
    pub walls: Vec<Pos>,
    pub food: Vec<Pos>,
    pub enemies: Vec<(EnemyKind, Pos)>,
}

/// Enemies per level: none on level 1, one more per doubling.
pub fn enemy_count(level: u32) -> usize {
    debug_assert!(level >= 1);
    level.ilog2() as usize
}

fn roll_count(rng: &mut ChaCha8Rng, range: SpawnRange) -> usize {
    let span = range.max.max(range.min) - range.min + 1;
    range.min + rng.next_u64() as usize % span
}

/// Cells eligible for random placement, row-major. The outer playable
/// ring stays clear, which keeps a rim path to the exit open on every
/// layout.
fn placement_candidates(rows: usize, cols: usize) -> Vec<Pos> {
    let mut cells = Vec::new();
    for y in 1..rows as i32 - 1 {
        for x in 1..cols as i32 - 1 {
            cells.push(Pos { y, x });
        }
    }
    cells
}

fn draw_cell(rng: &mut ChaCha8Rng, candidates: &mut Vec<Pos>) -> Option<Pos> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.next_u64() as usize % candidates.len();
    Some(candidates.swap_remove(index))
}

pub fn generate_level(rng: &mut ChaCha8Rng, config: &GameConfig, level: u32) -> GeneratedLevel {
    let mut candidates = placement_candidates(config.board_rows, config.board_cols);
    let mut layout =
        GeneratedLevel { walls: Vec::new(), food: Vec::new(), enemies: Vec::new() };

    for _ in 0..roll_count(rng, config.wall_count) {
        let Some(cell) = draw_cell(rng, &mut candidates) else { break };
        layout.walls.push(cell);
    }
    for _ in 0..roll_count(rng, config.food_count) {
        let Some(cell) = draw_cell(rng, &mut candidates) else { break };
        layout.food.push(cell);
    }
    for _ in 0..enemy_count(level) {
        let Some(cell) = draw_cell(rng, &mut candidates) else { break };
        let kind = if rng.next_u64() % 2 == 0 { EnemyKind::Easy } else { EnemyKind::Hard };
        layout.enemies.push((kind, cell));
    }
    layout
}
