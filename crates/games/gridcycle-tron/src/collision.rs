use std::collections::HashSet;

use gridcycle_core::grid::{Board, Position};

use super::CycleState;

/// What a cycle ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Left the board.
    Wall,
    /// Entered a cell on any trail.
    Trail,
    Obstacle,
    /// Both cycles entered the same cell on the same tick.
    HeadOn,
}

/// Union of every trail cell of every cycle.
///
/// Rebuilt from scratch each tick; never maintained incrementally.
pub fn occupied_cells<'a>(cycles: impl IntoIterator<Item = &'a CycleState>) -> HashSet<Position> {
    cycles
        .into_iter()
        .flat_map(|c| c.trail.iter().copied())
        .collect()
}

/// Classify why `position` is illegal, checking walls, then trails, then obstacles.
pub fn crash_cause(
    position: Position,
    board: &Board,
    occupied: &HashSet<Position>,
    obstacles: &[Position],
) -> Option<CrashCause> {
    if !board.contains(position) {
        Some(CrashCause::Wall)
    } else if occupied.contains(&position) {
        Some(CrashCause::Trail)
    } else if obstacles.contains(&position) {
        Some(CrashCause::Obstacle)
    } else {
        None
    }
}

/// Whether `position` is out of bounds or occupied by a trail or obstacle.
pub fn is_colliding(
    position: Position,
    board: &Board,
    occupied: &HashSet<Position>,
    obstacles: &[Position],
) -> bool {
    crash_cause(position, board, occupied, obstacles).is_some()
}

/// Both cycles sit in the identical cell.
pub fn is_head_on(a: &CycleState, b: &CycleState) -> bool {
    a.position == b.position
}
