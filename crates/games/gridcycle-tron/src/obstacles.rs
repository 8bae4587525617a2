use rand::Rng;

use gridcycle_core::grid::{Board, Direction, Position};

/// Whether obstacles move on `tick` (1-based) given a step interval.
pub fn is_step_due(tick: u32, interval: u32) -> bool {
    interval > 0 && tick % interval == 0
}

/// One obstacle step: move one cell in `direction` unless that leaves the board.
pub fn step_obstacle(obstacle: Position, direction: Direction, board: &Board) -> Position {
    let next = obstacle.step(direction, board.cell_size);
    if board.contains(next) { next } else { obstacle }
}

/// Draw a uniformly random cardinal direction.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

/// Give every obstacle an independent random step, producing a new list.
///
/// Obstacles ignore trails and each other; overlapping is allowed.
pub fn step_obstacles<R: Rng + ?Sized>(
    obstacles: &[Position],
    board: &Board,
    rng: &mut R,
) -> Vec<Position> {
    obstacles
        .iter()
        .map(|&obstacle| step_obstacle(obstacle, random_direction(rng), board))
        .collect()
}
