use std::collections::HashSet;

use gridcycle_core::game_trait::PlayerId;
use gridcycle_core::grid::{Board, Direction, Position};

use crate::collision::{is_colliding, occupied_cells};
use crate::TronState;

/// Greedy chase: pick the legal neighbouring cell closest to `target`.
///
/// Candidates are tried in `Direction::ALL` order and only a strictly smaller
/// distance replaces the current pick, so the first minimum wins. Returns
/// `None` when every neighbour is blocked; the caller keeps its heading and
/// will usually crash next tick. There is no lookahead.
pub fn ai_move(
    from: Position,
    target: Position,
    board: &Board,
    occupied: &HashSet<Position>,
    obstacles: &[Position],
) -> Option<Direction> {
    let mut best: Option<(Direction, f64)> = None;
    for direction in Direction::ALL {
        let candidate = from.step(direction, board.cell_size);
        if is_colliding(candidate, board, occupied, obstacles) {
            continue;
        }
        let dist = candidate.distance(target);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {},
            _ => best = Some((direction, dist)),
        }
    }
    best.map(|(direction, _)| direction)
}

/// Choose the bot's heading for this tick from the live match state.
/// Targets the first other cycle. Returns `None` to keep the current heading.
pub fn generate_bot_direction(state: &TronState, bot_id: PlayerId) -> Option<Direction> {
    let bot = state.cycle(bot_id)?;
    let opponent = state.cycles.iter().find(|c| c.id != bot_id)?;
    let occupied = occupied_cells(&state.cycles);
    ai_move(
        bot.position,
        opponent.position,
        &state.board,
        &occupied,
        &state.obstacles,
    )
}
