use gridcycle_core::grid::Direction;

use super::CycleState;

/// Apply a requested direction change.
///
/// Reversing straight back onto the trail is silently ignored. Returns whether
/// the cycle now faces `requested`.
pub fn request_direction(cycle: &mut CycleState, requested: Direction) -> bool {
    if cycle.direction.is_opposite(requested) {
        return false;
    }
    cycle.direction = requested;
    true
}

/// Archive the current cell onto the trail, then advance one cell.
///
/// No bounds check happens here; legality is judged after the move.
pub fn move_cycle(cycle: &mut CycleState, cell_size: i32) {
    cycle.trail.push(cycle.position);
    cycle.position = cycle.position.step(cycle.direction, cell_size);
}
