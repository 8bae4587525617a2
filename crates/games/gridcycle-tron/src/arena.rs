use gridcycle_core::grid::{Board, Direction, Position};

/// A start cell with starting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoint {
    pub position: Position,
    pub direction: Direction,
}

/// Arena definition.
#[derive(Debug, Clone)]
pub struct Arena {
    pub board: Board,
    pub spawn_points: Vec<SpawnPoint>,
    pub obstacles: Vec<Position>,
}

/// Start cells (column, row) for seats 1 and 2. The riders face each other
/// so neither can crash into its own trail on the first tick.
const SPAWN_CELLS: [(i32, i32, Direction); 2] =
    [(5, 5, Direction::Right), (30, 15, Direction::Left)];

/// Obstacle cells (column, row) at round start.
const OBSTACLE_CELLS: [(i32, i32); 3] = [(10, 10), (20, 20), (30, 10)];

/// Whether every start cell lies inside `board`.
pub fn spawns_fit(board: &Board) -> bool {
    SPAWN_CELLS
        .iter()
        .all(|&(col, row, _)| board.contains(board.cell(col, row)))
}

/// Build the classic arena: fixed start cells and three obstacles.
/// Obstacles that fall outside a smaller board are left out.
pub fn create_arena(board: Board) -> Arena {
    let spawn_points = SPAWN_CELLS
        .iter()
        .map(|&(col, row, direction)| SpawnPoint {
            position: board.cell(col, row),
            direction,
        })
        .collect();

    let obstacles = OBSTACLE_CELLS
        .iter()
        .map(|&(col, row)| board.cell(col, row))
        .filter(|&pos| board.contains(pos))
        .collect();

    Arena {
        board,
        spawn_points,
        obstacles,
    }
}
