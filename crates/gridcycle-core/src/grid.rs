/// A cell position in board units. Both coordinates are multiples of the
/// board's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell away in `direction`.
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }

    /// Straight-line distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Cardinal direction on the grid. Screen coordinates: `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in evaluation order. Tie-breaking in the bot depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
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

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Playing field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 20,
        }
    }
}

impl Board {
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cells across.
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells down.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Whether `pos` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Position of the cell at column `col`, row `row`.
    pub fn cell(&self, col: i32, row: i32) -> Position {
        Position::new(col * self.cell_size, row * self.cell_size)
    }
}
