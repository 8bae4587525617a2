use rand::Rng;
use gridcycle_core::grid::{Board, Position};

/// Pick a random cell for the power-up, never on the outermost ring.
///
/// Trails, obstacles, and riders are not consulted: the power-up may land on
/// an occupied cell and stay out of reach until the round ends.
pub fn generate_power_up<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Position {
    let col = rng.random_range(1..=board.cols() - 2);
    let row = rng.random_range(1..=board.rows() - 2);
    board.cell(col, row)
}

/// What happens to the power-up once someone drives over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupRule {
    /// It disappears for the rest of the round.
    Consume,
    /// It immediately reappears elsewhere and grants a speed boost.
    RespawnWithBoost,
}

/// Temporary tick-rate increase after a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBoost {
    pub remaining_ticks: u32,
}

impl SpeedBoost {
    pub fn new(ticks: u32) -> Self {
        Self {
            remaining_ticks: ticks,
        }
    }

    pub fn tick(&mut self) {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ticks == 0
    }
}
