use macroquad::input::KeyCode;

use gridcycle_core::game_trait::PlayerId;
use gridcycle_core::grid::Direction;
use gridcycle_core::player::Player;

/// Four steering keys for one rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyBindings {
    pub const WASD: KeyBindings = KeyBindings {
        up: KeyCode::W,
        down: KeyCode::S,
        left: KeyCode::A,
        right: KeyCode::D,
    };

    pub const ARROWS: KeyBindings = KeyBindings {
        up: KeyCode::Up,
        down: KeyCode::Down,
        left: KeyCode::Left,
        right: KeyCode::Right,
    };

    /// Human seats get these in order; bots get none.
    pub const SEATS: [KeyBindings; 2] = [Self::WASD, Self::ARROWS];

    pub fn direction_for(&self, key: KeyCode) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    fn keys(&self) -> [KeyCode; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

/// Routes key presses to the rider that owns the key.
pub struct InputRouter {
    seats: Vec<(PlayerId, KeyBindings)>,
}

impl InputRouter {
    pub fn for_players(players: &[Player]) -> Self {
        let seats = players
            .iter()
            .filter(|p| !p.is_bot)
            .zip(KeyBindings::SEATS)
            .map(|(p, bindings)| (p.id, bindings))
            .collect();
        Self { seats }
    }

    pub fn map_key(&self, key: KeyCode) -> Option<(PlayerId, Direction)> {
        self.seats
            .iter()
            .find_map(|(pid, bindings)| bindings.direction_for(key).map(|d| (*pid, d)))
    }

    /// Collect this frame's steering presses. `pressed` is usually
    /// `macroquad::input::is_key_pressed`.
    pub fn poll(&self, mut pressed: impl FnMut(KeyCode) -> bool) -> Vec<(PlayerId, Direction)> {
        self.seats
            .iter()
            .flat_map(|(_, bindings)| bindings.keys())
            .filter(|&key| pressed(key))
            .filter_map(|key| self.map_key(key))
            .collect()
    }
}
