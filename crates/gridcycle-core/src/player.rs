use crate::game_trait::PlayerId;

/// A participant in a local match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub color: PlayerColor,
    /// Steered by the bot instead of the keyboard.
    pub is_bot: bool,
}

/// Trail color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for PlayerColor {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl PlayerColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Player colors in seat order.
    pub const PALETTE: &[PlayerColor] = &[
        PlayerColor::new(0, 255, 0), // Green
        PlayerColor::new(255, 0, 0), // Red
    ];

    /// Color for the given seat, wrapping around the palette.
    pub fn for_seat(seat: usize) -> Self {
        Self::PALETTE[seat % Self::PALETTE.len()]
    }
}
