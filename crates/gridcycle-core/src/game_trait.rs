use rand::RngCore;
/// Unique identifier for a player in the game.
pub type PlayerId = u64;

/// Core trait implemented by every gridcycle game mode.
///
/// The desktop runtime owns the window, input, audio, and pacing;
/// the game only handles simulation.
pub trait ArcadeGame {
    /// Per-player input the runtime forwards between ticks.
    type Input;

    /// Game metadata for the title bar and logs.
    fn metadata(&self) -> GameMetadata;

    /// Called once per round with the participating players.
    fn init(&mut self, players: &[super::player::Player], rng: &mut dyn RngCore);

    /// Advance the simulation by one fixed tick. Returns the events raised.
    fn update(&mut self, rng: &mut dyn RngCore) -> Vec<GameEvent>;

    /// Queue a player's input for the next tick.
    fn apply_input(&mut self, player_id: PlayerId, input: Self::Input);

    /// Number of ticks simulated since `init`.
    fn ticks(&self) -> u32;

    /// Simulation tick rate in Hz. May change between ticks.
    fn tick_rate(&self) -> f32 {
        10.0
    }

    /// Hint for the number of rounds this game wants to play.
    fn round_count_hint(&self) -> u8 {
        1
    }

    fn pause(&mut self);

    fn resume(&mut self);

    fn is_paused(&self) -> bool;

    /// Whether the current round is complete.
    fn is_round_complete(&self) -> bool;

    /// Points earned by each player this round.
    fn round_results(&self) -> Vec<PlayerScore>;
}

/// Game metadata.
#[derive(Debug, Clone)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub min_players: u8,
    pub max_players: u8,
}

/// Events emitted by a game during update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player hit a wall, a trail, an obstacle, or the other player.
    Crashed { player_id: PlayerId },
    /// A player was awarded points.
    ScoreUpdate { player_id: PlayerId, score: u32 },
    /// A player drove over the power-up.
    PowerUpCollected { player_id: PlayerId },
    RoundComplete,
}

/// Score entry for a player at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub score: u32,
}

/// Generates the `ArcadeGame` methods that are identical across games:
/// `pause`, `resume`, `is_paused`, `is_round_complete`.
///
/// Requires the implementing struct to have `state: $StateType` and `paused: bool` fields,
/// and `$StateType` to have a `round_complete()` method.
#[macro_export]
macro_rules! arcade_game_boilerplate {
    () => {
        fn pause(&mut self) {
            self.paused = true;
        }

        fn resume(&mut self) {
            self.paused = false;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn is_round_complete(&self) -> bool {
            self.state.round_complete()
        }
    };
}
