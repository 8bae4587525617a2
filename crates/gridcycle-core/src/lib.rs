pub mod game_trait;
pub mod grid;
pub mod player;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::game_trait::{ArcadeGame, GameEvent, PlayerId};
    use crate::player::{Player, PlayerColor};

    /// Create `n` human test players with sequential IDs starting at 1.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player {
                id: i as PlayerId + 1,
                display_name: format!("Player {}", i + 1),
                color: PlayerColor::for_seat(i),
                is_bot: false,
            })
            .collect()
    }

    /// Deterministic RNG for tests.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Run N game ticks without input, returning all accumulated events.
    pub fn run_game_ticks<G: ArcadeGame + ?Sized>(
        game: &mut G,
        n: usize,
        rng: &mut StdRng,
    ) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(rng));
        }
        all_events
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Generic checks every ArcadeGame implementation must pass. Game
    // crates call them from their own #[cfg(test)] modules.

    /// After init() with N players, round_results() has one entry per player.
    pub fn contract_init_creates_player_state<G: ArcadeGame + ?Sized>(
        game: &mut G,
        players: &[Player],
    ) {
        let mut rng = seeded_rng(1);
        game.init(players, &mut rng);
        assert_eq!(
            game.round_results().len(),
            players.len(),
            "round_results must have one entry per player after init"
        );
        assert_eq!(game.ticks(), 0, "init must reset the tick counter");
        assert!(!game.is_round_complete(), "a fresh round must be running");
    }

    /// update() must advance the tick counter while the round is running.
    pub fn contract_update_advances_time<G: ArcadeGame + ?Sized>(game: &mut G) {
        let mut rng = seeded_rng(2);
        let before = game.ticks();
        game.update(&mut rng);
        assert_eq!(game.ticks(), before + 1, "update must advance one tick");
    }

    /// pause() must freeze the simulation, resume() must unfreeze it.
    pub fn contract_pause_stops_updates<G: ArcadeGame + ?Sized>(game: &mut G) {
        let mut rng = seeded_rng(3);
        game.pause();
        assert!(game.is_paused());
        let before = game.ticks();
        let events = game.update(&mut rng);
        assert_eq!(game.ticks(), before, "ticks must not advance while paused");
        assert!(events.is_empty(), "no events while paused");

        game.resume();
        assert!(!game.is_paused());
        game.update(&mut rng);
        assert_eq!(game.ticks(), before + 1, "ticks must advance after resume");
    }

    /// Running update() enough times must eventually complete the round.
    pub fn contract_round_eventually_completes<G: ArcadeGame + ?Sized>(
        game: &mut G,
        max_ticks: usize,
    ) {
        let mut rng = seeded_rng(4);
        for _ in 0..max_ticks {
            let events = game.update(&mut rng);
            if game.is_round_complete() {
                assert!(
                    events.contains(&GameEvent::RoundComplete),
                    "the completing tick must emit RoundComplete"
                );
                return;
            }
        }
        panic!("Game must complete within {max_ticks} ticks");
    }

    /// update() after the round completed is a no-op.
    pub fn contract_update_after_complete_is_noop<G: ArcadeGame + ?Sized>(game: &mut G) {
        assert!(game.is_round_complete(), "precondition: round complete");
        let mut rng = seeded_rng(5);
        let before = game.ticks();
        let events = game.update(&mut rng);
        assert_eq!(game.ticks(), before, "ticks must not advance after completion");
        assert!(events.is_empty(), "no events after completion");
    }
}
