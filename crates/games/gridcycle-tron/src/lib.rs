pub mod arena;
pub mod bot;
pub mod collision;
pub mod config;
pub mod obstacles;
pub mod physics;
pub mod powerups;
pub mod scoring;

use std::collections::{HashMap, VecDeque};
use std::str::FromStr;

use rand::RngCore;
use gridcycle_core::arcade_game_boilerplate;
use gridcycle_core::game_trait::{ArcadeGame, GameEvent, GameMetadata, PlayerId, PlayerScore};
use gridcycle_core::grid::{Board, Direction, Position};
use gridcycle_core::player::{Player, PlayerColor};

use collision::CrashCause;
use config::{ConfigError, TronConfig};
use powerups::{PickupRule, SpeedBoost};

/// Which rule set a match runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two humans on one keyboard. Static obstacles, the power-up is consumed.
    Duel,
    /// One human against the greedy bot. Obstacles wander, the power-up
    /// respawns with a speed boost, head-on collisions count.
    VersusAi,
}

impl Variant {
    /// The two seats for this variant, in evaluation order.
    pub fn roster(self) -> Vec<Player> {
        let (second_name, second_is_bot) = match self {
            Variant::Duel => ("Player 2", false),
            Variant::VersusAi => ("AI", true),
        };
        vec![
            Player {
                id: 1,
                display_name: "Player 1".to_string(),
                color: PlayerColor::for_seat(0),
                is_bot: false,
            },
            Player {
                id: 2,
                display_name: second_name.to_string(),
                color: PlayerColor::for_seat(1),
                is_bot: second_is_bot,
            },
        ]
    }

    pub fn pickup_rule(self) -> PickupRule {
        match self {
            Variant::Duel => PickupRule::Consume,
            Variant::VersusAi => PickupRule::RespawnWithBoost,
        }
    }

    pub fn obstacles_move(self) -> bool {
        self == Variant::VersusAi
    }

    /// Whether two riders entering the same cell is a crash.
    pub fn checks_head_on(self) -> bool {
        self == Variant::VersusAi
    }

    /// Whether collision checks stop at the first crashed rider, so only one
    /// award can happen per tick. In a duel both riders can crash together
    /// and both opponents score.
    pub fn first_crash_only(self) -> bool {
        self == Variant::VersusAi
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Duel => "duel",
            Variant::VersusAi => "versus-ai",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duel" | "2p" => Ok(Variant::Duel),
            "versus-ai" | "ai" => Ok(Variant::VersusAi),
            other => Err(format!(
                "unknown mode '{other}' (expected 'duel' or 'versus-ai')"
            )),
        }
    }
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    Ended,
}

/// State of a single rider.
#[derive(Debug, Clone)]
pub struct CycleState {
    pub id: PlayerId,
    pub position: Position,
    pub direction: Direction,
    /// Every cell archived so far, oldest first. Seeded with the start cell.
    pub trail: Vec<Position>,
    pub color: PlayerColor,
    pub is_bot: bool,
    pub crashed: bool,
}

impl CycleState {
    pub fn new(id: PlayerId, position: Position, direction: Direction, color: PlayerColor) -> Self {
        Self {
            id,
            position,
            direction,
            trail: vec![position],
            color,
            is_bot: false,
            crashed: false,
        }
    }
}

/// Full simulation state for one round.
#[derive(Debug, Clone)]
pub struct TronState {
    pub board: Board,
    /// Riders in seat order; collision checks follow this order.
    pub cycles: Vec<CycleState>,
    pub obstacles: Vec<Position>,
    pub power_up: Option<Position>,
    pub boost: Option<SpeedBoost>,
    pub tick: u32,
    pub phase: MatchPhase,
    /// Players awarded this round.
    pub winners: Vec<PlayerId>,
}

impl TronState {
    fn empty(board: Board) -> Self {
        Self {
            board,
            cycles: Vec::new(),
            obstacles: Vec::new(),
            power_up: None,
            boost: None,
            tick: 0,
            phase: MatchPhase::Running,
            winners: Vec::new(),
        }
    }

    pub fn cycle(&self, player_id: PlayerId) -> Option<&CycleState> {
        self.cycles.iter().find(|c| c.id == player_id)
    }

    fn cycle_mut(&mut self, player_id: PlayerId) -> Option<&mut CycleState> {
        self.cycles.iter_mut().find(|c| c.id == player_id)
    }

    pub fn round_complete(&self) -> bool {
        self.phase == MatchPhase::Ended
    }
}

/// One round of grid light cycles.
pub struct TronMatch {
    state: TronState,
    variant: Variant,
    display_names: HashMap<PlayerId, String>,
    pending_inputs: HashMap<PlayerId, VecDeque<Direction>>,
    paused: bool,
    game_config: TronConfig,
}

impl TronMatch {
    pub fn new(variant: Variant) -> Self {
        Self::from_valid_config(variant, TronConfig::default())
    }

    /// Build a match from a custom config, rejecting one that `validate` refuses.
    pub fn with_config(variant: Variant, config: TronConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(variant, config))
    }

    fn from_valid_config(variant: Variant, config: TronConfig) -> Self {
        Self {
            state: TronState::empty(config.board()),
            variant,
            display_names: HashMap::new(),
            pending_inputs: HashMap::new(),
            paused: false,
            game_config: config,
        }
    }

    pub fn state(&self) -> &TronState {
        &self.state
    }

    pub fn config(&self) -> &TronConfig {
        &self.game_config
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn display_name(&self, player_id: PlayerId) -> &str {
        self.display_names
            .get(&player_id)
            .map_or("Unknown", String::as_str)
    }

    /// One line per winner, in award order. Empty while the round runs.
    pub fn outcome_messages(&self) -> Vec<String> {
        self.state
            .winners
            .iter()
            .map(|&pid| scoring::win_message(self.display_name(pid)))
            .collect()
    }

    /// Apply queued direction changes for every keyboard rider, in arrival order.
    fn apply_pending_inputs(&mut self) {
        for cycle in self.state.cycles.iter_mut().filter(|c| !c.is_bot) {
            if let Some(queue) = self.pending_inputs.get_mut(&cycle.id) {
                for direction in queue.drain(..) {
                    physics::request_direction(cycle, direction);
                }
            }
        }
    }

    /// Let every bot pick a heading against the current state, then move it.
    fn steer_and_move_bots(&mut self) {
        let cell_size = self.state.board.cell_size;
        let bot_ids: Vec<PlayerId> = self
            .state
            .cycles
            .iter()
            .filter(|c| c.is_bot)
            .map(|c| c.id)
            .collect();

        for bot_id in bot_ids {
            let choice = bot::generate_bot_direction(&self.state, bot_id);
            let Some(cycle) = self.state.cycle_mut(bot_id) else {
                continue;
            };
            match choice {
                Some(direction) => cycle.direction = direction,
                None => tracing::debug!(bot_id, "Bot boxed in, keeping heading"),
            }
            physics::move_cycle(cycle, cell_size);
        }
    }

    /// Evaluate crashes in seat order. Returns the crashed riders.
    fn detect_crashes(&self) -> Vec<(PlayerId, CrashCause)> {
        let board = self.state.board;
        let occupied = collision::occupied_cells(&self.state.cycles);
        let head_on = self.variant.checks_head_on()
            && matches!(self.state.cycles.as_slice(), [a, b] if collision::is_head_on(a, b));

        let mut crashed = Vec::new();
        for cycle in &self.state.cycles {
            let cause = collision::crash_cause(
                cycle.position,
                &board,
                &occupied,
                &self.state.obstacles,
            )
            .or(head_on.then_some(CrashCause::HeadOn));

            if let Some(cause) = cause {
                crashed.push((cycle.id, cause));
                if self.variant.first_crash_only() {
                    break;
                }
            }
        }
        crashed
    }

    /// Mark crashed riders, award their opponents, and end the round.
    fn resolve_crashes(&mut self, crashed: &[(PlayerId, CrashCause)], events: &mut Vec<GameEvent>) {
        for &(pid, cause) in crashed {
            tracing::info!(player_id = pid, ?cause, tick = self.state.tick, "Cycle crashed");
            if let Some(cycle) = self.state.cycle_mut(pid) {
                cycle.crashed = true;
            }
            events.push(GameEvent::Crashed { player_id: pid });

            let opponents: Vec<PlayerId> = self
                .state
                .cycles
                .iter()
                .map(|c| c.id)
                .filter(|&id| id != pid)
                .collect();
            for winner in opponents {
                self.state.winners.push(winner);
                events.push(GameEvent::ScoreUpdate {
                    player_id: winner,
                    score: scoring::WIN_POINTS,
                });
            }
        }

        self.state.phase = MatchPhase::Ended;
        for message in self.outcome_messages() {
            tracing::info!(round_tick = self.state.tick, "{message}");
        }
        events.push(GameEvent::RoundComplete);
    }

    /// Exact-cell pickup check for each surviving rider in seat order. A
    /// power-up lying on a trail or obstacle can only be reached by crashing,
    /// so it stays put until the round ends.
    fn collect_power_up(&mut self, rng: &mut dyn RngCore, events: &mut Vec<GameEvent>) {
        let board = self.state.board;
        let riders: Vec<(PlayerId, Position)> = self
            .state
            .cycles
            .iter()
            .filter(|c| !c.crashed)
            .map(|c| (c.id, c.position))
            .collect();

        for (pid, position) in riders {
            if self.state.power_up != Some(position) {
                continue;
            }
            events.push(GameEvent::PowerUpCollected { player_id: pid });
            match self.variant.pickup_rule() {
                PickupRule::Consume => {
                    self.state.power_up = None;
                },
                PickupRule::RespawnWithBoost => {
                    let next = powerups::generate_power_up(&board, rng);
                    self.state.power_up = Some(next);
                    self.state.boost = Some(SpeedBoost::new(self.game_config.boost_ticks));
                },
            }
            tracing::info!(
                player_id = pid,
                tick = self.state.tick,
                respawned_at = ?self.state.power_up,
                "Power-up collected"
            );
        }
    }
}

impl ArcadeGame for TronMatch {
    type Input = Direction;

    fn metadata(&self) -> GameMetadata {
        let description = match self.variant {
            Variant::Duel => "Two riders, one keyboard. Don't hit a wall or a trail.",
            Variant::VersusAi => "Outlast the bot. Obstacles wander; grab the power-up for speed.",
        };
        GameMetadata {
            name: format!("Light Cycles ({})", self.variant.label()),
            description: description.to_string(),
            min_players: 2,
            max_players: 2,
        }
    }

    fn init(&mut self, players: &[Player], rng: &mut dyn RngCore) {
        let arena = arena::create_arena(self.game_config.board());
        if players.len() != arena.spawn_points.len() {
            tracing::warn!(
                players = players.len(),
                seats = arena.spawn_points.len(),
                "Player count does not match start positions; extra players sit out"
            );
        }

        let cycles = players
            .iter()
            .zip(&arena.spawn_points)
            .map(|(player, spawn)| CycleState {
                is_bot: player.is_bot,
                ..CycleState::new(player.id, spawn.position, spawn.direction, player.color)
            })
            .collect();

        self.state = TronState {
            cycles,
            obstacles: arena.obstacles,
            power_up: Some(powerups::generate_power_up(&arena.board, rng)),
            ..TronState::empty(arena.board)
        };
        self.display_names = players
            .iter()
            .map(|p| (p.id, p.display_name.clone()))
            .collect();
        self.pending_inputs.clear();
        self.paused = false;

        tracing::info!(
            variant = self.variant.label(),
            power_up = ?self.state.power_up,
            "Round initialized"
        );
    }

    fn update(&mut self, rng: &mut dyn RngCore) -> Vec<GameEvent> {
        if self.paused || self.state.round_complete() {
            return Vec::new();
        }

        self.state.tick += 1;
        let mut events = Vec::new();
        let board = self.state.board;

        if let Some(boost) = &mut self.state.boost {
            boost.tick();
            if boost.is_expired() {
                self.state.boost = None;
            }
        }

        self.apply_pending_inputs();
        for cycle in self.state.cycles.iter_mut().filter(|c| !c.is_bot) {
            physics::move_cycle(cycle, board.cell_size);
        }
        self.steer_and_move_bots();

        if self.variant.obstacles_move()
            && obstacles::is_step_due(self.state.tick, self.game_config.obstacle_step_interval)
        {
            self.state.obstacles = obstacles::step_obstacles(&self.state.obstacles, &board, rng);
            tracing::debug!(tick = self.state.tick, obstacles = ?self.state.obstacles, "Obstacles stepped");
        }

        let crashed = self.detect_crashes();
        if !crashed.is_empty() {
            self.resolve_crashes(&crashed, &mut events);
        }

        self.collect_power_up(rng, &mut events);

        events
    }

    fn apply_input(&mut self, player_id: PlayerId, input: Direction) {
        if self.state.round_complete() {
            return;
        }
        match self.state.cycle(player_id) {
            Some(cycle) if !cycle.is_bot => {
                self.pending_inputs
                    .entry(player_id)
                    .or_default()
                    .push_back(input);
            },
            Some(_) => tracing::debug!(player_id, "Dropped keyboard input for bot rider"),
            None => tracing::debug!(player_id, "Dropped input for unknown rider"),
        }
    }

    fn ticks(&self) -> u32 {
        self.state.tick
    }

    fn tick_rate(&self) -> f32 {
        if self.state.boost.is_some() {
            self.game_config.boost_tick_rate
        } else {
            self.game_config.tick_rate
        }
    }

    fn round_count_hint(&self) -> u8 {
        self.game_config.round_count
    }

    arcade_game_boilerplate!();

    fn round_results(&self) -> Vec<PlayerScore> {
        self.state
            .cycles
            .iter()
            .map(|c| PlayerScore {
                player_id: c.id,
                score: scoring::calculate_score(c.id, &self.state.winners),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use gridcycle_core::test_helpers::{self, seeded_rng};

    use super::*;

    fn start(variant: Variant) -> TronMatch {
        let mut game = TronMatch::new(variant);
        let mut rng = seeded_rng(11);
        game.init(&variant.roster(), &mut rng);
        game
    }

    /// Put a rider at `pos` with a fresh one-cell trail.
    fn place(game: &mut TronMatch, pid: PlayerId, pos: Position, direction: Direction) {
        let cycle = game.state.cycle_mut(pid).unwrap();
        cycle.position = pos;
        cycle.direction = direction;
        cycle.trail = vec![pos];
    }

    #[test]
    fn init_places_riders_at_start() {
        let game = start(Variant::Duel);
        let state = game.state();
        assert_eq!(state.phase, MatchPhase::Running);
        assert_eq!(state.cycles.len(), 2);
        assert_eq!(state.cycles[0].position, Position::new(100, 100));
        assert_eq!(state.cycles[0].direction, Direction::Right);
        assert_eq!(state.cycles[0].trail, vec![Position::new(100, 100)]);
        assert_eq!(state.cycles[1].position, Position::new(600, 300));
        assert_eq!(state.cycles[1].direction, Direction::Left);
        assert_eq!(state.obstacles.len(), 3);

        let pu = state.power_up.expect("power-up spawned at init");
        assert!(pu.x >= 20 && pu.x <= 760 && pu.y >= 20 && pu.y <= 560);
    }

    #[test]
    fn versus_ai_seats_a_bot() {
        let game = start(Variant::VersusAi);
        assert!(!game.state().cycles[0].is_bot);
        assert!(game.state().cycles[1].is_bot);
        assert_eq!(game.display_name(2), "AI");
    }

    #[test]
    fn tick_moves_and_grows_trails() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        game.update(&mut rng);
        let state = game.state();
        assert_eq!(state.cycles[0].position, Position::new(120, 100));
        assert_eq!(state.cycles[1].position, Position::new(580, 300));
        assert_eq!(state.cycles[0].trail.len(), 2);
        assert_eq!(state.cycles[1].trail.len(), 2);
        assert_eq!(state.phase, MatchPhase::Running);
    }

    #[test]
    fn queued_input_applies_in_order() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        // Up then Left: both perpendicular to the heading at the time they apply.
        game.apply_input(1, Direction::Up);
        game.apply_input(1, Direction::Left);
        game.update(&mut rng);
        assert_eq!(game.state().cycles[0].direction, Direction::Left);
        assert_eq!(game.state().cycles[0].position, Position::new(80, 100));
    }

    #[test]
    fn reverse_input_is_ignored() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        game.apply_input(1, Direction::Left);
        game.update(&mut rng);
        assert_eq!(game.state().cycles[0].direction, Direction::Right);
        assert_eq!(game.state().cycles[0].position, Position::new(120, 100));
    }

    #[test]
    fn bot_ignores_keyboard_input() {
        let mut game = start(Variant::VersusAi);
        game.apply_input(2, Direction::Up);
        assert!(game.pending_inputs.get(&2).is_none());
    }

    #[test]
    fn wall_crash_awards_opponent() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(780, 100), Direction::Right);
        let events = game.update(&mut rng);

        assert!(game.is_round_complete());
        assert_eq!(game.state().winners, vec![2]);
        assert!(game.state().cycles[0].crashed);
        assert!(events.contains(&GameEvent::Crashed { player_id: 1 }));
        assert!(events.contains(&GameEvent::ScoreUpdate {
            player_id: 2,
            score: 1
        }));
        assert!(events.contains(&GameEvent::RoundComplete));
        assert_eq!(game.outcome_messages(), vec!["Player 2 Wins!".to_string()]);
    }

    #[test]
    fn duel_double_crash_awards_both() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(780, 100), Direction::Right);
        place(&mut game, 2, Position::new(0, 300), Direction::Left);
        game.update(&mut rng);

        assert_eq!(game.state().winners, vec![2, 1]);
        let results = game.round_results();
        assert!(results.iter().all(|r| r.score == 1));
        assert_eq!(
            game.outcome_messages(),
            vec!["Player 2 Wins!".to_string(), "Player 1 Wins!".to_string()]
        );
    }

    #[test]
    fn duel_trail_crash() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        // Player 2's trail lies right in front of player 1.
        game.state.cycles[1].trail.push(Position::new(120, 100));
        game.update(&mut rng);
        assert_eq!(game.state().winners, vec![2]);
    }

    #[test]
    fn obstacle_crash() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(180, 200), Direction::Right);
        game.update(&mut rng);
        assert_eq!(game.state().winners, vec![2]);
    }

    #[test]
    fn duel_ignores_head_on() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(300, 300), Direction::Right);
        place(&mut game, 2, Position::new(340, 300), Direction::Left);
        game.update(&mut rng);
        assert_eq!(game.state().cycles[0].position, game.state().cycles[1].position);
        assert!(!game.is_round_complete());
    }

    #[test]
    fn versus_ai_head_on_goes_to_ai() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(300, 300), Direction::Right);
        place(&mut game, 2, Position::new(340, 300), Direction::Left);
        let events = game.update(&mut rng);

        assert_eq!(game.state().cycles[0].position, Position::new(320, 300));
        assert_eq!(game.state().cycles[1].position, Position::new(320, 300));
        assert!(game.is_round_complete());
        assert_eq!(game.state().winners, vec![2]);
        assert!(events.contains(&GameEvent::Crashed { player_id: 1 }));
        assert!(!events.contains(&GameEvent::Crashed { player_id: 2 }));
    }

    #[test]
    fn versus_ai_player_one_checked_first() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        place(&mut game, 1, Position::new(780, 100), Direction::Right);
        // Bot boxed into the corner: its only open neighbours are blocked.
        place(&mut game, 2, Position::new(0, 0), Direction::Left);
        game.state.cycles[1].trail.extend([Position::new(20, 0), Position::new(0, 20)]);
        game.update(&mut rng);

        assert_eq!(game.state().winners, vec![2], "only one award per tick");
        assert!(game.state().cycles[0].crashed);
        assert!(!game.state().cycles[1].crashed);
    }

    #[test]
    fn boxed_in_bot_keeps_heading_and_crashes() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        place(&mut game, 2, Position::new(0, 0), Direction::Left);
        game.state.cycles[1].trail.extend([Position::new(20, 0), Position::new(0, 20)]);
        game.update(&mut rng);

        assert_eq!(game.state().cycles[1].direction, Direction::Left);
        assert_eq!(game.state().cycles[1].position, Position::new(-20, 0));
        assert_eq!(game.state().winners, vec![1]);
    }

    #[test]
    fn duel_power_up_is_consumed() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        game.state.power_up = Some(Position::new(120, 100));
        let events = game.update(&mut rng);

        assert!(events.contains(&GameEvent::PowerUpCollected { player_id: 1 }));
        assert_eq!(game.state().power_up, None);
        assert!(game.state().boost.is_none());
        assert!((game.tick_rate() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn versus_ai_power_up_respawns_with_boost() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        game.state.power_up = Some(Position::new(120, 100));
        let events = game.update(&mut rng);

        assert!(events.contains(&GameEvent::PowerUpCollected { player_id: 1 }));
        let next = game.state().power_up.expect("respawned");
        assert!(next.x >= 20 && next.x <= 760 && next.y >= 20 && next.y <= 560);
        assert_eq!(
            game.state().boost,
            Some(SpeedBoost::new(game.config().boost_ticks))
        );
        assert!((game.tick_rate() - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn power_up_on_trail_stays_out_of_reach() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        let on_trail = Position::new(100, 100);
        game.state.power_up = Some(on_trail);

        let events = game.update(&mut rng);
        assert_eq!(game.state().power_up, Some(on_trail), "not re-rolled");
        assert!(events.is_empty());

        // Player 2 drives into the trail cell holding it: a crash, not a pickup.
        place(&mut game, 2, Position::new(80, 100), Direction::Right);
        let events = game.update(&mut rng);
        assert!(events.contains(&GameEvent::Crashed { player_id: 2 }));
        assert!(!events.contains(&GameEvent::PowerUpCollected { player_id: 2 }));
        assert_eq!(game.state().power_up, Some(on_trail));
    }

    #[test]
    fn versus_ai_power_up_on_trail_is_not_respawned() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        // The bot's start cell is on its trail from the first tick on.
        let on_trail = Position::new(600, 300);
        game.state.power_up = Some(on_trail);
        test_helpers::run_game_ticks(&mut game, 3, &mut rng);

        assert_eq!(game.state().power_up, Some(on_trail));
        assert!(game.state().boost.is_none());
    }

    #[test]
    fn boost_wears_off() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        game.state.power_up = None;
        game.state.boost = Some(SpeedBoost::new(1));
        game.update(&mut rng);
        assert!(game.state().boost.is_none());
        assert!((game.tick_rate() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn obstacles_step_on_interval_in_versus_ai() {
        let mut game = start(Variant::VersusAi);
        let mut rng = seeded_rng(1);
        let before = game.state().obstacles.clone();

        game.state.tick = 18;
        game.update(&mut rng);
        assert_eq!(game.state().obstacles, before, "tick 19 is not a step tick");

        game.update(&mut rng);
        let after = &game.state().obstacles;
        assert_eq!(after.len(), before.len());
        // All three start well inside the board, so each one moves.
        for (a, b) in before.iter().zip(after) {
            assert_eq!(a.distance(*b), 20.0);
        }
    }

    #[test]
    fn duel_obstacles_are_static() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        let before = game.state().obstacles.clone();
        game.state.tick = 19;
        game.update(&mut rng);
        assert_eq!(game.state().obstacles, before);
    }

    #[test]
    fn duel_without_input_ends_at_left_wall() {
        let mut game = start(Variant::Duel);
        let mut rng = seeded_rng(1);
        test_helpers::run_game_ticks(&mut game, 30, &mut rng);
        assert!(!game.is_round_complete());
        game.update(&mut rng);
        assert!(game.is_round_complete());
        assert_eq!(game.ticks(), 31);
        assert_eq!(game.state().winners, vec![1]);
        assert_eq!(game.state().cycles[1].position, Position::new(-20, 300));
    }

    #[test]
    fn input_after_round_end_is_dropped() {
        let mut game = start(Variant::Duel);
        game.state.phase = MatchPhase::Ended;
        game.apply_input(1, Direction::Up);
        assert!(game.pending_inputs.is_empty());
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("duel".parse::<Variant>(), Ok(Variant::Duel));
        assert_eq!("versus-ai".parse::<Variant>(), Ok(Variant::VersusAi));
        assert_eq!("ai".parse::<Variant>(), Ok(Variant::VersusAi));
        assert!("chess".parse::<Variant>().is_err());
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================

    #[test]
    fn contract_init_creates_player_state() {
        for variant in [Variant::Duel, Variant::VersusAi] {
            let mut game = TronMatch::new(variant);
            test_helpers::contract_init_creates_player_state(&mut game, &variant.roster());
        }
        // Generic human seats work too.
        let mut game = TronMatch::new(Variant::Duel);
        test_helpers::contract_init_creates_player_state(&mut game, &test_helpers::make_players(2));
    }

    #[test]
    fn rosters_fit_metadata() {
        for variant in [Variant::Duel, Variant::VersusAi] {
            let game = TronMatch::new(variant);
            let meta = game.metadata();
            let seats = variant.roster().len();
            assert!((usize::from(meta.min_players)..=usize::from(meta.max_players)).contains(&seats));
            assert!(meta.name.contains(game.variant().label()));
            assert!(!meta.description.is_empty());
        }
    }

    #[test]
    fn with_config_rejects_invalid_board() {
        let config = TronConfig {
            board_width: 40,
            board_height: 40,
            ..TronConfig::default()
        };
        assert!(matches!(
            TronMatch::with_config(Variant::Duel, config),
            Err(ConfigError::Invalid(_))
        ));

        let config = TronConfig {
            round_count: 3,
            ..TronConfig::default()
        };
        let game = TronMatch::with_config(Variant::VersusAi, config).unwrap();
        assert_eq!(game.round_count_hint(), 3);
    }

    #[test]
    fn contract_update_advances_time() {
        let mut game = start(Variant::VersusAi);
        test_helpers::contract_update_advances_time(&mut game);
    }

    #[test]
    fn contract_pause_stops_updates() {
        let mut game = start(Variant::Duel);
        test_helpers::contract_pause_stops_updates(&mut game);
    }

    #[test]
    fn contract_round_eventually_completes() {
        for variant in [Variant::Duel, Variant::VersusAi] {
            let mut game = start(variant);
            test_helpers::contract_round_eventually_completes(&mut game, 2_000);
            test_helpers::contract_update_after_complete_is_noop(&mut game);
        }
    }
}
