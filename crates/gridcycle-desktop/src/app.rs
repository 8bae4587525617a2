use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested, prevent_quit};
use macroquad::time::get_time;
use macroquad::window::next_frame;
use rand::rngs::StdRng;

use gridcycle_core::game_trait::{ArcadeGame, GameEvent};
use gridcycle_core::time::FramePacer;
use gridcycle_tron::TronMatch;

use crate::audio::{AudioEventQueue, AudioManager};
use crate::input::InputRouter;
use crate::renderer;
use crate::session::Session;

/// Where the session is between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AppPhase {
    Playing,
    /// Showing a round result; the next round starts at `resume_at`.
    BetweenRounds { resume_at: f64 },
    Finished,
}

/// Owns everything the running game needs: the simulation, the window-side
/// input and audio, pacing, and the session scores.
pub struct GameApp {
    game: TronMatch,
    session: Session,
    input: InputRouter,
    audio: AudioManager,
    audio_queue: AudioEventQueue,
    pacer: FramePacer,
    rng: StdRng,
    phase: AppPhase,
    round_messages: Vec<String>,
}

impl GameApp {
    pub fn new(game: TronMatch, session: Session, audio: AudioManager, rng: StdRng) -> Self {
        let input = InputRouter::for_players(session.players());
        let pacer = FramePacer::new(game.config().tick_rate);
        Self {
            game,
            session,
            input,
            audio,
            audio_queue: AudioEventQueue::default(),
            pacer,
            rng,
            phase: AppPhase::Playing,
            round_messages: Vec::new(),
        }
    }

    fn start_round(&mut self) {
        self.game.init(self.session.players(), &mut self.rng);
        self.pacer.set_rate(self.game.tick_rate());
        self.pacer.reset();
        self.round_messages.clear();
        self.phase = AppPhase::Playing;
        tracing::info!(
            round = self.session.current_round(),
            of = self.session.round_count(),
            "Round started"
        );
    }

    fn toggle_pause(&mut self) {
        if self.game.is_paused() {
            self.game.resume();
            tracing::info!("Resumed");
        } else {
            self.game.pause();
            tracing::info!("Paused");
        }
    }

    fn tick(&mut self, now: f64) {
        let events = self.game.update(&mut self.rng);
        self.pacer.set_rate(self.game.tick_rate());
        self.audio_queue.extend_from_game_events(&events);

        if events.contains(&GameEvent::RoundComplete) {
            self.finish_round(now);
        }
    }

    fn finish_round(&mut self, now: f64) {
        self.session.record_round(&self.game.round_results());
        self.round_messages = self.game.outcome_messages();
        for line in &self.round_messages {
            println!("{line}");
        }
        tracing::info!(
            round = self.session.current_round(),
            ticks = self.game.ticks(),
            scores = %self.session.score_line(),
            "Round complete"
        );

        self.phase = if self.session.advance() {
            AppPhase::BetweenRounds {
                resume_at: now + f64::from(self.game.config().between_round_secs),
            }
        } else {
            AppPhase::Finished
        };
    }

    /// Advance the session clock to `now`: run a paced tick or start the next
    /// round when due. Returns false once the session is over.
    fn step(&mut self, now: f64) -> bool {
        match self.phase {
            AppPhase::Playing => {
                if !self.game.is_paused() && self.pacer.is_due(now) {
                    self.tick(now);
                }
            },
            AppPhase::BetweenRounds { resume_at } => {
                if now >= resume_at {
                    self.start_round();
                }
            },
            AppPhase::Finished => return false,
        }
        true
    }

    /// Run frames until the session ends or the player quits.
    pub async fn run(mut self) {
        prevent_quit();
        tracing::debug!(audio = self.audio.is_enabled(), "Window ready");
        self.audio.start_music();
        self.start_round();

        loop {
            if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
                tracing::info!("Quit requested");
                break;
            }

            if self.phase == AppPhase::Playing {
                if is_key_pressed(KeyCode::P) {
                    self.toggle_pause();
                }
                for (player_id, direction) in self.input.poll(is_key_pressed) {
                    self.game.apply_input(player_id, direction);
                }
            }
            if !self.step(get_time()) {
                break;
            }

            self.audio_queue.process(&self.audio);

            let banner = renderer::banner_text(self.game.is_paused(), &self.round_messages);
            renderer::draw_frame(self.game.state(), &self.session.score_line(), banner.as_deref());
            next_frame().await;
        }

        self.audio.stop_music();
        tracing::info!(
            rounds_played = self.session.current_round(),
            final_scores = %self.session.score_line(),
            "Session over"
        );
    }
}
