use std::collections::HashMap;

use gridcycle_core::game_trait::{PlayerId, PlayerScore};
use gridcycle_core::player::Player;

/// Scores carried across the rounds of one session.
pub struct Session {
    players: Vec<Player>,
    cumulative_scores: HashMap<PlayerId, u32>,
    current_round: u8,
    round_count: u8,
}

impl Session {
    pub fn new(players: Vec<Player>, round_count: u8) -> Self {
        Self {
            players,
            cumulative_scores: HashMap::new(),
            current_round: 1,
            round_count: round_count.max(1),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn round_count(&self) -> u8 {
        self.round_count
    }

    pub fn is_final_round(&self) -> bool {
        self.current_round >= self.round_count
    }

    pub fn record_round(&mut self, results: &[PlayerScore]) {
        for s in results {
            *self.cumulative_scores.entry(s.player_id).or_insert(0) += s.score;
        }
    }

    /// Move on to the next round. Returns false when the session is over.
    pub fn advance(&mut self) -> bool {
        if self.is_final_round() {
            return false;
        }
        self.current_round += 1;
        true
    }

    pub fn score(&self, player_id: PlayerId) -> u32 {
        self.cumulative_scores.get(&player_id).copied().unwrap_or(0)
    }

    /// `"Player 1: 2  AI: 1"`, in seat order.
    pub fn score_line(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{}: {}", p.display_name, self.score(p.id)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
