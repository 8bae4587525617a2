use gridcycle_core::game_trait::PlayerId;

/// Points awarded to the opponent of a crashed rider.
pub const WIN_POINTS: u32 = 1;

/// Calculate a player's score for a round.
pub fn calculate_score(player_id: PlayerId, winners: &[PlayerId]) -> u32 {
    if winners.contains(&player_id) {
        WIN_POINTS
    } else {
        0
    }
}

/// Result line printed when a round ends.
pub fn win_message(display_name: &str) -> String {
    format!("{display_name} Wins!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_gets_one_point() {
        assert_eq!(calculate_score(2, &[2]), 1);
        assert_eq!(calculate_score(1, &[2]), 0);
    }

    #[test]
    fn double_crash_awards_both() {
        assert_eq!(calculate_score(1, &[2, 1]), 1);
        assert_eq!(calculate_score(2, &[2, 1]), 1);
    }

    #[test]
    fn no_winner_no_points() {
        assert_eq!(calculate_score(1, &[]), 0);
    }

    #[test]
    fn message_format() {
        assert_eq!(win_message("Player 1"), "Player 1 Wins!");
        assert_eq!(win_message("AI"), "AI Wins!");
    }
}
