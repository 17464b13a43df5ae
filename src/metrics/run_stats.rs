/// Totals across every game played since the program started.
///
/// Nothing here is cleared by a reset; `best` in particular is a session high
/// score that carries over from game to game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub games_played: u32,
    pub total: u64,
    pub best: u32,
    /// `total / games_played`, rounded to one decimal when a game ends
    pub average: f64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_game_start(&mut self) {
        self.games_played += 1;
    }

    /// Track the running score of the current game. Returns true on a new best.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    /// Credit a finished game's score and refresh the average
    pub fn on_game_over(&mut self, final_score: u32) {
        self.record_score(final_score);
        self.total += u64::from(final_score);
        self.average = if self.games_played == 0 {
            0.0
        } else {
            (self.total as f64 / f64::from(self.games_played) * 10.0).round() / 10.0
        };
    }

    pub fn format_average(&self) -> String {
        format!("{:.1}", self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_tracking() {
        let mut stats = RunStats::new();

        assert!(stats.record_score(1));
        assert!(stats.record_score(10));
        assert_eq!(stats.best, 10);

        assert!(!stats.record_score(5));
        assert_eq!(stats.best, 10); // Should not decrease

        assert!(stats.record_score(15));
        assert_eq!(stats.best, 15); // Should update
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let mut stats = RunStats::new();

        stats.on_game_start();
        stats.on_game_over(3);
        stats.on_game_start();
        stats.on_game_over(4);
        stats.on_game_start();
        stats.on_game_over(4);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.total, 11);
        assert_eq!(stats.average, 3.7);
        assert_eq!(stats.format_average(), "3.7");
        assert_eq!(stats.best, 4);
    }

    #[test]
    fn test_average_waits_for_game_over() {
        let mut stats = RunStats::new();

        stats.on_game_start();
        stats.on_game_over(6);
        assert_eq!(stats.average, 6.0);

        // A game in progress counts as played but is not yet averaged in
        stats.on_game_start();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.average, 6.0);
        assert_eq!(stats.format_average(), "6.0");
    }

    #[test]
    fn test_no_games() {
        let mut stats = RunStats::new();
        stats.on_game_over(0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.format_average(), "0.0");
    }
}
