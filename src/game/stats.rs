use crate::game::settings::Settings;

/// Session counters plus the high score carried across sessions.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub game_active: bool,
    high_score: u32,
}

impl GameStats {
    /// `high_score` is whatever was loaded from disk at startup.
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            game_active: false,
            high_score,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Counters for a fresh game. Leaves `high_score` and `game_active` alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raise the high score to `score` if it beats it. Returns true on a new record.
    pub fn commit_high_score_if_better(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}
