use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Session statistics shown by the terminal host
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub apples_eaten: u32,
    pub penalties: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            apples_eaten: 0,
            penalties: 0,
            games_played: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.apples_eaten = 0;
        self.penalties = 0;
        self.games_played += 1;
    }

    pub fn on_step(&mut self, result: &StepResult) {
        for info in &result.snakes {
            if info.ate_apple {
                self.apples_eaten += 1;
            }
            if info.score.applied {
                self.penalties += 1;
            }
        }
        self.on_score(result.score);
    }

    pub fn on_score(&mut self, score: u32) {
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
