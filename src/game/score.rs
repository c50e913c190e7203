use super::collision::collides;
use super::config::SimConfig;
use super::snake::Snake;

/// What happened to the score during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreUpdate {
    /// The hunger timer ran out this frame
    pub hunger_penalty: bool,
    /// The mouth touched the snake's own body
    pub self_collision: bool,
    /// Points were actually taken (not blocked by invulnerability)
    pub applied: bool,
}

/// Shared score with hunger and invulnerability timers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    /// Frames left during which penalties are ignored
    pub invulnerable_frames: u32,
    /// Frames left until hunger costs points
    pub hunger_frames: u32,
    hunger_period: u32,
    invulnerability_window: u32,
}

impl Score {
    /// A fresh score starts full and protected
    pub fn new(config: &SimConfig) -> Self {
        Self {
            value: 0,
            invulnerable_frames: config.invulnerability_frames,
            hunger_frames: config.hunger_period,
            hunger_period: config.hunger_period,
            invulnerability_window: config.invulnerability_frames,
        }
    }

    /// Tick the timers and charge `snake` for hunger and self-collision
    pub fn update(&mut self, snake: &Snake, config: &SimConfig) -> ScoreUpdate {
        let mut update = ScoreUpdate::default();
        self.invulnerable_frames = self.invulnerable_frames.saturating_sub(1);

        if self.hunger_frames == 0 {
            update.hunger_penalty = true;
            update.applied |= self.penalize();
            self.hunger_frames = self.hunger_period;
        } else {
            self.hunger_frames -= 1;
        }

        if collides(snake, snake.mouth(), config) {
            update.self_collision = true;
            update.applied |= self.penalize();
        }
        update
    }

    /// Called when an apple is eaten
    pub fn reward(&mut self) {
        self.hunger_frames = self.hunger_period;
        self.value += 1;
    }

    /// Take `value / 5 + 1` points unless invulnerable. Returns whether it applied.
    pub fn penalize(&mut self) -> bool {
        if self.invulnerable_frames > 0 {
            return false;
        }
        self.invulnerable_frames = self.invulnerability_window;
        if self.value > 0 {
            self.value -= self.value / 5 + 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::Point;

    fn vulnerable(config: &SimConfig, value: u32) -> Score {
        let mut score = Score::new(config);
        score.value = value;
        score.invulnerable_frames = 0;
        score
    }

    fn harmless_snake() -> Snake {
        Snake::from_segments(0, [Point::new(62, 50), Point::new(48, 50)], 0.0)
    }

    #[test]
    fn test_new_score() {
        let config = SimConfig::default();
        let score = Score::new(&config);
        assert_eq!(score.value, 0);
        assert_eq!(score.hunger_frames, 360);
        assert_eq!(score.invulnerable_frames, 60);
    }

    #[test]
    fn test_penalty_amounts() {
        let config = SimConfig::default();
        for (before, after) in [(0, 0), (1, 0), (4, 3), (5, 3), (12, 9), (100, 79)] {
            let mut score = vulnerable(&config, before);
            assert!(score.penalize());
            assert_eq!(score.value, after, "penalty from {before}");
        }
    }

    #[test]
    fn test_penalty_respects_invulnerability() {
        let config = SimConfig::default();
        let mut score = vulnerable(&config, 20);
        assert!(score.penalize());
        assert!(!score.penalize());
        assert_eq!(score.value, 15);
        assert_eq!(score.invulnerable_frames, 60);
    }

    #[test]
    fn test_value_never_negative() {
        let config = SimConfig::default();
        let mut score = vulnerable(&config, 3);
        for _ in 0..10 {
            score.invulnerable_frames = 0;
            score.penalize();
        }
        assert_eq!(score.value, 0);
    }

    #[test]
    fn test_reward_resets_hunger() {
        let config = SimConfig::default();
        let mut score = Score::new(&config);
        score.hunger_frames = 3;
        score.reward();
        assert_eq!(score.value, 1);
        assert_eq!(score.hunger_frames, config.hunger_period);
    }

    #[test]
    fn test_hunger_penalty() {
        let config = SimConfig::default();
        let mut score = vulnerable(&config, 12);
        score.hunger_frames = 0;

        let update = score.update(&harmless_snake(), &config);
        assert!(update.hunger_penalty);
        assert!(update.applied);
        assert!(!update.self_collision);
        assert_eq!(score.value, 9);
        assert_eq!(score.invulnerable_frames, config.invulnerability_frames);
        assert_eq!(score.hunger_frames, config.hunger_period);
    }

    #[test]
    fn test_timers_count_down() {
        let config = SimConfig::default();
        let mut score = Score::new(&config);
        let update = score.update(&harmless_snake(), &config);
        assert_eq!(update, ScoreUpdate::default());
        assert_eq!(score.invulnerable_frames, 59);
        assert_eq!(score.hunger_frames, 359);

        score.invulnerable_frames = 0;
        score.update(&harmless_snake(), &config);
        assert_eq!(score.invulnerable_frames, 0);
    }

    #[test]
    fn test_self_collision_penalty() {
        let config = SimConfig::default();
        // Head curled back onto its own tail segment
        let snake = Snake::from_segments(
            0,
            [Point::new(30, 42), Point::new(40, 54), Point::new(40, 40), Point::new(26, 40)],
            0.0,
        );
        let mut score = vulnerable(&config, 10);

        let update = score.update(&snake, &config);
        assert!(update.self_collision);
        assert!(update.applied);
        assert_eq!(score.value, 7);

        // Next frame: still touching, but invulnerable
        let update = score.update(&snake, &config);
        assert!(update.self_collision);
        assert!(!update.applied);
        assert_eq!(score.value, 7);
    }
}
