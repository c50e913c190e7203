use super::apple::Apple;
use super::score::Score;
use super::snake::Snake;

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Snakes in registration order
    pub snakes: Vec<Snake>,
    pub apple: Apple,
    /// Shared by every snake
    pub score: Score,
    /// Frames simulated since reset
    pub frame: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snakes: Vec<Snake>, apple: Apple, score: Score) -> Self {
        Self {
            snakes,
            apple,
            score,
            frame: 0,
        }
    }

    /// Position of the current movement cycle, `0..period`
    pub fn frame_in_cycle(&self, period: u32) -> u32 {
        (self.frame % u64::from(period)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::SimConfig;
    use crate::game::geometry::Point;

    #[test]
    fn test_frame_in_cycle() {
        let config = SimConfig::default();
        let mut state = GameState::new(
            vec![Snake::new(0, &config)],
            Apple::at(Point::new(80, 80)),
            Score::new(&config),
        );
        assert_eq!(state.frame_in_cycle(config.period), 0);
        state.frame = 27;
        assert_eq!(state.frame_in_cycle(config.period), 7);
    }
}
