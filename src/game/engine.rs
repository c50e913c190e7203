use anyhow::Result;
use rand::RngCore;
use rand::rngs::ThreadRng;

use super::{
    apple::Apple,
    collision::try_eat,
    config::SimConfig,
    direction::ControlInput,
    score::{Score, ScoreUpdate},
    snake::{PlayerId, Snake},
    state::GameState,
};

/// Information about one snake's step
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeStepInfo {
    pub player: PlayerId,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Hunger and collision outcome of the shared score update
    pub score: ScoreUpdate,
}

/// Result of a simulation step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Frame number that was just simulated
    pub frame: u64,
    /// Shared score after the step
    pub score: u32,
    /// Per-snake details, in registration order
    pub snakes: Vec<SnakeStepInfo>,
}

impl StepResult {
    pub fn any_ate(&self) -> bool {
        self.snakes.iter().any(|info| info.ate_apple)
    }

    pub fn any_penalty(&self) -> bool {
        self.snakes.iter().any(|info| info.score.applied)
    }
}

/// Debug controls that bypass the normal eating and collision triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cheat {
    /// Move the apple somewhere else (without avoiding snakes)
    RelocateApple,
    /// Apply this many rewards
    Reward(u32),
    /// Apply this many penalties
    Penalize(u32),
}

impl Cheat {
    /// Decode the integer cheat protocol: 1 relocates, 2 rewards, 3 penalizes
    pub fn from_code(code: i32, value: i32) -> Option<Self> {
        let times = value.max(0) as u32;
        match code {
            1 => Some(Cheat::RelocateApple),
            2 => Some(Cheat::Reward(times)),
            3 => Some(Cheat::Penalize(times)),
            _ => None,
        }
    }
}

/// Advances snakes, apple and score one frame at a time
pub struct GameEngine<R: RngCore = ThreadRng> {
    config: SimConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new engine with the given configuration
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: RngCore> GameEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Start a new game with one snake per player, in the given order
    pub fn reset(&mut self, players: &[PlayerId]) -> GameState {
        let apple = Apple::new(&self.config, &mut self.rng);
        let snakes = players
            .iter()
            .map(|&player| Snake::new(player, &self.config))
            .collect();
        tracing::info!(
            players = players.len(),
            width = self.config.width,
            height = self.config.height,
            "game reset"
        );
        GameState::new(snakes, apple, Score::new(&self.config))
    }

    /// Execute one frame.
    ///
    /// `inputs[i]` steers the i-th snake; snakes without an entry keep their
    /// heading. Every snake is fully updated, then tries to eat, then
    /// charges the shared score, before the next snake moves.
    pub fn step(&mut self, state: &mut GameState, inputs: &[ControlInput]) -> StepResult {
        state.frame += 1;
        let frame = state.frame;
        let mut snakes = Vec::with_capacity(state.snakes.len());

        for (i, snake) in state.snakes.iter_mut().enumerate() {
            snake.update(
                frame,
                inputs.get(i),
                state.apple.pos,
                &self.config,
                &mut self.rng,
            );

            let ate_apple = try_eat(
                snake,
                &mut state.apple,
                &mut state.score,
                &self.config,
                &mut self.rng,
            );
            if ate_apple {
                tracing::debug!(
                    player = snake.player(),
                    frame,
                    score = state.score.value,
                    "apple eaten"
                );
            }

            let update = state.score.update(snake, &self.config);
            if update.applied {
                tracing::debug!(
                    player = snake.player(),
                    frame,
                    hunger = update.hunger_penalty,
                    self_collision = update.self_collision,
                    score = state.score.value,
                    "score penalty"
                );
            }

            snakes.push(SnakeStepInfo {
                player: snake.player(),
                ate_apple,
                score: update,
            });
        }

        StepResult {
            frame,
            score: state.score.value,
            snakes,
        }
    }

    /// Apply a debug control. Returns 1 for a relocation, otherwise the new score.
    pub fn cheat(&mut self, state: &mut GameState, cheat: Cheat) -> u32 {
        tracing::debug!(?cheat, "cheat applied");
        match cheat {
            Cheat::RelocateApple => {
                state.apple.relocate(&self.config, &mut self.rng);
                1
            }
            Cheat::Reward(times) => {
                for _ in 0..times {
                    state.score.reward();
                }
                state.score.value
            }
            Cheat::Penalize(times) => {
                for _ in 0..times {
                    state.score.penalize();
                }
                state.score.value
            }
        }
    }

    /// Integer form of [`GameEngine::cheat`]; unknown codes return 0
    pub fn cheat_code(&mut self, state: &mut GameState, code: i32, value: i32) -> i64 {
        match Cheat::from_code(code, value) {
            Some(cheat) => i64::from(self.cheat(state, cheat)),
            None => 0,
        }
    }
}
