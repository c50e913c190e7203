//! Core simulation for snakes on a wrapping playfield
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts feed it per-player [`ControlInput`]s once per frame and read back
//! [`GameState`] snapshots to draw.

pub mod apple;
pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod geometry;
pub mod score;
pub mod snake;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use apple::Apple;
pub use collision::{collides, try_eat};
pub use config::SimConfig;
pub use direction::{ControlInput, steer};
pub use engine::{Cheat, GameEngine, SnakeStepInfo, StepResult};
pub use geometry::{BBox, Playfield, Point};
pub use score::{Score, ScoreUpdate};
pub use snake::{PlayerId, Snake, SnakeState};
pub use state::GameState;
