//! Torus Snake - snakes chasing an apple on a wrapping playfield
//!
//! This library provides:
//! - Core simulation (game module): toroidal geometry, steering, body chain,
//!   collisions, apple placement and the shared score
//! - Keyboard mapping for the terminal host (input module)
//! - Canvas rendering (render module) and session stats (metrics module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
