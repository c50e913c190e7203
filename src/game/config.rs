use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::geometry::Playfield;

/// Configuration for the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Width of the wrapping playfield
    pub width: i32,
    /// Height of the wrapping playfield
    pub height: i32,

    /// Frames per movement cycle
    pub period: u32,
    /// Thickness of a snake's body
    pub snake_width: i32,
    /// Length of one body segment
    pub segment_len: i32,
    /// Maximum change of heading per frame, in radians
    pub max_turn: f32,

    /// Frames until hunger costs points
    pub hunger_period: u32,
    /// Frames of protection after a penalty
    pub invulnerability_frames: u32,

    /// Radius of the apple
    pub apple_radius: i32,
    /// Coordinate jump treated as a seam crossing; tuned together with `segment_len`
    pub wrap_threshold: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 160,
            period: 10,
            snake_width: 7,
            segment_len: 14,
            max_turn: 0.1,
            hunger_period: 6 * 60,
            invulnerability_frames: 60,
            apple_radius: 5,
            wrap_threshold: 30,
        }
    }
}

impl SimConfig {
    /// Create a new configuration with custom playfield size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(120, 90)
    }

    /// Create a large playfield
    pub fn large() -> Self {
        Self::new(320, 240)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SimConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that break apple placement or seam detection
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.apple_radius >= 0,
            "apple radius must not be negative (got {})",
            self.apple_radius
        );
        ensure!(
            self.width > self.apple_radius * 2 && self.height > self.apple_radius * 2,
            "playfield {}x{} is too small for an apple of radius {}",
            self.width,
            self.height,
            self.apple_radius
        );
        ensure!(self.period > 0, "movement period must be at least one frame");
        ensure!(self.segment_len > 0, "segment length must be positive");
        ensure!(self.snake_width > 0, "snake width must be positive");
        ensure!(
            self.max_turn.is_finite() && self.max_turn > 0.0,
            "max turn must be a positive finite angle (got {})",
            self.max_turn
        );
        ensure!(
            self.wrap_threshold > self.segment_len,
            "wrap threshold {} must exceed segment length {}",
            self.wrap_threshold,
            self.segment_len
        );
        ensure!(
            self.width > self.wrap_threshold && self.height > self.wrap_threshold,
            "playfield {}x{} must be larger than the wrap threshold {}",
            self.width,
            self.height,
            self.wrap_threshold
        );
        ensure!(self.hunger_period > 0, "hunger period must be positive");
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height, self.wrap_threshold)
    }

    /// Margin around body segments used for hit tests
    pub fn body_margin(&self) -> i32 {
        self.snake_width / 2
    }

    /// Mouth-to-apple distance at which the apple gets eaten
    pub fn eat_distance(&self) -> f32 {
        (self.apple_radius + self.body_margin()) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.period, 10);
        assert_eq!(config.segment_len, 14);
        assert_eq!(config.hunger_period, 360);
        assert_eq!(config.invulnerability_frames, 60);
        assert_eq!(config.body_margin(), 3);
        assert_eq!(config.eat_distance(), 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = SimConfig::new(200, 150);
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 150);
        assert_eq!(config.playfield().wrap_threshold, 30);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(SimConfig::small().validate().is_ok());
        assert!(SimConfig::large().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_playfield() {
        let config = SimConfig::new(10, 150);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn test_rejects_degenerate_motion() {
        let mut config = SimConfig::default();
        config.period = 0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.max_turn = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.wrap_threshold = config.segment_len;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_partial_config() {
        let config: SimConfig = serde_json::from_str(r#"{"width": 240, "max_turn": 0.2}"#).unwrap();
        assert_eq!(config.width, 240);
        assert_eq!(config.height, 160);
        assert_eq!(config.max_turn, 0.2);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("torus_snake_cfg_{}.json", std::process::id()));
        let config = SimConfig::large();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SimConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SimConfig::from_json_file(Path::new("/nonexistent/torus.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/torus.json"));
    }
}
