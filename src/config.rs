use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One lateral lane-change maneuver of the corridor centerline.
///
/// The maneuver ramps from zero to `amplitude` over the block window
/// `[start, start + span)` with a raised-cosine ease, then holds the full
/// amplitude for every later block. Amplitude sign encodes direction;
/// contributions from multiple maneuvers add.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Maneuver {
    pub start: usize,
    pub span: usize,
    pub amplitude: f32,
}

/// All constants consumed by the corridor builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    /// Lateral distance from the centerline to each wall and floor edge.
    pub half_width: f32,
    /// Longitudinal distance between consecutive blocks.
    pub step: f32,
    pub total_blocks: usize,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub maneuvers: Vec<Maneuver>,
    pub fps: u32,
    pub duration_s: f32,
    /// Camera height above the floor.
    pub eye_height: f32,
    pub lens_mm: f32,
    pub resolution: (u32, u32),
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            half_width: 3.0,
            step: 3.0,
            total_blocks: 60,
            wall_height: 3.0,
            wall_thickness: 1.0,
            maneuvers: vec![
                Maneuver { start: 15, span: 15, amplitude: 6.0 },
                Maneuver { start: 38, span: 15, amplitude: -6.0 },
            ],
            fps: 24,
            duration_s: 2.5,
            eye_height: 1.6,
            lens_mm: 50.0,
            resolution: (1280, 720),
        }
    }
}

impl CorridorConfig {
    /// Loads a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Total animation frame count, frames numbered 1..=total_frames.
    pub fn total_frames(&self) -> u32 {
        (self.fps as f32 * self.duration_s).round() as u32
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.total_blocks >= 2,
            "total_blocks must be at least 2, got {}",
            self.total_blocks
        );
        ensure!(self.step > 0.0, "step must be positive, got {}", self.step);
        ensure!(
            self.half_width > 0.0,
            "half_width must be positive, got {}",
            self.half_width
        );
        for (n, m) in self.maneuvers.iter().enumerate() {
            ensure!(m.span > 0, "maneuver {} has zero span", n);
        }
        // Keyframe frames must be strictly increasing: with rounded frame
        // assignment that needs a per-block stride of at least one frame.
        ensure!(
            self.total_frames() as usize >= self.total_blocks,
            "animation too short: {} frames for {} blocks",
            self.total_frames(),
            self.total_blocks
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CorridorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_blocks, 60);
        assert_eq!(config.total_frames(), 60);
    }

    #[test]
    fn test_rejects_degenerate_block_count() {
        let mut config = CorridorConfig::default();
        config.total_blocks = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_span_maneuver() {
        let mut config = CorridorConfig::default();
        config.maneuvers.push(Maneuver { start: 5, span: 0, amplitude: 1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_too_few_frames() {
        let mut config = CorridorConfig::default();
        config.duration_s = 1.0; // 24 frames for 60 blocks
        assert!(config.validate().is_err());
    }
}
