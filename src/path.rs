use glam::Vec3;
use serde::Serialize;

use crate::config::{CorridorConfig, Maneuver};

/// Centerline position and travel direction at one block index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CenterlineSample {
    pub position: Vec3,
    /// Tangent angle about the vertical axis, radians.
    pub heading: f32,
}

/// The corridor centerline: lateral offset and tangent heading per block.
///
/// Pure functions of the block index; walls, floor, and camera all sample
/// the same path so their geometry curves together.
pub struct CorridorPath<'a> {
    config: &'a CorridorConfig,
}

impl<'a> CorridorPath<'a> {
    pub fn new(config: &'a CorridorConfig) -> Self {
        Self { config }
    }

    pub fn total_blocks(&self) -> usize {
        self.config.total_blocks
    }

    pub fn config(&self) -> &CorridorConfig {
        self.config
    }

    /// Lateral offset of the centerline at block `i`, in world units.
    pub fn offset(&self, i: usize) -> f32 {
        self.config
            .maneuvers
            .iter()
            .map(|m| maneuver_contribution(m, i))
            .sum()
    }

    /// Tangent angle at block `i` via central difference over the lateral
    /// offset. Neighbor indices are clamped to the domain; the boundary
    /// blocks reuse their own offset rather than extrapolating.
    pub fn heading(&self, i: usize) -> f32 {
        let last = self.config.total_blocks - 1;
        let ahead = self.offset((i + 1).min(last));
        let behind = self.offset(i.saturating_sub(1));
        (ahead - behind).atan2(self.config.step * 2.0)
    }

    pub fn sample(&self, i: usize) -> CenterlineSample {
        CenterlineSample {
            position: Vec3::new(self.offset(i), i as f32 * self.config.step, 0.0),
            heading: self.heading(i),
        }
    }

    /// Unit vector perpendicular to the travel direction at block `i`,
    /// in the floor plane. Cross-sections extend +/- half_width along it.
    pub fn lateral(&self, i: usize) -> Vec3 {
        let heading = self.heading(i);
        Vec3::new(-heading.cos(), heading.sin(), 0.0)
    }
}

/// Raised-cosine ease: zero before the window, smooth ramp inside it, full
/// amplitude held after it. Maneuvers are permanent lateral shifts, not
/// excursions that return to center.
fn maneuver_contribution(m: &Maneuver, i: usize) -> f32 {
    if i < m.start {
        0.0
    } else if i >= m.start + m.span {
        m.amplitude
    } else {
        let t = (i - m.start) as f32 / m.span as f32;
        m.amplitude * 0.5 * (1.0 - (t * std::f32::consts::PI).cos())
    }
}
