use glam::Vec3;
use serde::Serialize;
use std::f32::consts::FRAC_PI_2;

use crate::path::CorridorPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interpolation {
    Linear,
    Bezier,
}

/// A timed camera sample: frame number, world position, and XYZ Euler
/// rotation (pitch, roll, yaw).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraKeyframe {
    pub frame: u32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub interpolation: Interpolation,
}

/// The full fly-through: one keyframe per corridor block.
#[derive(Debug, Clone, Serialize)]
pub struct CameraTrack {
    pub lens_mm: f32,
    pub keyframes: Vec<CameraKeyframe>,
}

/// Samples the centerline into camera keyframes.
///
/// The camera rides the centerline at eye height, pitched 90 degrees to
/// look down the corridor and yawed to the path heading. Frames spread
/// proportionally to block index (not arc length), first sample at frame 1
/// and last at `total_frames`.
pub fn build_camera_keyframes(path: &CorridorPath, total_frames: u32) -> Vec<CameraKeyframe> {
    let blocks = path.total_blocks();
    let eye_height = path.config().eye_height;
    let mut keyframes = Vec::with_capacity(blocks);

    for i in 0..blocks {
        let t = i as f32 / (blocks - 1) as f32;
        let frame = (1.0 + t * (total_frames - 1) as f32).round() as u32;

        let sample = path.sample(i);
        keyframes.push(CameraKeyframe {
            frame,
            position: Vec3::new(sample.position.x, sample.position.y, eye_height),
            rotation: Vec3::new(FRAC_PI_2, 0.0, sample.heading),
            interpolation: Interpolation::Linear,
        });
    }
    keyframes
}

/// Switches every keyframe to Bezier interpolation so playback eases
/// between samples instead of moving at constant velocity.
pub fn smooth(keyframes: &mut [CameraKeyframe]) {
    for kf in keyframes {
        kf.interpolation = Interpolation::Bezier;
    }
}
