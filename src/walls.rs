use glam::Vec3;
use serde::Serialize;

use crate::path::CorridorPath;
use crate::scene::MaterialKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Placement data for one wall block: position, yaw about the vertical
/// axis, and per-axis dimensions (thickness, longitudinal fill, height).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WallSegment {
    pub side: WallSide,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
    pub material: MaterialKind,
}

/// Builds the left/right wall pair for block `i`.
///
/// Both segments sit at +/- half_width from the centerline along the local
/// normal, rotated to the path heading so the cross-section stays
/// perpendicular to travel through curves. The left wall alternates between
/// the primary and accent materials with a taller variant on odd blocks;
/// the right wall always gets the primary material at standard height.
pub fn build_cross_section(path: &CorridorPath, i: usize) -> (WallSegment, WallSegment) {
    let config = path.config();
    let sample = path.sample(i);
    let lateral = path.lateral(i) * config.half_width;
    let center = sample.position + Vec3::new(0.0, 0.0, config.wall_height * 0.5);

    // Stretch along the local forward axis so rotated segments still bridge
    // the gap to the next block. The 0.5 floor caps the stretch near +/-90
    // degrees.
    let fill = config.step / sample.heading.cos().max(0.5);

    let (material, height) = if i % 2 == 0 {
        (MaterialKind::WallPrimary, config.wall_height)
    } else {
        (MaterialKind::WallAccent, config.wall_height * 1.5)
    };

    let left = WallSegment {
        side: WallSide::Left,
        position: center + lateral,
        yaw: sample.heading,
        scale: Vec3::new(config.wall_thickness, fill, height),
        material,
    };
    let right = WallSegment {
        side: WallSide::Right,
        position: center - lateral,
        yaw: sample.heading,
        scale: Vec3::new(config.wall_thickness, fill, config.wall_height),
        material: MaterialKind::WallPrimary,
    };
    (left, right)
}

/// Builds every wall segment for the corridor, left/right per block in
/// index order.
pub fn build_walls(path: &CorridorPath) -> Vec<WallSegment> {
    let mut segments = Vec::with_capacity(path.total_blocks() * 2);
    for i in 0..path.total_blocks() {
        let (left, right) = build_cross_section(path, i);
        segments.push(left);
        segments.push(right);
    }
    segments
}
