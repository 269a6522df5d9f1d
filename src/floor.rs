use glam::Vec3;
use serde::Serialize;

use crate::path::CorridorPath;

/// A quad-strip mesh following the corridor centerline at z = 0.
///
/// Vertices come in left/right pairs per block; each face bridges two
/// consecutive blocks. Built fully in memory before handoff.
#[derive(Debug, Clone, Serialize)]
pub struct FloorMesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[u32; 4]>,
}

impl FloorMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Builds the continuous floor ribbon for the whole corridor.
///
/// Edge vertices sit at +/- half_width along the local normal, not along
/// world X, so the ribbon edge stays perpendicular to travel through
/// curves. Winding (left_i, right_i, right_i+1, left_i+1) keeps every face
/// normal pointing up.
pub fn build_floor_mesh(path: &CorridorPath) -> FloorMesh {
    let blocks = path.total_blocks();
    let half_width = path.config().half_width;

    let mut vertices = Vec::with_capacity(blocks * 2);
    let mut faces = Vec::with_capacity(blocks.saturating_sub(1));

    for i in 0..blocks {
        let center = path.sample(i).position;
        let lateral = path.lateral(i) * half_width;
        vertices.push(center + lateral);
        vertices.push(center - lateral);
    }

    for i in 0..blocks.saturating_sub(1) {
        let a = (i * 2) as u32;
        faces.push([a, a + 1, a + 3, a + 2]);
    }

    FloorMesh { vertices, faces }
}
