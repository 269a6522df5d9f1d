use anyhow::Result;
use serde::Serialize;

use crate::camera::{self, CameraTrack};
use crate::config::CorridorConfig;
use crate::floor::{build_floor_mesh, FloorMesh};
use crate::path::CorridorPath;
use crate::walls::{build_walls, WallSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialKind {
    WallPrimary,
    WallAccent,
    Floor,
}

/// Named material with an RGB base color, resolved by the host scene
/// collaborator into whatever shading it uses.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialDef {
    pub kind: MaterialKind,
    pub name: &'static str,
    pub base_color: [f32; 3],
}

/// Preview render setup carried alongside the geometry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderSettings {
    pub fps: u32,
    pub frame_start: u32,
    pub frame_end: u32,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

/// Everything the host needs to realize the corridor: wall placements,
/// the floor mesh, the camera track, materials, and render settings.
/// Plain numeric data, handed off atomically.
#[derive(Debug, Clone, Serialize)]
pub struct CorridorScene {
    pub materials: Vec<MaterialDef>,
    pub walls: Vec<WallSegment>,
    pub floor: FloorMesh,
    pub camera: CameraTrack,
    pub render: RenderSettings,
}

fn material_palette() -> Vec<MaterialDef> {
    vec![
        MaterialDef {
            kind: MaterialKind::WallPrimary,
            name: "WallPrimary",
            base_color: [0.1, 0.1, 0.1],
        },
        MaterialDef {
            kind: MaterialKind::WallAccent,
            name: "WallAccent",
            base_color: [0.8, 0.2, 0.0],
        },
        MaterialDef {
            kind: MaterialKind::Floor,
            name: "Floor",
            base_color: [0.15, 0.15, 0.15],
        },
    ]
}

/// Generates the complete corridor scene from a validated configuration.
///
/// Walls, floor, and camera all sample the same `CorridorPath` over the
/// same block range, so the three stay geometrically coherent.
pub fn generate(config: &CorridorConfig) -> Result<CorridorScene> {
    config.validate()?;

    let path = CorridorPath::new(config);
    let total_frames = config.total_frames();

    println!("Generating corridor: {} blocks, {} frames", config.total_blocks, total_frames);

    let walls = build_walls(&path);
    let floor = build_floor_mesh(&path);

    let mut keyframes = camera::build_camera_keyframes(&path, total_frames);
    camera::smooth(&mut keyframes);

    println!(
        "Corridor scene created: {} wall segments, {} floor vertices, {} faces, {} keyframes",
        walls.len(),
        floor.vertex_count(),
        floor.face_count(),
        keyframes.len()
    );

    Ok(CorridorScene {
        materials: material_palette(),
        walls,
        floor,
        camera: CameraTrack { lens_mm: config.lens_mm, keyframes },
        render: RenderSettings {
            fps: config.fps,
            frame_start: 1,
            frame_end: total_frames,
            resolution_x: config.resolution.0,
            resolution_y: config.resolution.1,
        },
    })
}
