pub mod camera;
pub mod cli;
pub mod config;
pub mod floor;
pub mod path;
pub mod scene;
pub mod walls;

// Re-export the builder entry points
pub use camera::{build_camera_keyframes, CameraKeyframe, CameraTrack, Interpolation};
pub use config::{CorridorConfig, Maneuver};
pub use floor::{build_floor_mesh, FloorMesh};
pub use path::{CenterlineSample, CorridorPath};
pub use scene::{generate, CorridorScene, MaterialKind};
pub use walls::{build_cross_section, build_walls, WallSegment, WallSide};
