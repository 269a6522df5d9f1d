use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use corridor_gen::config::CorridorConfig;
use corridor_gen::floor::build_floor_mesh;
use corridor_gen::path::CorridorPath;
use corridor_gen::{camera, walls};

/// Benchmark: sampling the centerline offset across the whole corridor
fn bench_offset_sampling(c: &mut Criterion) {
    let config = CorridorConfig::default();
    let path = CorridorPath::new(&config);

    c.bench_function("offset_sampling_60_blocks", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in 0..config.total_blocks {
                sum += path.offset(black_box(i));
            }
            black_box(sum)
        })
    });
}

/// Benchmark: floor mesh synthesis at increasing corridor lengths
fn bench_floor_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor_mesh");

    for blocks in [60usize, 240, 960] {
        let mut config = CorridorConfig::default();
        config.total_blocks = blocks;
        config.duration_s = blocks as f32 / config.fps as f32;

        group.bench_with_input(BenchmarkId::from_parameter(blocks), &config, |b, config| {
            let path = CorridorPath::new(config);
            b.iter(|| black_box(build_floor_mesh(&path)))
        });
    }
    group.finish();
}

/// Benchmark: wall placement for the full corridor
fn bench_walls(c: &mut Criterion) {
    let config = CorridorConfig::default();
    let path = CorridorPath::new(&config);

    c.bench_function("build_walls_60_blocks", |b| {
        b.iter(|| black_box(walls::build_walls(&path)))
    });
}

/// Benchmark: camera keyframe sampling for the full corridor
fn bench_camera_keyframes(c: &mut Criterion) {
    let config = CorridorConfig::default();
    let path = CorridorPath::new(&config);
    let total_frames = config.total_frames();

    c.bench_function("camera_keyframes_60_blocks", |b| {
        b.iter(|| black_box(camera::build_camera_keyframes(&path, total_frames)))
    });
}

criterion_group!(
    benches,
    bench_offset_sampling,
    bench_floor_mesh,
    bench_walls,
    bench_camera_keyframes
);
criterion_main!(benches);
