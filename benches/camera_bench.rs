//! Per-frame camera costs: mouse look, movement and matrix construction.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use freelook::camera::{Camera, CameraController};
use freelook::input::MovementIntent;
use freelook::Options;
use glam::Vec3;

fn rotate_benchmark(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    let _ = c.bench_function("camera_rotate", |b| {
        b.iter(|| camera.rotate(black_box(3.0), black_box(-2.0), true));
    });
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let camera =
        Camera::with_orientation(Vec3::new(1.0, 2.0, 3.0), 30.0, -15.0);
    let _ = c.bench_function("camera_view_matrix", |b| {
        b.iter(|| black_box(&camera).view_matrix());
    });
}

fn frame_update_benchmark(c: &mut Criterion) {
    let mut controller = CameraController::new(800, 600, &Options::default());
    let intent = MovementIntent {
        forward: true,
        right: true,
        accelerate: true,
        ..MovementIntent::default()
    };
    let _ = c.bench_function("controller_frame", |b| {
        b.iter(|| {
            controller.apply_movement(black_box(intent), black_box(0.016));
            controller.refresh_uniform();
        });
    });
}

criterion_group!(
    benches,
    rotate_benchmark,
    view_matrix_benchmark,
    frame_update_benchmark
);
criterion_main!(benches);
