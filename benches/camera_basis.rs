use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use ray_marcher::camera::{Camera, CameraMovement};
use ray_marcher::core::{Button, InputQueue};
use ray_marcher::input::InputMapper;
use ray_marcher::viewport::{Extent, Viewport};

/// Basis re-derivation after a mouse delta
fn bench_mouse_rotation(c: &mut Criterion) {
    let mut camera = Camera::default();
    c.bench_function("mouse_rotation", |b| {
        b.iter(|| {
            camera.process_mouse_movement(black_box(3.0), black_box(-1.5), true);
        })
    });
}

fn bench_keyboard_movement(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, 30.0, 10.0);
    c.bench_function("keyboard_movement", |b| {
        b.iter(|| {
            camera.process_keyboard(black_box(CameraMovement::Forward), black_box(0.016));
        })
    });
}

fn bench_view_matrices(c: &mut Criterion) {
    let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -45.0, 20.0);
    let mut group = c.benchmark_group("view_matrices");

    group.bench_function("view_matrix", |b| b.iter(|| black_box(&camera).view_matrix()));
    group.bench_function("camera_to_world", |b| {
        b.iter(|| black_box(&camera).camera_to_world())
    });

    group.finish();
}

/// Full per-frame input path: held keys plus a burst of cursor samples
fn bench_input_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_frame");

    for samples in [1usize, 8, 64].iter() {
        group.bench_with_input(BenchmarkId::new("cursor_samples", samples), samples, |b, &n| {
            let mut camera = Camera::default();
            let mut mapper = InputMapper::new(true);
            let mut queue = InputQueue::new();
            queue.press(Button::KeyW);
            queue.press(Button::KeyD);

            b.iter(|| {
                for i in 0..n {
                    let p = Vec2::new((i % 17) as f32, (i % 11) as f32);
                    mapper.cursor_moved(p, &mut camera);
                }
                mapper.apply_held_keys(&queue, &mut camera, 0.016);
                black_box(camera.camera_to_world());
            })
        });
    }

    group.finish();
}

fn bench_viewport_resize(c: &mut Criterion) {
    let mut viewport = Viewport::new(Extent::new(1280, 720), 45.0);
    let sizes = [Extent::new(1280, 720), Extent::new(1920, 1080)];
    let mut i = 0;
    c.bench_function("viewport_resize", |b| {
        b.iter(|| {
            i ^= 1;
            black_box(viewport.resize(sizes[i]));
        })
    });
}

criterion_group!(
    benches,
    bench_mouse_rotation,
    bench_keyboard_movement,
    bench_view_matrices,
    bench_input_frame,
    bench_viewport_resize
);
criterion_main!(benches);
