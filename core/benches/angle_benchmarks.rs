use criterion::{Criterion, black_box, criterion_group, criterion_main};

use viewcube_core::math::{clamp_pitch, normalize_degrees, shortest_signed_delta};
use viewcube_core::{Face, Rotation};

// ---------------------------------------------------------------------------
// Angle math
// ---------------------------------------------------------------------------

fn bench_shortest_signed_delta(c: &mut Criterion) {
    c.bench_function("shortest_signed_delta", |b| {
        b.iter(|| shortest_signed_delta(black_box(170.0), black_box(-170.0)));
    });
}

fn bench_normalize_degrees(c: &mut Criterion) {
    c.bench_function("normalize_degrees", |b| {
        b.iter(|| normalize_degrees(black_box(-765.0)));
    });
}

fn bench_clamp_pitch(c: &mut Criterion) {
    c.bench_function("clamp_pitch", |b| {
        b.iter(|| clamp_pitch(black_box(123.0)));
    });
}

// ---------------------------------------------------------------------------
// Matrix construction
// ---------------------------------------------------------------------------

fn bench_scene_matrix(c: &mut Criterion) {
    let rotation = Rotation { pitch: -20.0, yaw: -30.0 };
    c.bench_function("scene_matrix", |b| {
        b.iter(|| black_box(rotation).scene_matrix());
    });
}

fn bench_face_placements(c: &mut Criterion) {
    c.bench_function("face_placement_matrices", |b| {
        b.iter(|| {
            for face in Face::ALL {
                black_box(face.placement_matrix(black_box(60.0)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_shortest_signed_delta,
    bench_normalize_degrees,
    bench_clamp_pitch,
    bench_scene_matrix,
    bench_face_placements,
);
criterion_main!(benches);
