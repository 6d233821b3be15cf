use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};
use pyre::{AnimatedMesh, AnimationClip, AnimationKey, ModelAnimator};
use pyre::{ParticleEmitterComponent, ParticleEmitterSettings};

const BONE_COUNT: usize = 64;

/// A 64-bone clip with 30 keys, each bone swinging around Y.
fn create_test_mesh() -> Arc<AnimatedMesh> {
    let keys = (0..30)
        .map(|i| {
            let tick = i as f32 * 10.0;
            let bones = (0..BONE_COUNT)
                .map(|bone| {
                    Mat4::from_scale_rotation_translation(
                        Vec3::ONE,
                        Quat::from_rotation_y(i as f32 * 0.1 + bone as f32 * 0.01),
                        Vec3::new(bone as f32, 0.0, 0.0),
                    )
                })
                .collect();
            AnimationKey::new(tick, bones)
        })
        .collect();

    let clip = AnimationClip::from_keys("Swing", 30.0, keys);
    Arc::new(AnimatedMesh::new("bench", BONE_COUNT, vec![clip]))
}

fn animator_benchmark(c: &mut Criterion) {
    let mut animator = ModelAnimator::new(create_test_mesh());
    animator.play();

    c.bench_function("animator_update_64_bones", |b| {
        b.iter(|| {
            animator.update(black_box(1.0 / 60.0));
            black_box(animator.bone_transforms());
        });
    });
}

fn emitter_benchmark(c: &mut Criterion) {
    let settings = ParticleEmitterSettings {
        velocity: Vec3::new(0.0, 2.0, 0.0),
        ..Default::default()
    };

    for count in [256, 4096] {
        let mut emitter = ParticleEmitterComponent::with_seed(settings, count, 1).unwrap();
        // Warm up until the pool is saturated.
        for _ in 0..600 {
            emitter.update(1.0 / 60.0, &Vec3::ZERO);
        }

        c.bench_function(&format!("emitter_update_{count}"), |b| {
            b.iter(|| black_box(emitter.update(black_box(1.0 / 60.0), &Vec3::ZERO)));
        });
    }
}

criterion_group!(benches, animator_benchmark, emitter_benchmark);
criterion_main!(benches);
