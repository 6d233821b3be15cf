use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Affine3A, Mat4, Quat, Vec3, Vec4};
use pyre::{
    AnimatedMesh, AnimationClip, AnimationKey, Camera, ClipSource, GameTime, ModelAnimator,
    ParticleDrawUniforms, ParticleEmitterComponent, ParticleEmitterSettings, Transform,
};

/// Two-bone arm waving back and forth over one second.
fn build_arm() -> AnimatedMesh {
    let pose = |angle: f32| {
        vec![
            Mat4::IDENTITY,
            Mat4::from_rotation_translation(Quat::from_rotation_z(angle), Vec3::Y),
        ]
    };

    let wave = AnimationClip::from_keys(
        "Wave",
        24.0,
        vec![
            AnimationKey::new(0.0, pose(0.0)),
            AnimationKey::new(12.0, pose(FRAC_PI_2)),
            AnimationKey::new(24.0, pose(0.0)),
        ],
    );
    let idle = AnimationClip::from_keys(
        "Idle",
        24.0,
        vec![
            AnimationKey::new(0.0, pose(0.0)),
            AnimationKey::new(48.0, pose(0.1)),
        ],
    );

    AnimatedMesh::new("arm", 2, vec![idle, wave])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional JSON settings file as first argument.
    let settings = match std::env::args().nth(1) {
        Some(path) => ParticleEmitterSettings::load(path)?,
        None => ParticleEmitterSettings {
            velocity: Vec3::new(0.0, 1.5, 0.0),
            color: Vec4::new(1.0, 0.6, 0.2, 0.9),
            ..Default::default()
        },
    };

    let mut animator = ModelAnimator::new(Arc::new(build_arm()));
    animator.set_animation_by_name("Wave")?;
    animator.play();

    let mut emitter =
        ParticleEmitterComponent::new(settings, 64)?.with_texture("textures/spark.png");
    let mut emitter_transform = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));

    let mut camera = Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 100.0);
    camera.update_view_projection(&Affine3A::from_translation(Vec3::new(0.0, 1.0, 6.0)));

    let mut time = GameTime::new();
    for frame in 0..240 {
        time.advance(1.0 / 60.0);
        let dt = time.elapsed();

        animator.update(dt);

        // The emitter rides on the tip of the second bone.
        let tip = animator.bone_transforms()[1];
        emitter_transform.update_world_matrix(Some(&Affine3A::from_mat4(tip)));
        let count = emitter.update(dt, &emitter_transform);

        if frame % 60 == 0 {
            let uniforms = ParticleDrawUniforms::from_camera(&camera);
            log::info!(
                "t={:.2}s tick={:.1} particles={count} vertex_bytes={} uniform_bytes={}",
                time.total_seconds(),
                animator.tick_count(),
                emitter.vertex_buffer().as_bytes().len(),
                uniforms.as_bytes().len(),
            );
        }

        if frame == 120 {
            println!("Switching to {:?}, stopping emission", animator.source().clips()[0].name);
            animator.set_animation(0)?;
            animator.play();
            emitter.set_active(false);
        }
    }

    println!(
        "Finished after {} frames: {} particles still alive",
        time.frame_count,
        emitter.active_particles()
    );
    Ok(())
}
