use std::sync::Arc;

use glam::Mat4;
use log::{debug, warn};

use crate::animation::clip::AnimationClip;
use crate::animation::keys::{advance_tick, blend_factor, find_bracketing_keys};
use crate::animation::source::{AnimatedMesh, ClipSource};
use crate::animation::values::blend_bone_transform;
use crate::errors::{PyreError, Result};

/// Plays one clip of an animated mesh and produces the blended bone transforms.
///
/// The animator is driven once per frame with [`update`](Self::update). While
/// no clip is selected, or while paused, the published transforms do not change.
/// Selecting a clip that does not exist is a recovered error: a warning is
/// logged, the identity pose is published and the error is returned.
#[derive(Debug, Clone)]
pub struct ModelAnimator<S: ClipSource = AnimatedMesh> {
    source: Arc<S>,
    current_clip: Option<Arc<AnimationClip>>,

    tick_count: f32,
    animation_speed: f32,
    reversed: bool,
    is_playing: bool,

    /// Always holds exactly one matrix per bone.
    transforms: Vec<Mat4>,
}

impl<S: ClipSource> ModelAnimator<S> {
    /// Creates a paused animator with the first clip of `source` selected.
    ///
    /// An asset without clips leaves the animator on the identity pose.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        let bone_count = source.bone_count();
        let mut animator = Self {
            source,
            current_clip: None,
            tick_count: 0.0,
            animation_speed: 1.0,
            reversed: false,
            is_playing: false,
            transforms: vec![Mat4::IDENTITY; bone_count],
        };
        if let Err(err) = animator.set_animation(0) {
            debug!("ModelAnimator: starting on the identity pose: {err}");
        }
        animator
    }

    // ========================================================================
    // Clip selection
    // ========================================================================

    /// Selects the clip at `index` on the source asset.
    pub fn set_animation(&mut self, index: usize) -> Result<()> {
        self.current_clip = None;

        let Some(clip) = self.source.clip(index).cloned() else {
            let count = self.source.clip_count();
            self.reset(true);
            warn!("ModelAnimator: clip index {index} exceeds the clip count ({count})");
            return Err(PyreError::ClipIndexOutOfBounds { index, count });
        };

        self.apply_clip(clip)
    }

    /// Selects the first clip whose name matches `name` exactly.
    pub fn set_animation_by_name(&mut self, name: &str) -> Result<()> {
        self.current_clip = None;

        let Some(clip) = self.source.find_clip(name).cloned() else {
            self.reset(true);
            warn!("ModelAnimator: clip with name \"{name}\" was not found");
            return Err(PyreError::ClipNotFound(name.to_string()));
        };

        self.apply_clip(clip)
    }

    /// Plays a clip that does not come from the source asset.
    ///
    /// Owned clips are moved behind an `Arc`, so the caller keeps no way to
    /// mutate what is being played.
    pub fn set_animation_clip(&mut self, clip: impl Into<Arc<AnimationClip>>) -> Result<()> {
        self.apply_clip(clip.into())
    }

    fn apply_clip(&mut self, clip: Arc<AnimationClip>) -> Result<()> {
        let bone_count = self.source.bone_count();

        if clip.keys.is_empty() {
            self.current_clip = None;
            self.reset(true);
            warn!("ModelAnimator: clip \"{}\" has no keys", clip.name);
            return Err(PyreError::EmptyClip(clip.name.clone()));
        }

        if let Some(key) = clip
            .keys
            .iter()
            .find(|key| key.bone_transforms.len() != bone_count)
        {
            let found = key.bone_transforms.len();
            self.current_clip = None;
            self.reset(true);
            warn!(
                "ModelAnimator: clip \"{}\" has a key with {found} bone transforms, skeleton has {bone_count}",
                clip.name
            );
            return Err(PyreError::BoneCountMismatch {
                clip: clip.name.clone(),
                expected: bone_count,
                found,
            });
        }

        self.current_clip = Some(clip);
        self.reset(false);
        Ok(())
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Rewinds to tick zero at normal speed and republishes the rest pose.
    ///
    /// The rest pose is the first stored key of the current clip, or the
    /// identity for every bone when no clip is selected.
    pub fn reset(&mut self, pause: bool) {
        if pause {
            self.is_playing = false;
        }

        self.tick_count = 0.0;
        self.animation_speed = 1.0;

        self.transforms.clear();
        match self.current_clip.as_deref().and_then(|clip| clip.keys.first()) {
            Some(key) => self.transforms.extend_from_slice(&key.bone_transforms),
            None => self
                .transforms
                .resize(self.source.bone_count(), Mat4::IDENTITY),
        }
    }

    /// Advances playback by `elapsed_seconds` and blends the enclosing keys.
    pub fn update(&mut self, elapsed_seconds: f32) {
        if !self.is_playing {
            return;
        }
        let Some(clip) = self.current_clip.as_deref() else {
            return;
        };
        if clip.duration <= 0.0 {
            return;
        }

        // 1. Wall time to ticks, never more than one loop per frame
        let passed_ticks =
            (elapsed_seconds * clip.ticks_per_second * self.animation_speed) % clip.duration;
        if !passed_ticks.is_finite() {
            warn!("ModelAnimator: ignoring non-finite elapsed time {elapsed_seconds}");
            return;
        }

        // 2. Circular playback in either direction
        self.tick_count = advance_tick(self.tick_count, passed_ticks, clip.duration, self.reversed);

        // 3. Enclosing keys
        let Some((key_a, key_b)) = find_bracketing_keys(&clip.keys, self.tick_count) else {
            warn!(
                "ModelAnimator: no enclosing keys for tick {} in clip \"{}\"",
                self.tick_count, clip.name
            );
            return;
        };

        // 4. Blend every bone between the two keys
        let t = blend_factor(self.tick_count, key_a, key_b);
        self.transforms.clear();
        self.transforms.extend(
            key_a
                .bone_transforms
                .iter()
                .zip(&key_b.bone_transforms)
                .map(|(a, b)| blend_bone_transform(a, b, t)),
        );
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = speed;
    }

    pub fn set_playback_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    // ========================================================================
    // Getters
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[inline]
    #[must_use]
    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    /// Playback cursor in clip ticks.
    #[inline]
    #[must_use]
    pub fn tick_count(&self) -> f32 {
        self.tick_count
    }

    #[inline]
    #[must_use]
    pub fn is_clip_set(&self) -> bool {
        self.current_clip.is_some()
    }

    #[must_use]
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.current_clip.as_deref()
    }

    #[must_use]
    pub fn clip_name(&self) -> Option<&str> {
        self.current_clip.as_deref().map(|clip| clip.name.as_str())
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.source.clip_count()
    }

    #[must_use]
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Current pose, one matrix per bone, ready for skinning.
    #[inline]
    #[must_use]
    pub fn bone_transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// Byte view of the current pose for a storage or uniform buffer upload.
    #[must_use]
    pub fn bone_transforms_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }
}
