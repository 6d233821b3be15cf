use glam::Mat4;

/// A snapshot of every bone transform at one tick of a clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationKey {
    pub tick: f32,
    /// One local transform per bone, in skeleton order.
    pub bone_transforms: Vec<Mat4>,
}

impl AnimationKey {
    #[must_use]
    pub fn new(tick: f32, bone_transforms: Vec<Mat4>) -> Self {
        Self {
            tick,
            bone_transforms,
        }
    }
}

/// A named sequence of keys, played back in ticks.
///
/// Keys are not required to be stored in tick order; the animator scans all
/// of them when looking for the pair enclosing the playback cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub ticks_per_second: f32,
    /// Clip length in ticks.
    pub duration: f32,
    pub keys: Vec<AnimationKey>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ticks_per_second: f32,
        duration: f32,
        keys: Vec<AnimationKey>,
    ) -> Self {
        Self {
            name: name.into(),
            ticks_per_second,
            duration,
            keys,
        }
    }

    /// Builds a clip whose duration is the largest key tick.
    #[must_use]
    pub fn from_keys(name: impl Into<String>, ticks_per_second: f32, keys: Vec<AnimationKey>) -> Self {
        let duration = keys.iter().map(|k| k.tick).fold(0.0_f32, f32::max);
        Self::new(name, ticks_per_second, duration, keys)
    }

    /// Clip length in seconds at normal speed.
    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        if self.ticks_per_second > 0.0 {
            self.duration / self.ticks_per_second
        } else {
            0.0
        }
    }

    /// Bone count of the first key, if any.
    #[must_use]
    pub fn bone_count(&self) -> Option<usize> {
        self.keys.first().map(|k| k.bone_transforms.len())
    }
}
