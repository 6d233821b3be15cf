use std::sync::Arc;

use crate::animation::clip::AnimationClip;

/// Read-only access to the clips and skeleton size of an animated mesh asset.
///
/// The animator only ever queries its source; clips handed out are shared
/// immutably, so edits to the asset cannot leak into a playing animator.
pub trait ClipSource {
    fn bone_count(&self) -> usize;

    fn clips(&self) -> &[Arc<AnimationClip>];

    fn clip_count(&self) -> usize {
        self.clips().len()
    }

    fn clip(&self, index: usize) -> Option<&Arc<AnimationClip>> {
        self.clips().get(index)
    }

    /// First clip whose name matches exactly (case-sensitive).
    fn find_clip(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips().iter().find(|clip| clip.name == name)
    }
}

/// Skinned mesh animation data as delivered by the asset loader.
#[derive(Debug, Clone, Default)]
pub struct AnimatedMesh {
    pub name: String,
    bone_count: usize,
    clips: Vec<Arc<AnimationClip>>,
}

impl AnimatedMesh {
    #[must_use]
    pub fn new(name: impl Into<String>, bone_count: usize, clips: Vec<AnimationClip>) -> Self {
        Self {
            name: name.into(),
            bone_count,
            clips: clips.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.push(Arc::new(clip));
    }
}

impl ClipSource for AnimatedMesh {
    fn bone_count(&self) -> usize {
        self.bone_count
    }

    fn clips(&self) -> &[Arc<AnimationClip>] {
        &self.clips
    }
}
