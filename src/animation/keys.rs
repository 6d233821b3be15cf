use crate::animation::clip::AnimationKey;

/// Finds the keys enclosing `tick`.
///
/// The first key is the one with the largest tick strictly before `tick`, the
/// second the one with the smallest tick strictly after it. Keys may be stored
/// in any order, so every key is visited. Among keys with equal ticks the
/// first one stored wins.
///
/// A key sitting exactly on `tick` belongs to neither side and makes the lookup
/// fail: the caller keeps its previous pose instead of snapping to that key.
/// A plain strict scan would instead bracket the neighbours of such a key.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn find_bracketing_keys(
    keys: &[AnimationKey],
    tick: f32,
) -> Option<(&AnimationKey, &AnimationKey)> {
    let mut before: Option<&AnimationKey> = None;
    let mut after: Option<&AnimationKey> = None;

    for key in keys {
        if key.tick == tick {
            return None;
        }
        if key.tick < tick && before.is_none_or(|closest| closest.tick < key.tick) {
            before = Some(key);
        }
        if key.tick > tick && after.is_none_or(|closest| closest.tick > key.tick) {
            after = Some(key);
        }
    }

    Some((before?, after?))
}

/// Position of `tick` between two keys, 0 at `key_a` and 1 at `key_b`.
#[must_use]
pub fn blend_factor(tick: f32, key_a: &AnimationKey, key_b: &AnimationKey) -> f32 {
    let span = key_b.tick - key_a.tick;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    (tick - key_a.tick) / span
}

/// Moves the playback cursor by `passed_ticks` and wraps it into `[0, duration)`.
///
/// `passed_ticks` must already be reduced modulo `duration`, so a single wrap
/// in either direction is enough.
#[must_use]
pub fn advance_tick(tick: f32, passed_ticks: f32, duration: f32, reversed: bool) -> f32 {
    let mut next = if reversed {
        tick - passed_ticks
    } else {
        tick + passed_ticks
    };

    if next < 0.0 {
        next += duration;
    } else if next >= duration {
        next -= duration;
    }

    // Rounding can leave the cursor sitting on `duration` after a backward wrap.
    if (0.0..duration).contains(&next) { next } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    fn key(tick: f32) -> AnimationKey {
        AnimationKey::new(tick, vec![Mat4::IDENTITY])
    }

    #[test]
    fn brackets_unsorted_keys() {
        let keys = vec![key(30.0), key(0.0), key(20.0), key(10.0)];
        let (a, b) = find_bracketing_keys(&keys, 14.0).unwrap();
        assert_eq!(a.tick, 10.0);
        assert_eq!(b.tick, 20.0);
    }

    #[test]
    fn exact_tick_is_not_bracketed() {
        let keys = vec![key(10.0), key(20.0)];
        assert!(find_bracketing_keys(&keys, 10.0).is_none());
        assert!(find_bracketing_keys(&keys, 20.0).is_none());
    }

    #[test]
    fn exact_tick_fails_even_with_neighbours() {
        let keys = vec![key(0.0), key(10.0), key(20.0)];
        assert!(find_bracketing_keys(&keys, 10.0).is_none());
        assert!(find_bracketing_keys(&keys, 10.5).is_some());
    }

    #[test]
    fn duplicate_ticks_keep_first_stored() {
        let mut first = key(5.0);
        first.bone_transforms[0] = Mat4::from_scale(glam::Vec3::splat(2.0));
        let keys = vec![first.clone(), key(5.0), key(10.0)];
        let (a, _) = find_bracketing_keys(&keys, 7.0).unwrap();
        assert_eq!(a, &first);
    }

    #[test]
    fn outside_range_has_no_brackets() {
        let keys = vec![key(5.0), key(10.0)];
        assert!(find_bracketing_keys(&keys, 2.0).is_none());
        assert!(find_bracketing_keys(&keys, 12.0).is_none());
        assert!(find_bracketing_keys(&[], 1.0).is_none());
    }

    #[test]
    fn forward_and_backward_wrap() {
        assert_eq!(advance_tick(40.0, 12.0, 48.0, false), 4.0);
        assert_eq!(advance_tick(4.0, 12.0, 48.0, true), 40.0);
        assert_eq!(advance_tick(0.0, 12.0, 48.0, false), 12.0);
        assert_eq!(advance_tick(36.0, 12.0, 48.0, false), 0.0);
    }

    #[test]
    fn non_finite_step_rewinds_cursor() {
        assert_eq!(advance_tick(10.0, f32::NAN, 48.0, false), 0.0);
        assert_eq!(advance_tick(10.0, f32::INFINITY, 48.0, true), 0.0);
    }
}
