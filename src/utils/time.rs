use std::time::{Duration, Instant};

/// Frame clock handing out the elapsed time each component update consumes.
///
/// [`tick`](Self::tick) measures wall time; [`advance`](Self::advance) steps
/// by a fixed amount for deterministic simulation and tests.
#[derive(Debug, Clone)]
pub struct GameTime {
    last_update: Instant,
    /// Time since the previous frame
    pub delta: Duration,
    /// Total simulated time
    pub total: Duration,
    /// Number of frames advanced
    pub frame_count: u64,
    /// Multiplier applied to every frame delta, 0 pauses the clock
    pub time_scale: f32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            delta: Duration::ZERO,
            total: Duration::ZERO,
            frame_count: 0,
            time_scale: 1.0,
        }
    }

    /// Advances by the wall time passed since the previous call.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let wall = now - self.last_update;
        self.last_update = now;
        self.step(wall);
    }

    /// Advances by a fixed `seconds` step, ignoring the wall clock.
    pub fn advance(&mut self, seconds: f32) {
        self.last_update = Instant::now();
        self.step(Duration::from_secs_f32(seconds.max(0.0)));
    }

    fn step(&mut self, wall: Duration) {
        self.delta = wall.mul_f32(self.time_scale.max(0.0));
        self.total += self.delta;
        self.frame_count += 1;
    }

    /// Elapsed seconds of the current frame, as passed to `update` calls.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn total_seconds(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_steps_accumulate() {
        let mut time = GameTime::new();
        time.advance(0.25);
        time.advance(0.25);
        assert!((time.elapsed() - 0.25).abs() < 1e-6);
        assert!((time.total_seconds() - 0.5).abs() < 1e-6);
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn zero_time_scale_pauses() {
        let mut time = GameTime::new();
        time.time_scale = 0.0;
        time.advance(1.0);
        assert!(time.elapsed().abs() < f32::EPSILON);
        assert_eq!(time.frame_count, 1);
    }
}
