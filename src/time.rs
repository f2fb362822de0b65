//! Frame timing for the animation loop.
//!
//! [`FrameClock`] is the single source of truth for elapsed and delta
//! time. Call [`tick`](FrameClock::tick) once per frame and feed the
//! returned delta into [`Stage::advance`](crate::Stage::advance).
//!
//! A fixed delta can be pinned for deterministic runs (tests, replays),
//! and a time scale stretches or compresses the whole animation.

use std::time::Instant;

/// Wall-clock frame timer with optional fixed stepping.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fixed_delta: Option<f32>,
    time_scale: f32,
    paused: bool,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Advance the clock by one frame and return the scaled delta time.
    ///
    /// While paused the delta is 0.0 and elapsed time stands still.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        if self.paused {
            self.last_frame = now;
            self.delta_secs = 0.0;
            return 0.0;
        }

        let raw = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.delta_secs = self.fixed_delta.unwrap_or(raw) * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;

        self.delta_secs
    }

    /// Time since the last tick, in scaled seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total scaled seconds accumulated across ticks.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Frames ticked since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the clock; subsequent ticks return 0.0.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause without crediting the paused wall time.
    pub fn resume(&mut self) {
        self.last_frame = Instant::now();
        self.paused = false;
    }

    /// Pin every tick to a fixed delta, ignoring wall time.
    ///
    /// Pass `None` to return to wall-clock deltas.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Scale all deltas; 1.0 is real time, 0.5 is slow motion.
    ///
    /// Negative scales clamp to 0.0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// The instant the clock was created.
    #[inline]
    pub fn start_instant(&self) -> Instant {
        self.start
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_tick_advances() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt > 0.0);
        assert_eq!(clock.frame(), 1);
        assert!(clock.elapsed() >= dt);
    }

    #[test]
    fn test_fixed_delta_ignores_wall_time() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));
        thread::sleep(Duration::from_millis(20));
        let dt = clock.tick();
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(0.01));
        clock.tick();
        let elapsed = clock.elapsed();

        clock.pause();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.elapsed(), elapsed);

        clock.resume();
        clock.tick();
        assert!(clock.elapsed() > elapsed);
    }

    #[test]
    fn test_time_scale_clamps_negative() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(-2.0);
        clock.set_fixed_delta(Some(0.01));
        assert_eq!(clock.tick(), 0.0);

        clock.set_time_scale(2.0);
        assert!((clock.tick() - 0.02).abs() < 1e-6);
    }
}
