use std::time::Instant;

/// Frame clock that tracks delta time and caps long frames
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_time_step: f32,
}

impl Clock {
    pub const DEFAULT_FRAMERATE: f32 = 30.0;

    /// Create new clock starting now, capping deltas at one frame of
    /// `target_framerate`
    pub fn new(target_framerate: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_time_step: 1.0 / target_framerate,
        }
    }

    pub fn max_time_step(&self) -> f32 {
        self.max_time_step
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Like [`Clock::tick`], but never returns more than the max time step
    /// (a breakpoint or a stalled frame must not fling the camera)
    pub fn tick_capped(&mut self) -> f32 {
        self.tick().min(self.max_time_step)
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRAMERATE)
    }
}
