use std::time::Duration;

/// Progress through the current story, driven by fixed-interval ticks.
///
/// Elapsed time is accumulated as a [`Duration`], so a story completes after
/// exactly `story_duration / tick_interval` unpaused ticks (rounded up).
#[derive(Debug, Clone)]
pub struct ProgressTimer {
    tick_interval: Duration,
    story_duration: Duration,
    elapsed: Duration,
    running: bool,
    paused: bool,
}

impl ProgressTimer {
    pub fn new(tick_interval: Duration, story_duration: Duration) -> Self {
        Self {
            tick_interval,
            story_duration,
            elapsed: Duration::ZERO,
            running: false,
            paused: false,
        }
    }

    /// Restart from zero. The paused flag is left as it is.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Fraction of the story shown, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.story_duration.is_zero() {
            return 1.0;
        }

        (self.elapsed.as_secs_f64() / self.story_duration.as_secs_f64()).min(1.0)
    }

    /// Account for one tick. Returns `true` when the story is complete.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.paused {
            return false;
        }

        self.elapsed += self.tick_interval;
        self.elapsed >= self.story_duration
    }
}
