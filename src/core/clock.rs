use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic time in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Wall-clock source backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-advanced time source. Clones share the same timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    seconds: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock<S: TimeSource = MonotonicTime> {
    source: S,
    last_tick: f64,
}

impl Clock<MonotonicTime> {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::with_source(MonotonicTime::new())
    }
}

impl<S: TimeSource> Clock<S> {
    pub fn with_source(source: S) -> Self {
        let last_tick = source.now();
        Self { source, last_tick }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now();
        let delta = (now - self.last_tick).max(0.0);
        self.last_tick = now;
        delta as f32
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = self.source.now();
    }
}

impl Default for Clock<MonotonicTime> {
    fn default() -> Self {
        Self::new()
    }
}
