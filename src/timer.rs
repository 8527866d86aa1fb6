use std::time::{Duration, Instant};

/// Stopwatch handle for wrapping a single measured call.
///
/// `record` marks a start point and `stop` adds the span since that point to
/// the accumulated time. The handle is owned by whoever measures, so separate
/// sections never share state unless the same handle is passed on.
#[derive(Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the accumulated time and any pending start point
    pub fn reset(&mut self) {
        self.started = None;
        self.elapsed = Duration::ZERO;
    }

    #[inline]
    pub fn record(&mut self) {
        self.started = Some(Instant::now());
    }

    #[inline]
    pub fn restart(&mut self) {
        self.record();
    }

    /// Close the span opened by `record`. Without a start point this does nothing
    #[inline]
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    #[inline]
    pub fn time(&self) -> Duration {
        self.elapsed
    }

    /// Run `f` between `record` and `stop`
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.record();
        let out = f();
        self.stop();
        out
    }
}
