/// Start/stop bookkeeping for a single round.
///
/// The clock never reads time on its own: callers pass the current instant
/// (milliseconds from a monotonic [`Clock`](super::ports::Clock)) so the
/// round arithmetic stays deterministic under test.
#[derive(Clone, Debug, Default)]
pub struct RoundClock {
    active: bool,
    started_at_ms: f64,
    elapsed_seconds: f64,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a round at `now_ms`. The controller only calls this while idle.
    pub fn start(&mut self, now_ms: f64) {
        self.active = true;
        self.started_at_ms = now_ms;
        self.elapsed_seconds = 0.0;
    }

    /// Seconds since [`start`](Self::start), never negative; `0.0` when idle.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        if !self.active {
            return 0.0;
        }
        let secs = (now_ms - self.started_at_ms) / 1000.0;
        if secs.is_finite() {
            secs.max(0.0)
        } else {
            0.0
        }
    }

    /// Record the elapsed time at `now_ms` and return it.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        if self.active {
            self.elapsed_seconds = self.elapsed(now_ms);
        }
        self.elapsed_seconds
    }

    /// Take a final sample and freeze it. Returns the survived seconds.
    pub fn stop(&mut self, now_ms: f64) -> f64 {
        let final_secs = self.sample(now_ms);
        self.active = false;
        final_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    /// Last sampled value; frozen after [`stop`](Self::stop).
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}
