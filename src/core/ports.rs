//! Boundary traits between the round logic and the host platform.
//!
//! The browser front-end implements these over `web-sys`; host tests use
//! recording fakes. Every method is infallible: a host that cannot honour a
//! call (no vibration motor, detached element) silently does nothing.

use super::sabotage::Effect;
use instant::Instant;

/// Colour treatment for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Failure,
}

/// Visual sink. Calls must be safe to repeat and to receive in any order.
pub trait Presentation {
    fn set_status_text(&mut self, text: &str);
    fn set_status_tone(&mut self, tone: StatusTone);
    fn set_timer_text(&mut self, text: &str);
    /// Marks the hold control as pressed (or not).
    fn set_holding(&mut self, holding: bool);
    fn apply_effect(&mut self, effect: Effect);
    fn clear_effect(&mut self, effect: Effect);
    fn show_interstitial(&mut self);
    fn hide_interstitial(&mut self);
}

/// Vibration sink; a no-op where the platform has no vibration support.
pub trait Haptics {
    fn pulse(&mut self, duration_ms: u32);
    fn pattern(&mut self, pattern_ms: &[u32]);
    fn cancel(&mut self);
}

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// [`Clock`] backed by `instant::Instant`, which maps to `performance.now()`
/// on wasm32 and `std::time::Instant` elsewhere.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Identifies a scheduled task so it can be cancelled or matched on firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u32);

/// Timer service.
///
/// The scheduler does not own callbacks: when a task fires, the host hands
/// its handle back to [`RoundController::on_timer`](super::RoundController::on_timer).
/// Cancelling an unknown or already-fired handle is a no-op.
pub trait Scheduler {
    fn every(&mut self, interval_ms: u32) -> TaskHandle;
    fn after(&mut self, delay_ms: u32) -> TaskHandle;
    fn cancel(&mut self, handle: TaskHandle);
}

/// Uniform draws in `[0, 1)` for the probabilistic haptic blips.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}

/// Everything the controller talks to outside of itself.
pub struct Ports {
    pub presentation: Box<dyn Presentation>,
    pub haptics: Box<dyn Haptics>,
    pub clock: Box<dyn Clock>,
    pub scheduler: Box<dyn Scheduler>,
    pub random: Box<dyn RandomSource>,
}
