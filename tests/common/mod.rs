// Recording fakes for the controller's ports, shared by the host-side tests.

#![allow(dead_code)]

use dont_let_go::core::*;
use rand::rngs::mock::StepRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const START_MS: f64 = 10_000.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Status(String),
    Tone(StatusTone),
    Timer(String),
    Holding(bool),
    Apply(Effect),
    Clear(Effect),
    ShowInterstitial,
    HideInterstitial,
    Pulse(u32),
    Pattern(Vec<u32>),
    CancelHaptics,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct FakePresentation(pub CallLog);

impl Presentation for FakePresentation {
    fn set_status_text(&mut self, text: &str) {
        self.0.borrow_mut().push(Call::Status(text.to_string()));
    }
    fn set_status_tone(&mut self, tone: StatusTone) {
        self.0.borrow_mut().push(Call::Tone(tone));
    }
    fn set_timer_text(&mut self, text: &str) {
        self.0.borrow_mut().push(Call::Timer(text.to_string()));
    }
    fn set_holding(&mut self, holding: bool) {
        self.0.borrow_mut().push(Call::Holding(holding));
    }
    fn apply_effect(&mut self, effect: Effect) {
        self.0.borrow_mut().push(Call::Apply(effect));
    }
    fn clear_effect(&mut self, effect: Effect) {
        self.0.borrow_mut().push(Call::Clear(effect));
    }
    fn show_interstitial(&mut self) {
        self.0.borrow_mut().push(Call::ShowInterstitial);
    }
    fn hide_interstitial(&mut self) {
        self.0.borrow_mut().push(Call::HideInterstitial);
    }
}

pub struct FakeHaptics(pub CallLog);

impl Haptics for FakeHaptics {
    fn pulse(&mut self, duration_ms: u32) {
        self.0.borrow_mut().push(Call::Pulse(duration_ms));
    }
    fn pattern(&mut self, pattern_ms: &[u32]) {
        self.0.borrow_mut().push(Call::Pattern(pattern_ms.to_vec()));
    }
    fn cancel(&mut self) {
        self.0.borrow_mut().push(Call::CancelHaptics);
    }
}

pub struct FakeClock(pub Rc<Cell<f64>>);

impl Clock for FakeClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

#[derive(Default, Debug)]
pub struct TimerLog {
    pub next: u32,
    pub every: Vec<(TaskHandle, u32)>,
    pub after: Vec<(TaskHandle, u32)>,
    pub cancelled: Vec<TaskHandle>,
}

impl TimerLog {
    fn issue(&mut self) -> TaskHandle {
        self.next += 1;
        TaskHandle(self.next)
    }
}

pub struct FakeScheduler(pub Rc<RefCell<TimerLog>>);

impl Scheduler for FakeScheduler {
    fn every(&mut self, interval_ms: u32) -> TaskHandle {
        let mut log = self.0.borrow_mut();
        let h = log.issue();
        log.every.push((h, interval_ms));
        h
    }
    fn after(&mut self, delay_ms: u32) -> TaskHandle {
        let mut log = self.0.borrow_mut();
        let h = log.issue();
        log.after.push((h, delay_ms));
        h
    }
    fn cancel(&mut self, handle: TaskHandle) {
        self.0.borrow_mut().cancelled.push(handle);
    }
}

/// A controller wired to fakes, with the clock under test control.
pub struct Harness {
    pub controller: RoundController,
    pub calls: CallLog,
    pub now: Rc<Cell<f64>>,
    pub timers: Rc<RefCell<TimerLog>>,
}

impl Harness {
    /// Random draws pinned just under 1.0, so probabilistic blips never fire.
    pub fn new(variant: SabotageVariant) -> Self {
        Self::with_random(variant, StepRng::new(u64::MAX, 0))
    }

    pub fn with_random(variant: SabotageVariant, random: impl RandomSource + 'static) -> Self {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let now = Rc::new(Cell::new(START_MS));
        let timers = Rc::new(RefCell::new(TimerLog::default()));
        let ports = Ports {
            presentation: Box::new(FakePresentation(calls.clone())),
            haptics: Box::new(FakeHaptics(calls.clone())),
            clock: Box::new(FakeClock(now.clone())),
            scheduler: Box::new(FakeScheduler(timers.clone())),
            random: Box::new(random),
        };
        Self {
            controller: RoundController::new(variant, ports),
            calls,
            now,
            timers,
        }
    }

    pub fn set_time_sec(&self, secs: f64) {
        self.now.set(START_MS + secs * 1000.0);
    }

    /// Start a round at t = 0.
    pub fn start(&mut self) {
        self.set_time_sec(0.0);
        self.controller.hold_start();
    }

    /// Most recent periodic task that has not been cancelled.
    pub fn sampler(&self) -> Option<TaskHandle> {
        let log = self.timers.borrow();
        log.every
            .iter()
            .rev()
            .map(|(h, _)| *h)
            .find(|h| !log.cancelled.contains(h))
    }

    pub fn last_delayed(&self) -> Option<TaskHandle> {
        self.timers.borrow().after.last().map(|(h, _)| *h)
    }

    /// Advance the clock and fire the sampler.
    pub fn sample_at(&mut self, secs: f64) {
        self.set_time_sec(secs);
        let h = self.sampler().expect("sampler scheduled");
        self.controller.on_timer(h);
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn status(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            Call::Status(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn timer(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            Call::Timer(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn pulses(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Pulse(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}
