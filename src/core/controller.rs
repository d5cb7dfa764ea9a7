use super::clock::RoundClock;
use super::constants::*;
use super::ports::{Ports, StatusTone, TaskHandle};
use super::sabotage::{Effect, EffectSet, HapticCue, Phase, SabotageEngine, SabotageVariant};

/// What ended a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseReason {
    PointerUp,
    PointerCancel,
    PointerLeave,
    /// The player clicked the fake interstitial's close control.
    InterstitialClose,
}

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundOutcome {
    pub survived_seconds: f64,
    pub reason: ReleaseReason,
}

/// Drives one game session: hold starts a round, the sampler escalates the
/// sabotage, any release ends it.
///
/// Single-threaded. The host wires input events to [`hold_start`](Self::hold_start)
/// and [`release`](Self::release), and routes fired scheduler tasks to
/// [`on_timer`](Self::on_timer).
pub struct RoundController {
    ports: Ports,
    engine: SabotageEngine,
    clock: RoundClock,
    applied: EffectSet,
    phase: Option<Phase>,
    status: &'static str,
    sampler: Option<TaskHandle>,
    pending_reset: Option<TaskHandle>,
    last_outcome: Option<RoundOutcome>,
}

impl RoundController {
    pub fn new(variant: SabotageVariant, ports: Ports) -> Self {
        Self {
            ports,
            engine: SabotageEngine::new(variant),
            clock: RoundClock::new(),
            applied: EffectSet::EMPTY,
            phase: None,
            status: STATUS_CALM,
            sampler: None,
            pending_reset: None,
            last_outcome: None,
        }
    }

    pub fn variant(&self) -> SabotageVariant {
        self.engine.variant()
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    /// Last sampled hold time; the frozen final value once a round ended.
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    /// Phase applied by the most recent sample, `None` before the first one.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn applied_effects(&self) -> EffectSet {
        self.applied
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Press on the hold control. Ignored while a round is running.
    pub fn hold_start(&mut self) {
        if self.clock.is_active() {
            return;
        }
        if let Some(handle) = self.pending_reset.take() {
            self.ports.scheduler.cancel(handle);
            log::debug!("[round] cancelled pending reset {:?}", handle);
        }
        self.reset_sabotage();

        self.phase = None;
        self.status = STATUS_CALM;
        let p = &mut self.ports.presentation;
        p.set_status_text(STATUS_CALM);
        p.set_timer_text(TIMER_BASELINE);
        p.set_holding(true);

        let now = self.ports.clock.now_ms();
        self.clock.start(now);
        self.sampler = Some(self.ports.scheduler.every(SAMPLE_INTERVAL_MS));
        log::info!("[round] started ({})", self.engine.variant().name());
    }

    /// Any release signal. Returns the outcome if this ended a round.
    pub fn release(&mut self, reason: ReleaseReason) -> Option<RoundOutcome> {
        if !self.clock.is_active() {
            return None;
        }
        if let Some(handle) = self.sampler.take() {
            self.ports.scheduler.cancel(handle);
        }
        let now = self.ports.clock.now_ms();
        let survived = self.clock.stop(now);

        let p = &mut self.ports.presentation;
        p.set_timer_text(&format_timer(survived));
        p.set_status_text(&format_game_over(survived));
        p.set_status_tone(StatusTone::Failure);
        p.set_holding(false);
        self.ports.haptics.pulse(GAME_OVER_PULSE_MS);

        self.pending_reset = Some(self.ports.scheduler.after(RESET_DELAY_MS));

        let outcome = RoundOutcome {
            survived_seconds: survived,
            reason,
        };
        self.last_outcome = Some(outcome);
        log::info!("[round] over after {:.2}s ({:?})", survived, reason);
        Some(outcome)
    }

    /// Clicking the fake overlay counts as letting go.
    pub fn interstitial_dismissed(&mut self) -> Option<RoundOutcome> {
        self.release(ReleaseReason::InterstitialClose)
    }

    /// Route a fired scheduler task. Handles that no longer belong to this
    /// controller are ignored.
    pub fn on_timer(&mut self, handle: TaskHandle) {
        if self.sampler == Some(handle) {
            self.tick();
        } else if self.pending_reset == Some(handle) {
            self.pending_reset = None;
            self.reset_sabotage();
            log::debug!("[round] effects reset");
        } else {
            log::trace!("[round] stale timer {:?}", handle);
        }
    }

    /// One sampler step: read the clock and bring the presentation in line
    /// with the phase for the current hold time.
    pub fn tick(&mut self) {
        if !self.clock.is_active() {
            return;
        }
        let now = self.ports.clock.now_ms();
        let elapsed = self.clock.sample(now);
        self.ports
            .presentation
            .set_timer_text(&format_timer(elapsed));

        let row = self.engine.directive_for(elapsed);
        let entered = self.phase != Some(row.phase);
        if entered {
            log::info!("[round] {:?} at {:.2}s", row.phase, elapsed);
            self.phase = Some(row.phase);
        }
        if self.status != row.status {
            self.status = row.status;
            self.ports.presentation.set_status_text(row.status);
        }
        self.apply_effects(row.effects);
        self.play_haptic(row.haptic, entered);
    }

    fn apply_effects(&mut self, desired: EffectSet) {
        let p = &mut self.ports.presentation;
        for effect in self.applied.difference(desired).iter() {
            match effect {
                Effect::Interstitial => p.hide_interstitial(),
                _ => p.clear_effect(effect),
            }
        }
        for effect in desired.difference(self.applied).iter() {
            match effect {
                Effect::Interstitial => p.show_interstitial(),
                _ => p.apply_effect(effect),
            }
        }
        self.applied = desired;
    }

    fn play_haptic(&mut self, cue: HapticCue, entered: bool) {
        let h = &mut self.ports.haptics;
        match cue {
            HapticCue::None => {}
            HapticCue::Chance {
                probability,
                duration_ms,
            } => {
                if self.ports.random.next_f64() < probability {
                    h.pulse(duration_ms);
                }
            }
            HapticCue::Continuous(ms) => h.pulse(ms),
            HapticCue::Pattern(pattern) => h.pattern(pattern),
            HapticCue::OnEnter(ms) => {
                if entered {
                    h.pulse(ms);
                }
            }
        }
    }

    // Back to a clean board: every effect cleared, not only the tracked ones.
    fn reset_sabotage(&mut self) {
        let p = &mut self.ports.presentation;
        for effect in Effect::ALL {
            match effect {
                Effect::Interstitial => p.hide_interstitial(),
                _ => p.clear_effect(effect),
            }
        }
        p.set_status_tone(StatusTone::Normal);
        self.applied = EffectSet::EMPTY;
        self.ports.haptics.cancel();
    }
}
