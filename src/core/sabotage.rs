use super::constants::*;
use std::fmt;
use std::str::FromStr;

/// A single visual sabotage the presentation layer knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Drift,
    Shrink,
    PaletteFlash,
    ScreenShake,
    Interstitial,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Drift,
        Effect::Shrink,
        Effect::PaletteFlash,
        Effect::ScreenShake,
        Effect::Interstitial,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Small copyable set of [`Effect`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EffectSet(u8);

impl EffectSet {
    pub const EMPTY: EffectSet = EffectSet(0);

    #[inline]
    pub const fn with(self, effect: Effect) -> Self {
        EffectSet(self.0 | effect.bit())
    }

    #[inline]
    pub fn insert(&mut self, effect: Effect) {
        self.0 |= effect.bit();
    }

    #[inline]
    pub fn remove(&mut self, effect: Effect) {
        self.0 &= !effect.bit();
    }

    #[inline]
    pub const fn contains(self, effect: Effect) -> bool {
        self.0 & effect.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Effects present in `self` but not in `other`.
    #[inline]
    pub const fn difference(self, other: EffectSet) -> EffectSet {
        EffectSet(self.0 & !other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Effect> {
        Effect::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Effect> for EffectSet {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        let mut set = EffectSet::EMPTY;
        for e in iter {
            set.insert(e);
        }
        set
    }
}

impl fmt::Debug for EffectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Sabotage tier, derived from elapsed hold time alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Calm,
    Taunt,
    Drift,
    Psychedelic,
    Fakeout,
    Chaos,
}

/// How a phase wants the device to vibrate on each sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HapticCue {
    None,
    /// One uniform draw per sample; pulse when the draw lands below `probability`.
    Chance { probability: f64, duration_ms: u32 },
    /// Pulse on every sample.
    Continuous(u32),
    /// Play the pattern on every sample.
    Pattern(&'static [u32]),
    /// Pulse once, on the sample that enters the phase.
    OnEnter(u32),
}

/// One row of a phase table.
///
/// Rows normally own `(lower, upper]`, so a value on a boundary stays in the
/// earlier phase. The inclusive flags let a row claim its edges differently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSpec {
    pub lower: f64,
    pub upper: f64,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    pub phase: Phase,
    pub status: &'static str,
    pub effects: EffectSet,
    pub haptic: HapticCue,
}

impl PhaseSpec {
    pub fn contains(&self, elapsed_sec: f64) -> bool {
        let above = if self.lower_inclusive {
            elapsed_sec >= self.lower
        } else {
            elapsed_sec > self.lower
        };
        let below = if self.upper_inclusive {
            elapsed_sec <= self.upper
        } else {
            elapsed_sec < self.upper
        };
        above && below
    }
}

const CALM: PhaseSpec = PhaseSpec {
    lower: f64::NEG_INFINITY,
    upper: CALM_UNTIL_SEC,
    lower_inclusive: false,
    upper_inclusive: true,
    phase: Phase::Calm,
    status: STATUS_CALM,
    effects: EffectSet::EMPTY,
    haptic: HapticCue::None,
};

const TAUNT: PhaseSpec = PhaseSpec {
    lower: CALM_UNTIL_SEC,
    upper: TAUNT_UNTIL_SEC,
    lower_inclusive: false,
    upper_inclusive: true,
    phase: Phase::Taunt,
    status: STATUS_TAUNT,
    effects: EffectSet::EMPTY,
    haptic: HapticCue::Chance {
        probability: TAUNT_BLIP_PROBABILITY,
        duration_ms: TAUNT_BLIP_MS,
    },
};

const DRIFT: PhaseSpec = PhaseSpec {
    lower: TAUNT_UNTIL_SEC,
    upper: DRIFT_UNTIL_SEC,
    lower_inclusive: false,
    upper_inclusive: true,
    phase: Phase::Drift,
    status: STATUS_DRIFT,
    effects: EffectSet::EMPTY.with(Effect::Drift),
    haptic: HapticCue::Chance {
        probability: DRIFT_BLIP_PROBABILITY,
        duration_ms: DRIFT_BLIP_MS,
    },
};

const CHAOS: PhaseSpec = PhaseSpec {
    lower: CHAOS_AFTER_SEC,
    upper: f64::INFINITY,
    lower_inclusive: false,
    upper_inclusive: true,
    phase: Phase::Chaos,
    status: STATUS_CHAOS,
    effects: EffectSet::EMPTY.with(Effect::ScreenShake),
    haptic: HapticCue::Pattern(CHAOS_PATTERN_MS),
};

static PSYCHEDELIC_TABLE: [PhaseSpec; 5] = [
    CALM,
    TAUNT,
    DRIFT,
    PhaseSpec {
        lower: DRIFT_UNTIL_SEC,
        upper: CHAOS_AFTER_SEC,
        lower_inclusive: false,
        upper_inclusive: true,
        phase: Phase::Psychedelic,
        status: STATUS_PSYCHEDELIC,
        effects: EffectSet::EMPTY
            .with(Effect::PaletteFlash)
            .with(Effect::Shrink),
        haptic: HapticCue::Continuous(PSYCHEDELIC_BUZZ_MS),
    },
    CHAOS,
];

// The trap owns [18, 18.1); the drift tier resumes after it until chaos.
static INTERSTITIAL_TABLE: [PhaseSpec; 6] = [
    CALM,
    TAUNT,
    PhaseSpec {
        upper_inclusive: false,
        ..DRIFT
    },
    PhaseSpec {
        lower: DRIFT_UNTIL_SEC,
        upper: FAKEOUT_UNTIL_SEC,
        lower_inclusive: true,
        upper_inclusive: false,
        phase: Phase::Fakeout,
        status: STATUS_FAKEOUT,
        effects: EffectSet::EMPTY
            .with(Effect::Drift)
            .with(Effect::Interstitial),
        haptic: HapticCue::OnEnter(FAKEOUT_PULSE_MS),
    },
    PhaseSpec {
        lower: FAKEOUT_UNTIL_SEC,
        upper: CHAOS_AFTER_SEC,
        lower_inclusive: true,
        ..DRIFT
    },
    CHAOS,
];

/// Which escalation script a session plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SabotageVariant {
    /// Colour flashing and a shrinking button from 18s.
    #[default]
    Psychedelic,
    /// A fake "system error" overlay for a tenth of a second at 18s.
    Interstitial,
}

impl SabotageVariant {
    pub fn name(self) -> &'static str {
        match self {
            SabotageVariant::Psychedelic => "psychedelic",
            SabotageVariant::Interstitial => "interstitial",
        }
    }

    pub fn table(self) -> &'static [PhaseSpec] {
        match self {
            SabotageVariant::Psychedelic => &PSYCHEDELIC_TABLE,
            SabotageVariant::Interstitial => &INTERSTITIAL_TABLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sabotage variant `{0}` (expected `psychedelic` or `interstitial`)")]
pub struct UnknownVariant(pub String);

impl FromStr for SabotageVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "psychedelic" | "a" => Ok(SabotageVariant::Psychedelic),
            "interstitial" | "b" => Ok(SabotageVariant::Interstitial),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Maps elapsed hold time to the sabotage that should be on screen.
///
/// Stateless: every query is answered from the variant's phase table, so the
/// result for a given `elapsed_sec` never depends on earlier calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SabotageEngine {
    variant: SabotageVariant,
}

impl SabotageEngine {
    pub fn new(variant: SabotageVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> SabotageVariant {
        self.variant
    }

    /// The table row owning `elapsed_sec`. Negative or NaN input maps to the
    /// first (calm) row.
    pub fn directive_for(&self, elapsed_sec: f64) -> &'static PhaseSpec {
        let table = self.variant.table();
        table
            .iter()
            .find(|row| row.contains(elapsed_sec))
            .unwrap_or(&table[0])
    }

    #[inline]
    pub fn phase_for(&self, elapsed_sec: f64) -> Phase {
        self.directive_for(elapsed_sec).phase
    }

    #[inline]
    pub fn effects_for(&self, elapsed_sec: f64) -> EffectSet {
        self.directive_for(elapsed_sec).effects
    }

    #[inline]
    pub fn status_text_for(&self, elapsed_sec: f64) -> &'static str {
        self.directive_for(elapsed_sec).status
    }

    #[inline]
    pub fn haptic_for(&self, elapsed_sec: f64) -> HapticCue {
        self.directive_for(elapsed_sec).haptic
    }
}
