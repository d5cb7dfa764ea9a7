/// Round timing and sabotage tuning constants.
///
/// Phase bounds are in seconds of hold time. Phases own `(lower, upper]`,
/// except the interstitial trap, which owns `[DRIFT_UNTIL_SEC, FAKEOUT_UNTIL_SEC)`.

// Sampler cadence and end-of-round timing (milliseconds)
pub const SAMPLE_INTERVAL_MS: u32 = 50;
pub const RESET_DELAY_MS: u32 = 1500;
pub const GAME_OVER_PULSE_MS: u32 = 500;

// Phase bounds (seconds)
pub const CALM_UNTIL_SEC: f64 = 5.0;
pub const TAUNT_UNTIL_SEC: f64 = 10.0;
pub const DRIFT_UNTIL_SEC: f64 = 18.0;
pub const FAKEOUT_UNTIL_SEC: f64 = 18.1; // one or two samples at 50ms
pub const CHAOS_AFTER_SEC: f64 = 25.0;

// Haptics
pub const TAUNT_BLIP_PROBABILITY: f64 = 0.05;
pub const TAUNT_BLIP_MS: u32 = 50;
pub const DRIFT_BLIP_PROBABILITY: f64 = 0.10;
pub const DRIFT_BLIP_MS: u32 = 100;
pub const PSYCHEDELIC_BUZZ_MS: u32 = 50;
pub const FAKEOUT_PULSE_MS: u32 = 200;
pub const CHAOS_PATTERN_MS: &[u32] = &[100, 50, 100, 50, 100];

// Status text
pub const STATUS_CALM: &str = "Hold tight...";
pub const STATUS_TAUNT: &str = "Is that all you got?";
pub const STATUS_DRIFT: &str = "Uh oh, it's slipping...";
pub const STATUS_PSYCHEDELIC: &str = "DON'T LOOK AWAY!";
pub const STATUS_FAKEOUT: &str = "SYSTEM ERROR";
pub const STATUS_CHAOS: &str = "WHY ARE YOU STILL HERE?";
pub const TIMER_BASELINE: &str = "0.00s";

#[inline]
pub fn format_timer(elapsed_sec: f64) -> String {
    format!("{:.2}s", elapsed_sec)
}

#[inline]
pub fn format_game_over(elapsed_sec: f64) -> String {
    format!("GAME OVER! You lasted {:.2}s", elapsed_sec)
}
