// DOM hooks the front-end binds to. Markup and styling live with the page.

// Element ids
pub const BUTTON_ID: &str = "the-button";
pub const TIMER_ID: &str = "timer";
pub const STATUS_ID: &str = "status-text";
pub const INTERSTITIAL_ID: &str = "fake-interstitial";
pub const INTERSTITIAL_CLOSE_ID: &str = "interstitial-close";
pub const CONTAINER_SELECTOR: &str = ".game-container";

// CSS classes
pub const CLASS_HOLDING: &str = "holding-active";
pub const CLASS_MOVING: &str = "moving-button";
pub const CLASS_SHRINK: &str = "shrink-button";
pub const CLASS_PSYCHEDELIC: &str = "psychedelic-mode";
pub const CLASS_SHAKE: &str = "screen-shake";
pub const CLASS_HIDDEN: &str = "hidden";

// Status colours
pub const STATUS_COLOR_NORMAL: &str = "#eee";
pub const STATUS_COLOR_FAILURE: &str = "#ff3b3b";

// Query parameter selecting the sabotage variant
pub const VARIANT_QUERY_KEY: &str = "variant";
