// Timing and tuning constants shared by the animation driver.
//
// These express intended behavior (delays, probabilities, offsets) and keep
// magic numbers out of the code.

// Smooth scroll
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed navbar height, compensated on every anchor jump
pub const SCROLL_DURATION_MS: f64 = 1000.0;

// Navigation tracking
pub const SECTION_LOOKAHEAD_PX: f64 = 120.0; // a section activates slightly before its top edge
pub const NAVBAR_SCROLLED_AT_PX: f64 = 50.0;

// Title rotation
pub const TYPE_DELAY_MIN_MS: u32 = 50; // per-character typing delay range
pub const TYPE_DELAY_MAX_MS: u32 = 150;
pub const TYPE_JITTER_PROBABILITY: f32 = 0.1;
pub const JITTER_REVERT_MS: u32 = 50;
pub const TITLE_HOLD_MS: u32 = 1400; // full title stays on screen this long
pub const TITLE_PULSE_MS: u32 = 300;
pub const ERASE_DELAY_MS: u32 = 30;
pub const GLITCH_PROBABILITY: f32 = 0.3;
pub const GLITCH_FLASH_MS: u32 = 50;
pub const TITLE_REST_MS: u32 = 800; // gap between erasing one title and typing the next
pub const GLITCH_SYMBOLS: &[char] = &['#', '$', '%', '&', '@', '!', '?', '*', '+', '='];

// Counters
pub const COUNTER_TICK_MS: u32 = 20;
pub const COUNTER_STEPS: f64 = 100.0; // increment is target / COUNTER_STEPS per tick

// Particles
pub const PARTICLE_SPAWN_INTERVAL_MS: u32 = 300;
pub const PARTICLE_LIFETIME_MS: u32 = 5000;
pub const PARTICLE_DRIFT_MIN_SECS: f32 = 2.0;
pub const PARTICLE_DRIFT_SPAN_SECS: f32 = 3.0;

// Default rotation content: display string plus accent color for the headline
pub const DEFAULT_TITLES: [(&str, &str); 4] = [
    ("Frontend Developer", "#64ffda"),
    ("IT Support Specialist", "#00bfff"),
    ("Software Developer", "#b388ff"),
    ("Problem Solver", "#ff8a65"),
];
