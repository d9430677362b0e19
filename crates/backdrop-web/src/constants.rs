// DOM-side tuning for the landing page wiring and effects.

// Element hooks
pub const CANVAS_ID: &str = "field-canvas";
pub const NAV_ID: &str = "site-nav";

// Visibility gating
pub const FIELD_VISIBLE_THRESHOLD: f64 = 0.05; // intersection ratio that counts as on-screen
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Scroll effects
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 48.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Counters
pub const COUNTER_DURATION_MS: f32 = 1600.0;

// Magnetic buttons
pub const MAGNET_RADIUS_PX: f32 = 140.0;
pub const MAGNET_STRENGTH: f32 = 0.3;

// Ambient flash: next firing lands in [min, min + span) ms after the last
pub const FLASH_DELAY_MIN_MS: i32 = 4_000;
pub const FLASH_DELAY_SPAN_MS: i32 = 5_000;
pub const FLASH_DECAY_MS: i32 = 700;

// Mock form submission
pub const FORM_PENDING_MS: i32 = 900;
