// Shared tuning constants for the particle field.

// Color cycle
pub const CYCLE_STEP: f32 = 1.0 / 1200.0; // one full palette loop ~20s at 60fps
pub const PULSE_RATE: f32 = 6.0 * std::f32::consts::TAU; // pulse oscillations per color loop

// Pointer interaction
pub const POINTER_RADIUS: f32 = 150.0; // px, repulsion vanishes at this distance
pub const POINTER_PUSH_SCALE: f32 = 0.6; // damps the per-frame displacement
pub const MIN_POINTER_DISTANCE: f32 = 0.5; // px, below this the push direction is undefined

// Drift and spawn ranges
pub const DRIFT_SPAN: f32 = 0.4; // px/frame, velocity components drawn from [-span, span)
pub const SIZE_MIN: f32 = 0.5; // px
pub const SIZE_MAX: f32 = 2.5; // px
pub const DENSITY_MIN: f32 = 1.0; // pointer force response multiplier range
pub const DENSITY_MAX: f32 = 30.0;

// Disc rendering
pub const RADIUS_BASE: f32 = 0.8; // idle fraction of particle size
pub const RADIUS_PULSE_SPAN: f32 = 0.4; // how much a full pulse enlarges the disc
pub const ALPHA_BASE: f32 = 0.5;
pub const ALPHA_PULSE_SPAN: f32 = 0.3;
pub const GLOW_MIN_SIZE: f32 = 1.5; // px, discs above this also get a halo
pub const GLOW_RADIUS_MULT: f32 = 3.0;
pub const GLOW_ALPHA: f32 = 0.08;

// Connector pass
pub const LINK_DISTANCE_FULL: f32 = 120.0; // px
pub const LINK_DISTANCE_CONSTRAINED: f32 = 100.0; // px, reduced-motion and small viewports
pub const LINK_ALPHA_SCALE: f32 = 0.35; // dims lines relative to disc alpha
pub const LINK_WIDTH: f32 = 1.0; // px

// Sizing policy: canvas area (px^2) per particle, and the batch cap
pub const DENSITY_FACTOR_FULL: f32 = 15_000.0;
pub const MAX_PARTICLES_FULL: usize = 100;
pub const DENSITY_FACTOR_REDUCED: f32 = 30_000.0;
pub const MAX_PARTICLES_REDUCED: usize = 20;
pub const DENSITY_FACTOR_CONSTRAINED: f32 = 20_000.0;
pub const MAX_PARTICLES_CONSTRAINED: usize = 40;
