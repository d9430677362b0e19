// Relationships between tuning constants that the drawing math relies on.

use backdrop_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_bands_stay_renderable() {
    // Pulse peaks at 0.8; disc alpha must stay within [0, 1].
    assert!(ALPHA_BASE + ALPHA_PULSE_SPAN * 0.8 <= 1.0);
    assert!(ALPHA_BASE - ALPHA_PULSE_SPAN * 0.8 >= 0.0);
    assert!(GLOW_ALPHA < ALPHA_BASE);
    assert!(LINK_ALPHA_SCALE > 0.0 && LINK_ALPHA_SCALE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizing_table_orders_the_profiles() {
    // Reduced motion spawns the fewest particles per area and caps lowest.
    assert!(DENSITY_FACTOR_REDUCED > DENSITY_FACTOR_CONSTRAINED);
    assert!(DENSITY_FACTOR_CONSTRAINED > DENSITY_FACTOR_FULL);
    assert!(MAX_PARTICLES_REDUCED < MAX_PARTICLES_CONSTRAINED);
    assert!(MAX_PARTICLES_CONSTRAINED < MAX_PARTICLES_FULL);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn link_thresholds_favor_the_full_profile() {
    assert!(LINK_DISTANCE_CONSTRAINED < LINK_DISTANCE_FULL);
    assert!(LINK_DISTANCE_CONSTRAINED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cycle_step_loops_in_about_twenty_seconds() {
    // ~60fps: a full cycle should land in the 15-25s range.
    let frames_per_cycle = 1.0 / CYCLE_STEP;
    let seconds = frames_per_cycle / 60.0;
    assert!((15.0..=25.0).contains(&seconds));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_interaction_ranges_are_sane() {
    assert!(MIN_POINTER_DISTANCE > 0.0);
    assert!(MIN_POINTER_DISTANCE < POINTER_RADIUS);
    assert!(POINTER_PUSH_SCALE > 0.0 && POINTER_PUSH_SCALE <= 1.0);
    assert!(SIZE_MIN < GLOW_MIN_SIZE && GLOW_MIN_SIZE < SIZE_MAX);
    assert!(DENSITY_MIN < DENSITY_MAX);
}
