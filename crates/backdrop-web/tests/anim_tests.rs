// Host-side tests for the pure effect helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod anim {
    include!("../src/anim.rs");
}

use anim::*;

#[test]
fn ease_out_cubic_hits_its_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    // Out-of-range input clamps instead of extrapolating.
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn ease_out_cubic_decelerates() {
    // Ease-out covers more than half the distance in the first half of the
    // tween and keeps increasing monotonically.
    assert!(ease_out_cubic(0.5) > 0.5);
    let mut prev = 0.0;
    let mut t = 0.0_f32;
    while t <= 1.0 {
        let v = ease_out_cubic(t);
        assert!(v >= prev);
        prev = v;
        t += 0.01;
    }
}

#[test]
fn counter_lands_exactly_on_target() {
    assert_eq!(counter_value(12_500, 1.0), 12_500);
    assert_eq!(counter_value(12_500, 0.0), 0);
    assert_eq!(counter_value(0, 0.5), 0);
}

#[test]
fn counter_never_overshoots() {
    let target = 987_654;
    let mut t = 0.0_f32;
    while t <= 1.0 {
        assert!(counter_value(target, t) <= target);
        t += 0.01;
    }
}

#[test]
fn grouping_inserts_separators_every_three_digits() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1_000), "1,000");
    assert_eq!(format_grouped(12_500), "12,500");
    assert_eq!(format_grouped(1_234_567), "1,234,567");
}

#[test]
fn magnet_offset_pulls_toward_the_pointer_with_falloff() {
    // Dead center: no offset.
    assert_eq!(magnet_offset(0.0, 0.0, 140.0, 0.3), (0.0, 0.0));

    // Near the center the pull is close to distance * strength.
    let (ox, oy) = magnet_offset(10.0, 0.0, 140.0, 0.3);
    assert!(ox > 2.0 && ox < 3.0);
    assert_eq!(oy, 0.0);

    // The pull weakens toward the radius and is zero at and beyond it.
    let (near, _) = magnet_offset(20.0, 0.0, 140.0, 0.3);
    let (far, _) = magnet_offset(120.0, 0.0, 140.0, 0.3);
    assert!(near / 20.0 > far / 120.0);
    assert_eq!(magnet_offset(140.0, 0.0, 140.0, 0.3), (0.0, 0.0));
    assert_eq!(magnet_offset(500.0, 0.0, 140.0, 0.3), (0.0, 0.0));
}

#[test]
fn magnet_offset_handles_degenerate_radius() {
    assert_eq!(magnet_offset(10.0, 10.0, 0.0, 0.3), (0.0, 0.0));
    assert_eq!(magnet_offset(10.0, 10.0, -5.0, 0.3), (0.0, 0.0));
}
