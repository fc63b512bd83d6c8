// Host-side tests for constants and their relationships.

use portal_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_limits_are_ordered() {
    assert!(MIN_ORBS > 0);
    assert!(MIN_ORBS < INITIAL_ORBS);
    assert!(EXTRA_ORBS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn appearance_constants_are_within_reasonable_bounds() {
    assert!(BASE_OPACITY > 0.0 && BASE_OPACITY <= 1.0);
    assert!(SCALE_BASE > 0.0);
    assert!(SCALE_SPAN > 0.0);
    // a fresh orb should not pop larger than a full-life one
    assert!(FRESH_SCALE <= SCALE_BASE + SCALE_SPAN * DEFAULT_MAX_LIFE);
    assert!(ORB_BLUR_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dissipation_and_pointer_constants_are_positive() {
    assert!(DISSIPATE_MIN > 0.0);
    assert!(DISSIPATE_SPAN > 0.0);
    assert!(DISSIPATE_MIN + DISSIPATE_SPAN < DEFAULT_MAX_LIFE);
    assert!(POINTER_RADIUS > 0.0);
    assert!(POINTER_STRENGTH > 0.0);
    assert!(POINTER_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speed_steps_go_in_opposite_directions() {
    assert!(SPEED_UP_FACTOR > 1.0);
    assert!(SLOW_DOWN_FACTOR < 1.0 && SLOW_DOWN_FACTOR > 0.0);
}

#[test]
fn palette_alternates_and_is_well_formed() {
    assert_eq!(ORB_PALETTE.len(), 4);
    for (color, size, speed) in ORB_PALETTE {
        assert!(color.starts_with('#') && color.len() == 7);
        assert!(size > 0.0);
        assert!(speed > 0.0);
    }
    for pair in ORB_PALETTE.windows(2) {
        assert_ne!(pair[0].0, pair[1].0);
    }
}
