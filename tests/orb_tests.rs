// Host-side tests for the orb simulation in portal-core.

use glam::Vec2;
use portal_core::constants::*;
use portal_core::*;

fn make_field(seed: u64) -> OrbField {
    OrbField::new(OrbParams::default(), Viewport::new(1000.0, 800.0), seed)
}

fn assert_invariants(field: &OrbField) {
    let viewport = field.viewport();
    for (i, orb) in field.orbs.iter().enumerate() {
        let max = viewport.max_position(orb.archetype.size);
        assert!(
            orb.position.x >= 0.0 && orb.position.x <= max.x,
            "orb {i} x out of bounds: {}",
            orb.position.x
        );
        assert!(
            orb.position.y >= 0.0 && orb.position.y <= max.y,
            "orb {i} y out of bounds: {}",
            orb.position.y
        );
        assert!(
            orb.life >= 0.0 && orb.life <= orb.max_life,
            "orb {i} life out of range: {}",
            orb.life
        );
        assert!(orb.velocity.is_finite(), "orb {i} velocity not finite");
    }
}

#[test]
fn new_field_has_initial_population_in_palette_order() {
    let field = make_field(1);
    assert_eq!(field.len(), INITIAL_ORBS);
    for (i, orb) in field.orbs.iter().enumerate() {
        assert_eq!(orb.archetype, OrbArchetype::for_index(i));
        assert_eq!(orb.life, DEFAULT_MAX_LIFE);
        assert!(orb.dissipate_rate >= DISSIPATE_MIN);
        assert!(orb.dissipate_rate < DISSIPATE_MIN + DISSIPATE_SPAN);
        let half = orb.archetype.speed / 2.0;
        assert!(orb.velocity.x.abs() <= half && orb.velocity.y.abs() <= half);
    }
    assert_invariants(&field);
}

#[test]
fn same_seed_gives_same_field() {
    let mut a = make_field(42);
    let mut b = make_field(42);
    for _ in 0..1500 {
        a.tick();
        b.tick();
    }
    for (oa, ob) in a.orbs.iter().zip(b.orbs.iter()) {
        assert_eq!(oa.position, ob.position);
        assert_eq!(oa.velocity, ob.velocity);
        assert_eq!(oa.life, ob.life);
    }
}

#[test]
fn orb_reflects_off_left_wall_and_is_clamped() {
    let mut field = make_field(3);
    {
        let orb = &mut field.orbs[0];
        orb.position = Vec2::new(0.0, 100.0);
        orb.velocity = Vec2::new(-0.5, 0.0);
        orb.life = 1.0;
        orb.dissipate_rate = 0.001;
    }
    field.tick();
    let orb = &field.orbs[0];
    assert_eq!(orb.velocity.x, 0.5);
    assert_eq!(orb.position.x, 0.0);
    assert_eq!(orb.position.y, 100.0);
    assert_eq!(orb.velocity.y, 0.0);
}

#[test]
fn orb_reflects_off_far_wall() {
    let mut field = make_field(3);
    let size = field.orbs[0].archetype.size;
    let max_y = 800.0 - size;
    {
        let orb = &mut field.orbs[0];
        orb.position = Vec2::new(200.0, max_y - 0.1);
        orb.velocity = Vec2::new(0.0, 0.3);
    }
    field.tick();
    let orb = &field.orbs[0];
    assert!(orb.velocity.y < 0.0);
    assert_eq!(orb.position.y, max_y);
}

#[test]
fn expired_orb_is_recreated_within_the_same_tick() {
    let mut field = make_field(5);
    {
        let orb = &mut field.orbs[2];
        orb.life = 0.0005;
        orb.dissipate_rate = 0.001;
        orb.position = Vec2::new(10.0, 10.0);
    }
    field.tick();
    let orb = &field.orbs[2];
    assert!(orb.fresh);
    assert_eq!(orb.life, orb.max_life);
    assert_eq!(orb.archetype, OrbArchetype::for_index(2));
    assert!(orb.dissipate_rate >= DISSIPATE_MIN);
    assert!(orb.dissipate_rate < DISSIPATE_MIN + DISSIPATE_SPAN);
    assert_invariants(&field);

    let sample = field.sample(orb);
    assert_eq!(sample.opacity, BASE_OPACITY);
    assert_eq!(sample.scale, FRESH_SCALE);

    // next tick it decays normally again
    field.tick();
    assert!(!field.orbs[2].fresh);
}

#[test]
fn samples_track_remaining_life() {
    let mut field = make_field(8);
    field.orbs[0].life = 0.5;
    let sample = field.sample(&field.orbs[0]);
    assert!((sample.opacity - BASE_OPACITY * 0.5).abs() < 1e-6);
    assert!((sample.scale - (SCALE_BASE + 0.5 * SCALE_SPAN)).abs() < 1e-6);
    assert_eq!(sample.color, field.orbs[0].archetype.color);
    assert_eq!(sample.size, field.orbs[0].archetype.size);
    assert_eq!(field.samples().count(), field.len());
}

#[test]
fn invariants_hold_over_long_run_with_pointer() {
    let mut field = make_field(11);
    field.set_pointer(Vec2::new(500.0, 400.0));
    for step in 0..5000 {
        if step % 3 == 0 {
            field.apply_pointer_influence();
        }
        if step % 700 == 0 {
            // wander the pointer around, including onto an orb
            let target = field.orbs[step % field.len()].position;
            field.set_pointer(target);
        }
        field.tick();
        assert_invariants(&field);
    }
}

#[test]
fn pointer_impulse_is_zero_outside_radius() {
    let impulse = pointer_impulse(Vec2::ZERO, Vec2::new(200.0, 0.0), 200.0, 0.01);
    assert_eq!(impulse, Vec2::ZERO);
    let impulse = pointer_impulse(Vec2::ZERO, Vec2::new(300.0, 400.0), 200.0, 0.01);
    assert_eq!(impulse, Vec2::ZERO);
}

#[test]
fn pointer_impulse_at_zero_distance_is_zero_not_nan() {
    let p = Vec2::new(123.0, 45.0);
    let impulse = pointer_impulse(p, p, POINTER_RADIUS, POINTER_STRENGTH);
    assert_eq!(impulse, Vec2::ZERO);

    let mut field = make_field(2);
    let before = field.orbs[0].velocity;
    field.set_pointer(field.orbs[0].position);
    field.apply_pointer_influence();
    assert_eq!(field.orbs[0].velocity, before);
    assert!(field.orbs.iter().all(|o| o.velocity.is_finite()));
}

#[test]
fn pointer_impulse_pulls_toward_pointer() {
    let impulse = pointer_impulse(Vec2::ZERO, Vec2::new(100.0, 0.0), 200.0, 0.01);
    assert!((impulse.x - 0.005).abs() < 1e-7);
    assert_eq!(impulse.y, 0.0);

    let impulse = pointer_impulse(Vec2::new(50.0, 50.0), Vec2::new(50.0, 0.0), 200.0, 0.01);
    assert!(impulse.y < 0.0);
    assert_eq!(impulse.x, 0.0);
}

#[test]
fn repeated_pointer_influence_compounds() {
    let mut field = make_field(4);
    let pointer = field.orbs[0].position + Vec2::new(50.0, 0.0);
    field.set_pointer(pointer);
    assert_eq!(field.pointer(), pointer);
    let v0 = field.orbs[0].velocity.x;
    field.apply_pointer_influence();
    let v1 = field.orbs[0].velocity.x;
    field.apply_pointer_influence();
    let v2 = field.orbs[0].velocity.x;
    assert!(v1 > v0);
    assert!((v2 - v1 - (v1 - v0)).abs() < 1e-6);
}

#[test]
fn add_orb_stops_at_hard_cap() {
    let mut field = make_field(6);
    for _ in 0..EXTRA_ORBS {
        assert!(field.add_orb());
    }
    assert_eq!(field.len(), INITIAL_ORBS + EXTRA_ORBS);
    assert!(!field.add_orb());
    assert_eq!(field.len(), INITIAL_ORBS + EXTRA_ORBS);
    assert_eq!(field.orbs[INITIAL_ORBS].archetype, OrbArchetype::for_index(INITIAL_ORBS));
}

#[test]
fn remove_orb_stops_at_floor() {
    let mut field = make_field(6);
    let last_position = field.orbs[INITIAL_ORBS - 1].position;
    assert!(field.remove_orb());
    assert!(field.orbs.iter().all(|o| o.position != last_position));
    while field.remove_orb() {}
    assert_eq!(field.len(), MIN_ORBS);
    assert!(!field.remove_orb());
    assert_eq!(field.len(), MIN_ORBS);
}

#[test]
fn scale_speed_multiplies_every_velocity() {
    let mut field = make_field(9);
    let before: Vec<Vec2> = field.orbs.iter().map(|o| o.velocity).collect();
    field.scale_speed(SPEED_UP_FACTOR);
    for (orb, v) in field.orbs.iter().zip(before) {
        assert!((orb.velocity - v * SPEED_UP_FACTOR).length() < 1e-6);
    }
}

#[test]
fn scale_life_rescales_max_and_current() {
    let mut field = make_field(10);
    field.orbs[1].life = 0.8;
    field.scale_life(0.5);
    for orb in &field.orbs {
        assert!((orb.max_life - 0.5).abs() < 1e-6);
        assert!(orb.life <= orb.max_life);
    }
    assert!((field.orbs[1].life - 0.4).abs() < 1e-6);

    // new orbs inherit the rescaled life
    field.add_orb();
    let added = field.orbs.last().unwrap();
    assert!((added.max_life - 0.5).abs() < 1e-6);

    field.scale_life(-3.0);
    for orb in &field.orbs {
        assert_eq!(orb.max_life, MIN_MAX_LIFE);
        assert_eq!(orb.life, MIN_MAX_LIFE);
    }
    field.tick();
    assert_invariants(&field);
}

#[test]
fn zero_life_multiplier_keeps_orbs_alive_and_still() {
    let mut field = make_field(14);
    field.scale_life(0.0);
    let positions: Vec<Vec2> = field.orbs.iter().map(|o| o.position).collect();
    for _ in 0..3 {
        field.tick();
        for orb in &field.orbs {
            assert!(orb.life > 0.0, "life stays at or below zero after a tick");
            assert!(orb.max_life >= MIN_MAX_LIFE);
            assert!(!orb.fresh, "orb was recreated on a consecutive tick");
        }
    }
    // orbs drift by velocity only; nothing teleports
    for (orb, start) in field.orbs.iter().zip(positions) {
        assert!((orb.position - start).length() <= 3.0 * orb.archetype.speed);
    }

    field.scale_life(f32::NAN);
    field.tick();
    assert!(field.orbs.iter().all(|o| o.life > 0.0));
}

#[test]
fn stretched_life_still_renders_within_range() {
    let mut field = make_field(15);
    field.scale_life(10.0);
    for orb in &field.orbs {
        assert!((orb.max_life - 10.0).abs() < 1e-5);
        let sample = field.sample(orb);
        assert!(sample.opacity >= 0.0 && sample.opacity <= 1.0);
        assert!(sample.opacity <= BASE_OPACITY);
        assert!(sample.scale <= SCALE_BASE + SCALE_SPAN + 1e-6);
    }
}

#[test]
fn shrinking_viewport_pulls_orbs_inside() {
    let mut field = make_field(12);
    for orb in field.orbs.iter_mut() {
        orb.position = Vec2::new(500.0, 300.0);
    }
    field.set_viewport(Viewport::new(600.0, 500.0));
    assert_invariants(&field);
    for orb in &field.orbs {
        assert_eq!(orb.position.x, (600.0 - orb.archetype.size).min(500.0));
    }
}

#[test]
fn viewport_smaller_than_orbs_pins_them_to_origin() {
    let mut field = OrbField::new(OrbParams::default(), Viewport::new(100.0, 100.0), 13);
    for _ in 0..50 {
        field.tick();
        field.apply_pointer_influence();
    }
    for orb in &field.orbs {
        assert_eq!(orb.position, Vec2::ZERO);
    }
    assert_invariants(&field);
}
