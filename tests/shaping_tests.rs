// Property-style tests for the stateless shaping primitives.

use drone::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_points() -> Vec<f64> {
    (-400..=400).map(|i| i as f64 * 0.0125).collect()
}

#[test]
fn clip_stays_in_unit_range_and_is_idempotent() {
    for x in sample_points() {
        let c = clip01(x);
        assert!((0.0..=1.0).contains(&c), "clip01({x}) = {c}");
        assert_eq!(clip01(c), c);
    }
    assert_eq!(clip(5.0, -1.0, 2.0), 2.0);
    assert_eq!(clip(-5.0, -1.0, 2.0), -1.0);
}

#[test]
fn clip_does_not_panic_on_nan() {
    let c = clip01(f64::NAN);
    assert!(c.is_nan() || (0.0..=1.0).contains(&c));
}

#[test]
fn normalize_collapsed_range_returns_lower_bound() {
    assert_eq!(normalize(3.0, 2.0, 2.0), 2.0);
    assert_eq!(renormalize(3.0, 2.0, 2.0, 0.0, 10.0), 20.0);
    assert!(normalize(3.0, 2.0, 2.0).is_finite());
}

#[test]
fn normalize_and_denormalize_are_inverse() {
    for x in sample_points() {
        let n = normalize(x, -3.0, 7.0);
        assert!((denormalize(n, -3.0, 7.0) - x).abs() < 1e-9);
    }
    assert_eq!(normalize(7.0, -3.0, 7.0), 1.0);
    assert_eq!(denormalize(0.0, -3.0, 7.0), -3.0);
}

#[test]
fn renormalize_round_trip_law() {
    let ranges = [(0.0, 1.0, -1.0, 1.0), (2.0, 5.0, 100.0, -40.0), (-8.0, -2.0, 0.5, 0.25)];
    for (a, b, c, d) in ranges {
        for x in sample_points() {
            let there = renormalize(x, a, b, c, d);
            let back = renormalize(there, c, d, a, b);
            assert!((back - x).abs() < 1e-9, "round trip of {x} via [{a},{b}]->[{c},{d}]");
        }
    }
}

#[test]
fn wrap_mod_is_non_negative_for_positive_modulus() {
    assert_eq!(wrap_mod(-1.0, 12.0), 11.0);
    assert_eq!(wrap_mod(13.0, 12.0), 1.0);
    assert!((wrap_mod(-0.25, 1.0) - 0.75).abs() < 1e-12);
    for x in sample_points() {
        let m = wrap_mod(x, 1.5);
        assert!((0.0..1.5).contains(&m), "wrap_mod({x}, 1.5) = {m}");
    }
    assert_eq!(wrap_index(-1, 4), 3);
    assert_eq!(wrap_index(9, 4), 1);
}

#[test]
fn impulse_is_unit_peaked_symmetric_and_decays() {
    assert!((impulse(0.0) - 1.0).abs() < 1e-12);
    for x in sample_points() {
        assert_eq!(impulse(x), impulse(-x));
        assert!(impulse(x) <= 1.0 && impulse(x) >= 0.0);
    }
    assert!(impulse(10.0) < 1e-12);
    assert!(impulse(-10.0) < 1e-12);
    let mut prev = impulse(0.0);
    for i in 1..100 {
        let v = impulse(i as f64 * 0.1);
        assert!(v < prev, "impulse should fall away from 0");
        prev = v;
    }
}

#[test]
fn cos_pulse_gates_on_integer_phases() {
    assert!((cos_pulse(0.0, 20) - 1.0).abs() < 1e-12);
    assert!((cos_pulse(3.0, 20) - 1.0).abs() < 1e-9);
    assert!(cos_pulse(0.5, 20) < 1e-12);
    // sharpened gate is near silent most of the cycle
    assert!(cos_pulse(0.25, 20) < 1e-5);
}

#[test]
fn arr_at_wraps_in_both_directions() {
    let arr = [10, 20, 30, 40, 50];
    for i in -20..20_i64 {
        assert_eq!(arr_at(&arr, i), arr_at(&arr, i + arr.len() as i64));
    }
    assert_eq!(*arr_at(&arr, -1), 50);
    assert_eq!(*arr_at(&arr, 7), 30);
}

#[test]
fn rand_range_stays_in_half_open_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let v = rand_range(&mut rng, -2.0, 3.0);
        assert!((-2.0..3.0).contains(&v));
    }
    // empty range never panics
    assert_eq!(rand_range(&mut rng, 0.0, 0.0), 0.0);
}

#[test]
fn finite_or_replaces_non_finite_values() {
    assert_eq!(finite_or(f64::NAN, 0.5), 0.5);
    assert_eq!(finite_or(f64::INFINITY, 0.0), 0.0);
    assert_eq!(finite_or(-3.0, 0.0), -3.0);
}
