use fractal_core::math::{fract, hash11, move_towards, smoothstep};

#[test]
fn test_move_towards_reaches_target_without_overshoot() {
    assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
    assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
    assert_eq!(move_towards(10.0, 10.0, 3.0), 10.0);
}

#[test]
fn test_move_towards_handles_negative_direction() {
    assert_eq!(move_towards(0.0, -10.0, 2.5), -2.5);
    assert_eq!(move_towards(-9.5, -10.0, 2.5), -10.0);
}

#[test]
fn test_smoothstep_edges_and_midpoint() {
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    // Clamped outside the edges.
    assert_eq!(smoothstep(0.0, 1.0, -5.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 5.0), 1.0);
}

#[test]
fn test_fract_wraps_negatives_into_unit_range() {
    assert_eq!(fract(1.25), 0.25);
    assert_eq!(fract(-0.25), 0.75);
    assert_eq!(fract(3.0), 0.0);
}

#[test]
fn test_hash11_is_deterministic_and_in_range() {
    for i in 0..1000 {
        let x = i as f32 * 0.37;
        let h = hash11(x);
        assert!((0.0..1.0).contains(&h), "hash11({x}) = {h} out of range");
        assert_eq!(h, hash11(x), "hash must be deterministic");
    }
}

#[test]
fn test_hash11_spreads_nearby_inputs() {
    let a = hash11(1.0);
    let b = hash11(1.001);
    assert!((a - b).abs() > 1e-4, "nearby inputs should decorrelate: {a} vs {b}");
}
