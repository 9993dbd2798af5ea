use fractal_core::graph::functions::{sample, FunctionKind};
use fractal_core::graph::{Graph, TransitionMode};

#[test]
fn test_grid_samples_cell_centers_over_unit_square() {
    let mut graph = Graph::new(10);
    graph.update(0.0, 0.0);

    let positions = graph.positions();
    assert_eq!(positions.len(), 100);

    let step = 2.0 / 10.0;
    for z in 0..10 {
        for x in 0..10 {
            let u = (x as f32 + 0.5) * step - 1.0;
            let v = (z as f32 + 0.5) * step - 1.0;
            let got = positions[z * 10 + x];
            let want = sample(FunctionKind::Wave, u, v, 0.0);
            assert!(
                (got - want).length() < 1e-6,
                "point ({x}, {z}): {got:?} vs {want:?}"
            );
        }
    }
}

#[test]
fn test_resolution_is_clamped_to_usable_range() {
    assert_eq!(Graph::new(1).resolution(), 10);
    assert_eq!(Graph::new(50).resolution(), 50);
    assert_eq!(Graph::new(10_000).resolution(), 200);
}

#[test]
fn test_function_cycles_after_display_duration() {
    let mut graph = Graph::new(10);
    assert_eq!(graph.function(), FunctionKind::Wave);

    // Half the display duration: still waving, no transition.
    graph.update(0.5, 0.5);
    assert_eq!(graph.function(), FunctionKind::Wave);
    assert!(!graph.is_transitioning());

    // Crossing the display duration starts a transition to the next kind.
    graph.update(0.5, 1.0);
    assert_eq!(graph.function(), FunctionKind::MultiWave);
    assert!(graph.is_transitioning());

    // Crossing the transition duration settles on the new function.
    graph.update(1.0, 2.0);
    assert_eq!(graph.function(), FunctionKind::MultiWave);
    assert!(!graph.is_transitioning());
}

#[test]
fn test_transition_blends_between_functions() {
    let mut graph = Graph::new(10);
    graph.function_duration = 1.0;
    graph.transition_duration = 1.0;

    // Enter a transition, then advance halfway through it.
    graph.update(1.0, 0.0);
    assert!(graph.is_transitioning());
    graph.update(0.5, 0.0);
    assert!(graph.is_transitioning());

    // Mid-transition points sit strictly between both functions at the
    // sampled grid coordinate (smoothstep(0.5) = 0.5).
    let step = 2.0 / 10.0;
    let u = 0.5 * step - 1.0;
    let v = u;
    let from = sample(FunctionKind::Wave, u, v, 0.0);
    let to = sample(FunctionKind::MultiWave, u, v, 0.0);
    let want = from.lerp(to, 0.5);
    let got = graph.positions()[0];
    assert!(
        (got - want).length() < 1e-5,
        "mid-transition blend: {got:?} vs {want:?}"
    );
}

#[test]
fn test_random_mode_always_changes_function() {
    let mut graph = Graph::new(10);
    graph.transition_mode = TransitionMode::Random;
    graph.function_duration = 1.0;
    graph.transition_duration = 1.0;

    let mut time = 0.0;
    for round in 0..10 {
        let before = graph.function();
        // One display period, then one transition period.
        time += 1.0;
        graph.update(1.0, time);
        assert_ne!(
            graph.function(),
            before,
            "round {round}: random pick repeated {before:?}"
        );
        time += 1.0;
        graph.update(1.0, time);
        assert!(!graph.is_transitioning(), "round {round}");
    }
}
