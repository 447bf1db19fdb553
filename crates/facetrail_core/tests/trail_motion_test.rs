//! # Trail Motion Tests
//!
//! End-to-end motion properties of the chain: length, speed, containment,
//! continuity across mode switches, and convergence while following.

use facetrail_core::{AnimatorConfig, ChainAnimator, MotionMode, Point2D, Viewport};

const EPS: f64 = 1e-9;

fn scenario_a() -> ChainAnimator {
    let config = AnimatorConfig::default()
        .with_segment_count(8)
        .with_follow_gain(0.08)
        .with_bounce_speed(2.5)
        .with_start(Point2D::new(400.0, 300.0))
        .with_seed(2024);
    ChainAnimator::new(&config, Viewport::new(800.0, 600.0)).expect("scenario config is valid")
}

/// Test: leave then one tick moves the anchor exactly 2.5 px and the head 20% of the way.
#[test]
fn test_scenario_a_first_bounce_tick() {
    let mut animator = scenario_a();
    let start = Point2D::new(400.0, 300.0);

    animator.on_pointer_leave();
    assert_eq!(animator.autonomous().position, start);

    let snapshot = animator.tick();
    let anchor = animator.autonomous().position;

    assert!((anchor.distance(start) - 2.5).abs() < EPS);
    let expected_head = start.lerp(anchor, 0.2);
    assert!(snapshot.head().distance(expected_head) < EPS);
    assert!((snapshot.head().distance(start) - 0.5).abs() < EPS);
}

/// Test: chain length never changes across modes, resizes and many ticks.
#[test]
fn test_chain_length_invariant() {
    let mut animator = scenario_a();
    for i in 0..2000 {
        match i % 500 {
            0 => animator.on_pointer_move(Point2D::new(10.0, 10.0)),
            100 => animator.on_pointer_leave(),
            200 => animator.on_viewport_resize(300.0, 900.0),
            300 => animator.on_viewport_resize(800.0, 600.0),
            _ => {}
        }
        assert_eq!(animator.tick().len(), 8);
    }
}

/// Test: the anchor keeps its speed and stays inside the inset bounds.
#[test]
fn test_bounce_speed_and_containment() {
    for seed in [1, 7, 42, 1234, 99_999] {
        let config = AnimatorConfig::default()
            .with_seed(seed)
            .with_start(Point2D::new(400.0, 300.0));
        let viewport = Viewport::new(800.0, 600.0);
        let mut animator = ChainAnimator::new(&config, viewport).expect("valid config");
        let radius = animator.icon_radius();

        for _ in 0..5000 {
            animator.tick();
            let state = animator.autonomous();
            assert!(
                viewport.contains(state.position, radius),
                "seed {seed}: anchor escaped to {:?}",
                state.position
            );
            assert!((state.speed() - 2.5).abs() < EPS, "seed {seed}: speed drifted");
        }
        assert_eq!(animator.mode(), MotionMode::Autonomous);
    }
}

/// Test: switching modes never teleports the head.
#[test]
fn test_mode_switch_continuity() {
    let mut animator = scenario_a();
    animator.on_pointer_move(Point2D::new(700.0, 100.0));
    for _ in 0..40 {
        animator.tick();
    }

    let before = animator.head();
    animator.on_pointer_leave();
    assert_eq!(animator.autonomous().position, before);

    let after = animator.tick().head();
    // Head moves 20% of one 2.5 px anchor step
    assert!(after.distance(before) <= 0.5 + EPS);

    animator.on_pointer_move(Point2D::new(100.0, 500.0));
    let before = animator.head();
    let after = animator.tick().head();
    let expected = before.lerp(Point2D::new(100.0, 500.0), 0.08);
    assert!(after.distance(expected) < EPS);
}

/// Test: a resting pointer pulls the whole chain onto it.
#[test]
fn test_follow_convergence() {
    let mut animator = scenario_a();
    let target = Point2D::new(620.0, 180.0);
    animator.on_pointer_move(target);

    let mut previous = animator.head().distance(target);
    for _ in 0..100 {
        let distance = animator.tick().head().distance(target);
        assert!(distance < previous);
        assert!((distance - previous * 0.92).abs() < 1e-6 * previous.max(1.0));
        previous = distance;
    }

    for _ in 100..500 {
        animator.tick();
    }
    assert!(animator.head().distance(target) < 0.01);

    for _ in 500..3000 {
        animator.tick();
    }
    for (i, point) in animator.chain().iter().enumerate() {
        assert!(point.distance(target) < 0.01, "segment {i} at {point:?}");
    }
}

/// Test: each trailing segment lags the one ahead of it while converging.
#[test]
fn test_segments_trail_in_order() {
    let mut animator = scenario_a();
    let target = Point2D::new(780.0, 300.0);
    animator.on_pointer_move(target);

    for _ in 0..60 {
        let snapshot = animator.tick();
        let distances: Vec<f64> = snapshot.points().iter().map(|p| p.distance(target)).collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1] + EPS);
        }
    }
}

/// Test: the same seed replays the same bounce path and the same published coordinates.
#[test]
fn test_seeded_chain_reproducible() {
    let run = || {
        let mut animator = scenario_a();
        animator.on_pointer_leave();
        (0..300)
            .map(|_| animator.tick().coordinates().to_vec())
            .collect::<Vec<_>>()
    };
    let first = run();
    assert_eq!(first, run());
    assert!(first.iter().all(|coords| coords.len() == 16));
}
