// Host-side tests for the damped spring follower.

use glam::Vec2;
use planetary_core::{step_axis, SpringFollower, SpringParams, SPRING_ORIGIN};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn follower() -> SpringFollower {
    SpringFollower::new(SpringParams::default(), SPRING_ORIGIN, Duration::ZERO)
}

#[test]
fn default_tuning_is_overdamped() {
    let p = SpringParams::default();
    assert!(p.damping_ratio() >= 1.0, "ratio {}", p.damping_ratio());
    assert!((p.natural_frequency() - 30.0).abs() < 1e-3);
}

#[test]
fn converges_within_a_pixel_in_bounded_frames() {
    let mut s = follower();
    let target = Vec2::new(500.0, 300.0);
    s.set_target(target, Duration::ZERO);

    let mut now = Duration::ZERO;
    let mut frames_to_1px = None;
    for frame in 1..=150 {
        now += FRAME;
        let pos = s.tick(now, FRAME);
        if frames_to_1px.is_none() && (pos - target).length() < 1.0 {
            frames_to_1px = Some(frame);
        }
    }
    let frames = frames_to_1px.expect("never got within 1px");
    assert!(frames <= 90, "took {frames} frames");
    assert!(s.is_at_rest());
    assert_eq!(s.position, target);
}

#[test]
fn does_not_overshoot_with_default_damping() {
    let mut s = follower();
    let target = Vec2::new(500.0, 300.0);
    s.set_target(target, Duration::ZERO);
    let mut now = Duration::ZERO;
    for _ in 0..200 {
        now += FRAME;
        let pos = s.tick(now, FRAME);
        assert!(pos.x <= target.x + 0.5, "overshot x: {}", pos.x);
        assert!(pos.y <= target.y + 0.5, "overshot y: {}", pos.y);
    }
}

#[test]
fn keeps_animating_after_pointer_stops_then_halts() {
    let mut s = follower();
    s.set_target(Vec2::new(200.0, 200.0), Duration::ZERO);
    let first = s.tick(FRAME, FRAME);
    let second = s.tick(FRAME * 2, FRAME);
    assert_ne!(first, second, "spring should keep moving without new samples");

    let mut now = FRAME * 2;
    for _ in 0..300 {
        now += FRAME;
        s.tick(now, FRAME);
    }
    assert!(s.is_at_rest());
    let rested = s.position;
    now += FRAME;
    assert_eq!(s.tick(now, FRAME), rested);
    assert_eq!(s.velocity, Vec2::ZERO);
}

#[test]
fn large_time_steps_stay_finite_and_close() {
    let mut s = follower();
    let target = Vec2::new(-40.0, 900.0);
    s.set_target(target, Duration::ZERO);
    let pos = s.tick(Duration::from_secs(2), Duration::from_secs(2));
    assert!(pos.is_finite());
    assert!((pos - target).length() < 1.0);
}

#[test]
fn underdamped_spring_overshoot_is_bounded() {
    let params = SpringParams {
        stiffness: 300.0,
        damping: 10.0,
        mass: 1.0,
    };
    assert!(params.damping_ratio() < 1.0);
    let mut s = SpringFollower::new(params, Vec2::ZERO, Duration::ZERO);
    s.set_target(Vec2::new(100.0, 0.0), Duration::ZERO);
    let mut now = Duration::ZERO;
    let mut max_x = 0.0f32;
    for _ in 0..600 {
        now += FRAME;
        max_x = max_x.max(s.tick(now, FRAME).x);
    }
    assert!(max_x > 100.0, "expected some overshoot");
    assert!(max_x < 160.0, "overshoot too large: {max_x}");
    assert!((s.position.x - 100.0).abs() < 1.0);
}

#[test]
fn critical_step_matches_closed_form() {
    let (x, v) = step_axis(1.0, 0.0, 10.0, 1.0, 0.1);
    let expected = (-1.0f32).exp() * 2.0;
    assert!((x - expected).abs() < 1e-5, "x={x} expected={expected}");
    assert!(v < 0.0);
}

#[test]
fn zero_dt_is_identity() {
    assert_eq!(step_axis(3.0, -2.0, 30.0, 2.0, 0.0), (3.0, -2.0));
}

#[test]
fn follow_delay_holds_target_back() {
    let delay = Duration::from_millis(100);
    let mut s = SpringFollower::new(SpringParams::default(), Vec2::ZERO, delay);
    s.set_target(Vec2::new(50.0, 0.0), Duration::ZERO);

    let pos = s.tick(Duration::from_millis(50), Duration::from_millis(50));
    assert_eq!(pos, Vec2::ZERO);
    assert!(!s.is_at_rest(), "a queued target is not rest");

    let pos = s.tick(Duration::from_millis(116), Duration::from_millis(66));
    assert_eq!(s.target(), Vec2::new(50.0, 0.0));
    assert!(pos.x > 0.0);
}
