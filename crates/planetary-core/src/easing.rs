//! Easing curves and looping keyframe helpers.
//!
//! All curves map `t` in \[0, 1\] to \[0, 1\] and clamp their input, so callers
//! can pass raw elapsed fractions without guarding the ends.

use std::f32::consts::PI;
use std::time::Duration;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fraction of `duration` covered by `elapsed`, clamped to \[0, 1\].
/// A zero duration counts as already finished.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Position within a repeating cycle, in \[0, 1).
#[inline]
pub fn cycle(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f32() / period.as_secs_f32()).fract()
}

/// Looping `a -> b -> a` keyframes eased with sine in-out on each half.
pub fn pulse(a: f32, b: f32, period: Duration, elapsed: Duration) -> f32 {
    let c = cycle(elapsed, period);
    let half = if c < 0.5 { c * 2.0 } else { (1.0 - c) * 2.0 };
    lerp(a, b, sine_in_out(half))
}

/// Continuous rotation in radians for a linear loop of `period`.
#[inline]
pub fn spin(period: Duration, elapsed: Duration) -> f32 {
    cycle(elapsed, period) * 2.0 * PI
}

