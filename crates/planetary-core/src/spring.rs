//! Damped spring follower.
//!
//! Each step solves the spring ODE in closed form for a target held fixed
//! over `dt`, so the result is exact and stable for any frame time. This
//! matters for the default tuning (stiffness 90, mass 0.1): an explicit
//! Euler step at 60Hz would already be at the edge of stability.

use crate::config::SpringParams;
use crate::constants::{FOLLOW_QUEUE_MAX, SPRING_REST_DISTANCE, SPRING_REST_SPEED};
use glam::Vec2;
use std::collections::VecDeque;
use std::time::Duration;

/// Advance displacement `x` and velocity `v` of a unit spring by `dt` seconds.
/// `omega` is the natural frequency and `zeta` the damping ratio.
pub fn step_axis(x: f32, v: f32, omega: f32, zeta: f32, dt: f32) -> (f32, f32) {
    if dt <= 0.0 {
        return (x, v);
    }
    if (zeta - 1.0).abs() < 1e-4 {
        let e = (-omega * dt).exp();
        let b = v + omega * x;
        (e * (x + b * dt), e * (v - omega * b * dt))
    } else if zeta < 1.0 {
        let a = zeta * omega;
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let e = (-a * dt).exp();
        let (s, c) = (wd * dt).sin_cos();
        let x1 = e * (x * c + (v + a * x) / wd * s);
        let v1 = e * (v * c - (a * v + omega * omega * x) / wd * s);
        (x1, v1)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c1 = (v - r2 * x) / (r1 - r2);
        let c2 = x - c1;
        let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// Trailing position that chases the sampled pointer on the render clock.
#[derive(Clone, Debug)]
pub struct SpringFollower {
    pub position: Vec2,
    pub velocity: Vec2,
    target: Vec2,
    omega: f32,
    zeta: f32,
    follow_delay: Duration,
    pending: VecDeque<(Duration, Vec2)>,
    at_rest: bool,
}

impl SpringFollower {
    pub fn new(params: SpringParams, origin: Vec2, follow_delay: Duration) -> Self {
        Self {
            position: origin,
            velocity: Vec2::ZERO,
            target: origin,
            omega: params.natural_frequency(),
            zeta: params.damping_ratio(),
            follow_delay,
            pending: VecDeque::new(),
            at_rest: true,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest && self.pending.is_empty()
    }

    /// Record a new pointer sample taken at `now`. With a follow delay the
    /// spring only sees it once the delay has elapsed.
    pub fn set_target(&mut self, target: Vec2, now: Duration) {
        if self.follow_delay.is_zero() {
            self.retarget(target);
            return;
        }
        if self.pending.len() >= FOLLOW_QUEUE_MAX {
            self.pending.pop_front();
        }
        self.pending.push_back((now + self.follow_delay, target));
    }

    fn retarget(&mut self, target: Vec2) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Integrate one render frame. Returns the new smoothed position.
    pub fn tick(&mut self, now: Duration, dt: Duration) -> Vec2 {
        let mut due = None;
        while let Some(&(at, t)) = self.pending.front() {
            if at > now {
                break;
            }
            due = Some(t);
            self.pending.pop_front();
        }
        if let Some(t) = due {
            self.retarget(t);
        }
        if self.at_rest {
            return self.position;
        }

        let dt = dt.as_secs_f32();
        let d = self.position - self.target;
        let (dx, vx) = step_axis(d.x, self.velocity.x, self.omega, self.zeta, dt);
        let (dy, vy) = step_axis(d.y, self.velocity.y, self.omega, self.zeta, dt);
        self.position = self.target + Vec2::new(dx, dy);
        self.velocity = Vec2::new(vx, vy);

        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
        if (self.position - self.target).length() < SPRING_REST_DISTANCE
            && self.velocity.length() < SPRING_REST_SPEED
        {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
            self.at_rest = true;
        }
        self.position
    }
}
