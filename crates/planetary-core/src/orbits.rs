//! Kinematics of the orbiting-moons variant. Pure functions of elapsed time;
//! nothing here carries state between frames.

use crate::config::SatelliteConfig;
use crate::constants::*;
use crate::easing::{ease_out_cubic, linear, progress, pulse, spin};
use glam::Vec2;
use std::time::Duration;

/// Angle of moon `index` in radians, `elapsed` after the variant appeared.
pub fn moon_angle(index: usize, moon: &SatelliteConfig, elapsed: Duration) -> f32 {
    let start = (index as f32 * MOON_PHASE_STEP_DEG).to_radians();
    match elapsed.checked_sub(moon.delay) {
        Some(running) => start + spin(moon.orbit_duration, running),
        None => start,
    }
}

pub fn moon_opacity(moon: &SatelliteConfig, elapsed: Duration) -> f32 {
    let running = elapsed.saturating_sub(moon.delay);
    linear(progress(running, MOON_FADE_IN))
}

/// Offset of the moon from the marker centre.
pub fn moon_offset(index: usize, moon: &SatelliteConfig, elapsed: Duration) -> Vec2 {
    let (s, c) = moon_angle(index, moon, elapsed).sin_cos();
    Vec2::new(c, s) * moon.distance
}

pub fn ring_rotation(elapsed: Duration) -> f32 {
    spin(RING_SPIN_PERIOD, elapsed)
}

pub fn ring_opacity(elapsed: Duration) -> f32 {
    pulse(RING_OPACITY.0, RING_OPACITY.1, RING_OPACITY_PERIOD, elapsed)
}

/// Ring ellipse radii for a marker of `size`.
pub fn ring_radii(size: f32) -> Vec2 {
    Vec2::new(size * RING_WIDTH_FACTOR / 2.0, size * RING_HEIGHT_FACTOR / 2.0)
}

pub fn marker_scale_in(elapsed: Duration) -> f32 {
    ease_out_cubic(progress(elapsed, PLANET_SCALE_IN))
}

pub fn marker_spin(elapsed: Duration) -> f32 {
    spin(PLANET_SPIN_PERIOD, elapsed)
}

/// Glow halo scale and opacity.
pub fn glow(elapsed: Duration) -> (f32, f32) {
    (
        pulse(GLOW_SCALE.0, GLOW_SCALE.1, GLOW_PERIOD, elapsed),
        pulse(GLOW_OPACITY.0, GLOW_OPACITY.1, GLOW_PERIOD, elapsed),
    )
}

/// Surface spots as (dx, dy, radius, alpha); lengths in marker-size units.
pub const SURFACE_SPOTS: [(f32, f32, f32, f32); 4] = [
    (-0.10, -0.10, 0.17, 0.20),
    (0.08, 0.25, 0.12, 0.10),
    (0.22, -0.22, 0.10, 0.10),
    (0.05, 0.12, 0.20, 0.15),
];
