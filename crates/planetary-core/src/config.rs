//! Overlay configuration.
//!
//! Every field is optional from the embedding page's point of view; the
//! `Default` impl reproduces the planetary system look and
//! [`OverlayConfig::single_planet`] the lighter single-planet follower.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("planet size must be positive and finite, got {0}")]
    PlanetSize(f32),
    #[error("spring {field} must be positive and finite, got {value}")]
    Spring { field: &'static str, value: f32 },
    #[error("satellite {index}: {field} must be positive and finite, got {value}")]
    Satellite {
        index: usize,
        field: &'static str,
        value: f32,
    },
    #[error("too many satellites: {0} (max {max})", max = MAX_SATELLITES)]
    TooManySatellites(usize),
}

/// Damped spring parameters in framer-style units (px, seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1.0 is critical damping; above it the follower never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A moon on a fixed circular orbit around the central marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SatelliteConfig {
    pub size: f32,
    pub distance: f32,
    pub color: String,
    pub orbit_duration: Duration,
    pub delay: Duration,
}

impl SatelliteConfig {
    pub fn new(size: f32, distance: f32, color: &str, orbit_secs: f32, delay_secs: f32) -> Self {
        Self {
            size,
            distance,
            color: color.to_string(),
            orbit_duration: secs(orbit_secs),
            delay: secs(delay_secs),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub planet_size: f32,
    pub planet_color: String,
    pub show_rings: bool,
    pub trail_effect: bool,
    pub follow_delay: Duration,
    pub activation_delay: Duration,
    pub spring: SpringParams,
    pub moons: Vec<SatelliteConfig>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            planet_size: DEFAULT_PLANET_SIZE,
            planet_color: DEFAULT_PLANET_COLOR.to_string(),
            show_rings: true,
            trail_effect: false,
            follow_delay: Duration::ZERO,
            activation_delay: ACTIVATION_DELAY,
            spring: SpringParams::default(),
            moons: vec![
                SatelliteConfig::new(10.0, 80.0, "#7dd3fc", 5.0, 0.0),
                SatelliteConfig::new(15.0, 110.0, "#e0f2fe", 8.0, 0.5),
            ],
        }
    }
}

impl OverlayConfig {
    /// Single planet with rings and no moons, on a stiffer, slightly delayed spring.
    pub fn single_planet() -> Self {
        Self {
            planet_size: SINGLE_PLANET_SIZE,
            follow_delay: SINGLE_PLANET_FOLLOW_DELAY,
            activation_delay: SINGLE_PLANET_ACTIVATION_DELAY,
            spring: SpringParams {
                stiffness: SINGLE_PLANET_STIFFNESS,
                damping: SINGLE_PLANET_DAMPING,
                mass: SINGLE_PLANET_MASS,
            },
            moons: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_planet_size(mut self, size: f32) -> Self {
        self.planet_size = size;
        self
    }

    pub fn with_planet_color(mut self, color: &str) -> Self {
        self.planet_color = color.to_string();
        self
    }

    pub fn with_rings(mut self, show: bool) -> Self {
        self.show_rings = show;
        self
    }

    pub fn with_trail(mut self, enabled: bool) -> Self {
        self.trail_effect = enabled;
        self
    }

    pub fn with_moons(mut self, moons: Vec<SatelliteConfig>) -> Self {
        self.moons = moons;
        self
    }

    pub fn with_spring(mut self, spring: SpringParams) -> Self {
        self.spring = spring;
        self
    }

    pub fn trail_limit(&self) -> usize {
        if self.trail_effect {
            TRAIL_LIMIT
        } else {
            0
        }
    }

    pub fn disk_radius(&self) -> f32 {
        self.planet_size * DISK_RADIUS_FACTOR
    }

    pub fn inner_cutoff(&self) -> f32 {
        self.planet_size / INNER_CUTOFF_DIVISOR
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.planet_size) {
            return Err(ConfigError::PlanetSize(self.planet_size));
        }
        for (field, value) in [
            ("stiffness", self.spring.stiffness),
            ("damping", self.spring.damping),
            ("mass", self.spring.mass),
        ] {
            if !positive(value) {
                return Err(ConfigError::Spring { field, value });
            }
        }
        if self.moons.len() > MAX_SATELLITES {
            return Err(ConfigError::TooManySatellites(self.moons.len()));
        }
        for (index, moon) in self.moons.iter().enumerate() {
            for (field, value) in [
                ("size", moon.size),
                ("distance", moon.distance),
                ("orbit duration", moon.orbit_duration.as_secs_f32()),
            ] {
                if !positive(value) {
                    return Err(ConfigError::Satellite {
                        index,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Seconds that are non-finite, negative or too large for a `Duration`
/// collapse to zero so validation can reject them.
fn secs(v: f32) -> Duration {
    Duration::try_from_secs_f32(v).unwrap_or(Duration::ZERO)
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
