//! Accretion particle field for the gravitational variant.
//!
//! Particles live in polar coordinates around the central marker. Each tick
//! they revolve faster the closer they are, drift inward, and once inside
//! the inner cutoff they spiral down and fade until they are removed. New
//! particles are injected at the disk edge while the field is below its cap.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct AccretionParticle {
    pub id: u64,
    pub size: f32,
    /// Radial offset from the marker centre in px.
    pub distance: f32,
    /// Radians.
    pub angle: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: &'static str,
}

impl AccretionParticle {
    /// Screen-space offset from the marker centre.
    pub fn offset(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s) * self.distance
    }

    /// Revolve, drift inward and, inside the cutoff, spiral down and fade.
    pub fn step(&mut self, g: &FieldGeometry) {
        let proximity = 1.0 + g.outer_radius / self.distance.max(1.0) * PROXIMITY_GAIN;
        self.angle = (self.angle + self.speed * proximity * ANGULAR_BASE_RATE) % TAU;

        if self.distance < g.inner_cutoff {
            self.distance *= INNER_DECAY;
            self.opacity -= OPACITY_DECREMENT;
        } else {
            self.distance *= OUTER_DRIFT;
        }
        self.distance = self.distance.max(0.0);
        self.opacity = self.opacity.clamp(0.0, 1.0);
    }
}

/// Geometry the field is simulated against, derived from the marker size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGeometry {
    pub marker_size: f32,
    pub outer_radius: f32,
    pub inner_cutoff: f32,
    pub cap: usize,
}

impl FieldGeometry {
    pub fn for_marker(marker_size: f32) -> Self {
        Self {
            marker_size,
            outer_radius: marker_size * DISK_RADIUS_FACTOR,
            inner_cutoff: marker_size / INNER_CUTOFF_DIVISOR,
            cap: PARTICLE_CAP,
        }
    }

    /// Radius of the marker's own edge; seeds start no closer than this.
    pub fn inner_radius(&self) -> f32 {
        self.marker_size / 2.0
    }
}

pub struct ParticleField {
    pub geometry: FieldGeometry,
    particles: Vec<AccretionParticle>,
    rng: StdRng,
    next_id: u64,
}

impl ParticleField {
    pub fn new(geometry: FieldGeometry, seed: u64) -> Self {
        Self {
            geometry,
            particles: Vec::with_capacity(geometry.cap),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    pub fn particles(&self) -> &[AccretionParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Replace the population with a fresh batch spread across the disk.
    pub fn seed(&mut self, count: usize) {
        self.particles.clear();
        let g = self.geometry;
        for _ in 0..count.min(g.cap) {
            let lo = g.inner_radius().min(g.outer_radius);
            let distance = self.rng.gen_range(lo..=g.outer_radius);
            let p = self.spawn(distance);
            self.particles.push(p);
        }
    }

    fn spawn(&mut self, distance: f32) -> AccretionParticle {
        let id = self.next_id;
        self.next_id += 1;
        let rng = &mut self.rng;
        AccretionParticle {
            id,
            size: rng.gen_range(PARTICLE_SIZE_RANGE.0..=PARTICLE_SIZE_RANGE.1),
            distance: distance.max(0.0),
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(PARTICLE_SPEED_RANGE.0..=PARTICLE_SPEED_RANGE.1),
            opacity: rng.gen_range(PARTICLE_OPACITY_RANGE.0..=PARTICLE_OPACITY_RANGE.1),
            color: ACCRETION_PALETTE.choose(rng).copied().unwrap_or(ACCRETION_PALETTE[0]),
        }
    }

    /// One fixed-period simulation step.
    pub fn tick(&mut self) {
        let g = self.geometry;
        for p in &mut self.particles {
            p.step(&g);
        }
        self.particles.retain(|p| p.opacity > 0.0);

        if self.particles.len() < g.cap && self.rng.gen_bool(PARTICLE_SPAWN_CHANCE) {
            let p = self.spawn(g.outer_radius);
            self.particles.push(p);
        }
    }
}
