use crate::constants::{STAR_SIZE_RANGE, STAR_TWINKLE_RANGE_SEC};
use crate::easing::pulse;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub period: Duration,
    pub phase: Duration,
}

impl Star {
    pub fn opacity(&self, elapsed: Duration) -> f32 {
        pulse(0.2, 1.0, self.period, elapsed + self.phase)
    }
}

/// Fixed twinkling points behind the gravitational variant. Regenerated on
/// every activation, never simulated.
#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2, count: usize) -> Self {
        let w = viewport.x.max(1.0);
        let h = viewport.y.max(1.0);
        let stars = (0..count)
            .map(|_| {
                let period = rng.gen_range(STAR_TWINKLE_RANGE_SEC.0..=STAR_TWINKLE_RANGE_SEC.1);
                Star {
                    position: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
                    size: rng.gen_range(STAR_SIZE_RANGE.0..=STAR_SIZE_RANGE.1),
                    period: Duration::from_secs_f32(period),
                    phase: Duration::from_secs_f32(rng.gen_range(0.0..period)),
                }
            })
            .collect();
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
