use crate::constants::{TRAIL_FADE, TRAIL_LIMIT, TRAIL_MIN_SCALE, TRAIL_START_OPACITY};
use crate::easing::{ease_out_cubic, progress};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub id: u64,
    pub born: Duration,
}

/// Bounded history of accepted pointer samples, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: SmallVec<[TrailPoint; TRAIL_LIMIT]>,
    limit: usize,
    next_id: u64,
}

impl Trail {
    /// A limit of zero disables the trail entirely.
    pub fn new(limit: usize) -> Self {
        Self {
            points: SmallVec::new(),
            limit,
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn push(&mut self, pos: Vec2, now: Duration) {
        if self.limit == 0 {
            return;
        }
        while self.points.len() >= self.limit {
            self.points.remove(0);
        }
        self.points.push(TrailPoint {
            x: pos.x,
            y: pos.y,
            id: self.next_id,
            born: now,
        });
        self.next_id += 1;
    }

    /// Drop points whose fade-out has finished.
    pub fn prune(&mut self, now: Duration) {
        self.points
            .retain(|p| now.saturating_sub(p.born) < TRAIL_FADE);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Diameter and opacity of the dot at `index` for a marker of `planet_size`.
    pub fn dot_style(&self, index: usize, planet_size: f32, now: Duration) -> Option<(f32, f32)> {
        let p = self.points.get(index)?;
        let len = self.points.len() as f32;
        let diameter = planet_size * (TRAIL_MIN_SCALE + index as f32 / len * (1.0 - TRAIL_MIN_SCALE));
        let fade = ease_out_cubic(progress(now.saturating_sub(p.born), TRAIL_FADE));
        let opacity = (TRAIL_START_OPACITY * (1.0 - fade)).max(0.0);
        Some((diameter, opacity))
    }
}
