//! Overlay state container and its lifecycle against a [`Host`].
//!
//! [`OverlayState`] holds every piece of simulation state and exposes the
//! transitions (pointer sample, deferred flush, spring tick, particle tick,
//! theme change) as plain methods taking the current time. [`Overlay`] wraps
//! it with the registrations it owns on the host and guarantees that
//! `unmount` leaves none of them behind.

use crate::config::OverlayConfig;
use crate::constants::*;
use crate::host::{Handle, Host, Wake};
use crate::orbits;
use crate::particles::{FieldGeometry, ParticleField};
use crate::sampler::{PointerSampler, SampleOutcome};
use crate::scene::{Element, Scene};
use crate::spring::SpringFollower;
use crate::starfield::Starfield;
use crate::theme::{Theme, VisualMode};
use crate::trail::Trail;
use crate::transition::{ModeSwitch, Swap};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

pub struct OverlayState {
    pub config: OverlayConfig,
    pub sampler: PointerSampler,
    pub follower: SpringFollower,
    pub trail: Trail,
    pub field: ParticleField,
    pub stars: Starfield,
    pub modes: ModeSwitch,
    pub viewport: Vec2,
    theme: Theme,
    /// First accepted sample; drives the one-time scale-in and moon fade-in.
    revealed_since: Duration,
    /// Last variant swap; phase origin for the looping animations.
    variant_since: Duration,
    last_frame: Option<Duration>,
    rng: StdRng,
}

impl OverlayState {
    pub fn new(config: OverlayConfig, theme: Theme, viewport: Vec2, seed: u64) -> Self {
        let follower = SpringFollower::new(config.spring, SPRING_ORIGIN, config.follow_delay);
        let trail = Trail::new(config.trail_limit());
        let field = ParticleField::new(FieldGeometry::for_marker(config.planet_size), seed);
        Self {
            sampler: PointerSampler::new(),
            follower,
            trail,
            field,
            stars: Starfield::default(),
            modes: ModeSwitch::new(VisualMode::for_theme(theme)),
            viewport,
            theme,
            revealed_since: Duration::ZERO,
            variant_since: Duration::ZERO,
            last_frame: None,
            rng: StdRng::seed_from_u64(seed.rotate_left(17) ^ 0x5DEE_CE66_D1CE_4E5B),
            config,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_visible(&self) -> bool {
        self.sampler.visible
    }

    /// Feed a raw pointer move. Accepted samples retarget the spring and
    /// extend the trail.
    pub fn pointer_move(&mut self, pos: Vec2, now: Duration) -> SampleOutcome {
        let was_visible = self.sampler.visible;
        let outcome = self.sampler.on_pointer_move(pos, now);
        if let SampleOutcome::Accepted(p) = outcome {
            self.apply_sample(p, now, was_visible);
        }
        outcome
    }

    /// Flush the coalesced sample on its animation frame.
    pub fn flush_deferred(&mut self, now: Duration) -> Option<Vec2> {
        let was_visible = self.sampler.visible;
        let p = self.sampler.on_frame(now)?;
        self.apply_sample(p, now, was_visible);
        Some(p)
    }

    fn apply_sample(&mut self, pos: Vec2, now: Duration, was_visible: bool) {
        self.follower.set_target(pos, now);
        self.trail.push(pos, now);
        if !was_visible {
            self.revealed_since = now;
            self.variant_since = now;
        }
    }

    /// Render-clock step: integrate the spring and expire trail dots.
    pub fn spring_tick(&mut self, now: Duration) -> Vec2 {
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);
        self.trail.prune(now);
        self.follower.tick(now, dt)
    }

    pub fn particle_tick(&mut self) {
        self.field.tick();
    }

    /// Returns true when the requested variant differs from the current target.
    pub fn set_theme(&mut self, theme: Theme, now: Duration) -> bool {
        self.theme = theme;
        self.modes.request(VisualMode::for_theme(theme), now)
    }

    /// Advance the mode switch; restarts the looping phases on a swap.
    pub fn advance_modes(&mut self, now: Duration) -> Option<Swap> {
        let swap = self.modes.advance(now)?;
        self.variant_since = now;
        log::info!("[overlay] variant {} -> {}", swap.from.name(), swap.to.name());
        Some(swap)
    }

    /// Fresh particle batch and starfield for a newly shown gravitational variant.
    pub fn regenerate_field(&mut self) {
        self.field.seed(PARTICLE_SEED_COUNT);
        self.stars = Starfield::generate(&mut self.rng, self.viewport, STAR_COUNT);
    }

    pub fn clear_field(&mut self) {
        self.field.clear();
        self.stars = Starfield::default();
    }

    pub fn scene(&self, now: Duration) -> Scene<'_> {
        if !self.sampler.visible {
            return Scene::default();
        }
        let cfg = &self.config;
        let center = self.follower.position;
        let s = self.modes.scale(now);
        let elapsed = now.saturating_sub(self.variant_since);
        let revealed = now.saturating_sub(self.revealed_since);
        let marker_radius = cfg.planet_size / 2.0 * orbits::marker_scale_in(revealed) * s;
        let (glow_scale, glow_opacity) = orbits::glow(elapsed);
        let mut elements = Vec::new();

        for (i, p) in self.trail.points().iter().enumerate() {
            if let Some((diameter, opacity)) = self.trail.dot_style(i, cfg.planet_size, now) {
                elements.push(Element::TrailDot {
                    center: Vec2::new(p.x, p.y),
                    diameter,
                    opacity,
                    color: &cfg.planet_color,
                });
            }
        }

        let mode = self.modes.shown();
        match mode {
            VisualMode::OrbitingMoons => {
                elements.push(Element::Glow {
                    center,
                    radius: (marker_radius + GLOW_INSET * s) * glow_scale,
                    opacity: glow_opacity * s,
                    color: &cfg.planet_color,
                });
                if cfg.show_rings {
                    elements.push(Element::Ring {
                        center,
                        radii: orbits::ring_radii(cfg.planet_size) * s,
                        rotation: orbits::ring_rotation(elapsed),
                        opacity: orbits::ring_opacity(elapsed) * s,
                        color: RING_COLOR,
                    });
                }
                for (i, moon) in cfg.moons.iter().enumerate() {
                    elements.push(Element::Moon {
                        center: center + orbits::moon_offset(i, moon, revealed) * s,
                        radius: moon.size / 2.0 * s,
                        opacity: orbits::moon_opacity(moon, revealed) * s,
                        color: &moon.color,
                    });
                }
                elements.push(Element::Planet {
                    center,
                    radius: marker_radius,
                    rotation: orbits::marker_spin(elapsed),
                    color: &cfg.planet_color,
                });
            }
            VisualMode::Gravitational => {
                for star in &self.stars.stars {
                    elements.push(Element::Star {
                        position: star.position,
                        size: star.size,
                        opacity: star.opacity(elapsed) * s,
                    });
                }
                elements.push(Element::Glow {
                    center,
                    radius: (marker_radius + GLOW_INSET * s) * glow_scale,
                    opacity: glow_opacity * s,
                    color: BLACK_HOLE_RIM_COLOR,
                });
                for p in self.field.particles() {
                    elements.push(Element::Particle {
                        center: center + p.offset() * s,
                        size: p.size * s,
                        opacity: p.opacity * s,
                        color: p.color,
                    });
                }
                elements.push(Element::BlackHole {
                    center,
                    radius: marker_radius,
                    rim_color: BLACK_HOLE_RIM_COLOR,
                });
            }
        }

        Scene {
            elements,
            mode: Some(mode),
            variant_scale: s,
        }
    }
}

/// Host registrations the overlay currently owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subscriptions {
    pub activation: Option<Handle>,
    pub pointer: Option<Handle>,
    pub deferred: Option<Handle>,
    pub frame: Option<Handle>,
    pub particles: Option<Handle>,
    pub transition: Option<Handle>,
}

impl Subscriptions {
    pub fn live(&self) -> usize {
        [
            self.activation,
            self.pointer,
            self.deferred,
            self.frame,
            self.particles,
            self.transition,
        ]
        .iter()
        .flatten()
        .count()
    }

    fn cancel_all<H: Host + ?Sized>(&mut self, host: &mut H) {
        for slot in [
            &mut self.activation,
            &mut self.pointer,
            &mut self.deferred,
            &mut self.frame,
            &mut self.particles,
            &mut self.transition,
        ] {
            if let Some(h) = slot.take() {
                host.cancel(h);
            }
        }
    }
}

pub struct Overlay {
    pub state: OverlayState,
    subs: Subscriptions,
    mounted: bool,
}

impl Overlay {
    pub fn new(config: OverlayConfig, theme: Theme, viewport: Vec2, seed: u64) -> Self {
        Self {
            state: OverlayState::new(config, theme, viewport, seed),
            subs: Subscriptions::default(),
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subs
    }

    /// Start the activation delay. Pointer moves are ignored until it fires.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let delay = self.state.config.activation_delay;
        self.subs.activation = host.set_timeout(Wake::Activate, delay);
        if self.subs.activation.is_none() {
            log::warn!("[overlay] activation timer refused, listening now");
            self.activate(host);
            return;
        }
        log::info!("[overlay] mounted, activating in {:?}", delay);
    }

    fn activate<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.subs.pointer.is_none() {
            self.subs.pointer = host.subscribe_pointer();
        }
        if self.subs.pointer.is_none() {
            log::error!("[overlay] pointer subscription refused");
        }
        self.state.sampler.activate();
        log::debug!("[overlay] listening for pointer moves");
    }

    fn request_deferred<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.subs.deferred.is_none() {
            self.subs.deferred = host.request_frame(Wake::DeferredSample);
        }
    }

    /// Cancel every registration. Safe to call any number of times.
    pub fn unmount<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.subs.cancel_all(host);
        self.state.sampler.deactivate();
        self.state.clear_field();
        if self.mounted {
            log::info!("[overlay] unmounted");
        }
        self.mounted = false;
    }

    pub fn on_pointer_move<H: Host + ?Sized>(&mut self, host: &mut H, pos: Vec2, now: Duration) {
        if !self.mounted {
            return;
        }
        match self.state.pointer_move(pos, now) {
            SampleOutcome::Deferred | SampleOutcome::Coalesced => self.request_deferred(host),
            SampleOutcome::Accepted(_) => self.sync(host, now),
            SampleOutcome::Ignored => {}
        }
    }

    /// Dispatch a fired registration. Wakes arriving after unmount are dropped.
    pub fn on_wake<H: Host + ?Sized>(&mut self, host: &mut H, wake: Wake, now: Duration) {
        if !self.mounted {
            return;
        }
        match wake {
            Wake::Activate => {
                self.subs.activation = None;
                self.activate(host);
            }
            Wake::DeferredSample => {
                self.subs.deferred = None;
                self.state.flush_deferred(now);
            }
            Wake::RenderFrame => {
                self.subs.frame = None;
                self.state.spring_tick(now);
            }
            Wake::ParticleTick => {
                if self.subs.particles.is_some() {
                    self.state.particle_tick();
                }
            }
            Wake::TransitionStep => {
                self.subs.transition = None;
            }
        }
        self.sync(host, now);
    }

    pub fn set_theme<H: Host + ?Sized>(&mut self, host: &mut H, theme: Theme, now: Duration) {
        if self.state.set_theme(theme, now) {
            log::debug!(
                "[overlay] theme {:?} requests {}",
                theme,
                self.state.modes.target().name()
            );
        }
        if self.mounted {
            self.sync(host, now);
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.state.viewport = viewport;
    }

    /// Bring registrations in line with the state: render loop while
    /// visible, particle interval only while the gravitational variant is
    /// shown, one transition timeout per pending stage boundary.
    fn sync<H: Host + ?Sized>(&mut self, host: &mut H, now: Duration) {
        self.state.advance_modes(now);

        if self.state.sampler.has_pending() {
            self.request_deferred(host);
        }

        let visible = self.state.is_visible();
        if visible && self.subs.frame.is_none() {
            self.subs.frame = host.request_frame(Wake::RenderFrame);
        }

        let want_particles =
            visible && self.state.modes.shown() == VisualMode::Gravitational;
        match (want_particles, self.subs.particles) {
            (true, None) => {
                if let Some(h) = host.set_interval(Wake::ParticleTick, PARTICLE_TICK) {
                    self.state.regenerate_field();
                    self.subs.particles = Some(h);
                    log::debug!("[overlay] particle ticker started");
                }
            }
            (false, Some(h)) => {
                host.cancel(h);
                self.subs.particles = None;
                self.state.clear_field();
                log::debug!("[overlay] particle ticker stopped");
            }
            _ => {}
        }

        match (self.state.modes.next_deadline(now), self.subs.transition) {
            (Some(delay), None) => {
                self.subs.transition = host.set_timeout(Wake::TransitionStep, delay);
            }
            (None, Some(h)) => {
                host.cancel(h);
                self.subs.transition = None;
            }
            _ => {}
        }
    }
}
