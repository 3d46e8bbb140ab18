// Lifecycle tests for the overlay driven through an in-memory host.

use glam::Vec2;
use planetary_core::{
    Element, Overlay, OverlayConfig, RecordingHost, Theme, VisualMode, Wake, ACTIVATION_DELAY,
    MODE_TRANSITION, PARTICLE_SEED_COUNT, PARTICLE_TICK, STAR_COUNT, TRAIL_LIMIT,
};
use std::time::Duration;

const STEP: Duration = Duration::from_millis(10);

struct Rig {
    host: RecordingHost,
    overlay: Overlay,
    now: Duration,
}

impl Rig {
    fn new(config: OverlayConfig, theme: Theme) -> Self {
        let mut host = RecordingHost::new();
        let mut overlay = Overlay::new(config, theme, Vec2::new(1280.0, 800.0), 7);
        overlay.mount(&mut host);
        Self {
            host,
            overlay,
            now: Duration::ZERO,
        }
    }

    fn fire_all(&mut self, wake: Wake) {
        for h in self.host.pending(wake) {
            if let Some(w) = self.host.fire(h) {
                self.overlay.on_wake(&mut self.host, w, self.now);
            }
        }
    }

    fn activate(&mut self) {
        self.now += ACTIVATION_DELAY;
        self.fire_all(Wake::Activate);
    }

    fn pointer(&mut self, pos: Vec2) {
        self.overlay.on_pointer_move(&mut self.host, pos, self.now);
    }

    /// Advance the clock one step and deliver every one-shot that is due.
    fn step(&mut self) {
        self.now += STEP;
        self.fire_all(Wake::DeferredSample);
        self.fire_all(Wake::TransitionStep);
        self.fire_all(Wake::RenderFrame);
        if (self.now.as_millis() % PARTICLE_TICK.as_millis()) == 0 {
            self.fire_all(Wake::ParticleTick);
        }
    }

    fn shown_variants(&self) -> (usize, usize) {
        let scene = self.overlay.state.scene(self.now);
        (
            scene.count_variant(VisualMode::OrbitingMoons),
            scene.count_variant(VisualMode::Gravitational),
        )
    }
}

#[test]
fn mount_then_immediate_unmount_leaves_nothing_registered() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    assert_eq!(rig.host.active_count(), 1);
    rig.overlay.unmount(&mut rig.host);
    assert_eq!(rig.host.active_count(), 0);
    assert_eq!(rig.overlay.subscriptions().live(), 0);

    // second unmount is harmless
    rig.overlay.unmount(&mut rig.host);
    assert_eq!(rig.host.active_count(), 0);
    assert!(!rig.overlay.is_mounted());
}

#[test]
fn pointer_moves_before_activation_are_ignored() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.pointer(Vec2::new(100.0, 100.0));
    assert!(!rig.overlay.state.is_visible());
    assert!(rig.host.pending(Wake::RenderFrame).is_empty());
    assert!(rig.host.pending(Wake::DeferredSample).is_empty());
    assert!(rig.overlay.state.scene(rig.now).is_empty());
}

#[test]
fn activation_subscribes_to_pointer_moves() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    assert!(!rig.host.has_pointer_subscription());
    rig.activate();
    assert!(rig.host.has_pointer_subscription());
    assert!(rig.host.pending(Wake::Activate).is_empty());
    assert!(!rig.overlay.state.is_visible(), "hidden until the first sample");
}

#[test]
fn first_sample_reveals_and_starts_rendering() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(400.0, 300.0));
    assert!(rig.overlay.state.is_visible());
    assert_eq!(rig.host.pending(Wake::RenderFrame).len(), 1);
    assert!(rig.host.pending(Wake::ParticleTick).is_empty());
    let (moons, grav) = rig.shown_variants();
    assert!(moons > 0);
    assert_eq!(grav, 0);
}

#[test]
fn bursts_request_a_single_deferred_frame() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    for i in 0..500 {
        rig.pointer(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(rig.host.pending(Wake::DeferredSample).len(), 1);
    assert_eq!(rig.overlay.state.sampler.accepted_count(), 1);

    rig.step();
    assert_eq!(rig.overlay.state.sampler.accepted_count(), 2);
    assert_eq!(rig.overlay.state.follower.target(), Vec2::new(499.0, 0.0));
    assert!(rig.host.pending(Wake::DeferredSample).is_empty());
}

#[test]
fn follower_chases_the_pointer_on_the_render_clock() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    let target = Vec2::new(500.0, 300.0);
    rig.pointer(target);
    for _ in 0..200 {
        rig.step();
    }
    assert!((rig.overlay.state.follower.position - target).length() < 1.0);
}

#[test]
fn full_lifecycle_teardown_leaves_nothing_registered() {
    let mut rig = Rig::new(OverlayConfig::default().with_trail(true), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(10.0, 10.0));
    rig.pointer(Vec2::new(20.0, 20.0));
    rig.overlay.set_theme(&mut rig.host, Theme::Dark, rig.now);
    for _ in 0..40 {
        rig.step();
        rig.pointer(Vec2::new(rig.now.as_millis() as f32, 50.0));
    }
    rig.overlay.set_theme(&mut rig.host, Theme::Light, rig.now);
    rig.step();
    assert!(rig.host.active_count() > 0);

    rig.overlay.unmount(&mut rig.host);
    assert_eq!(rig.host.active_count(), 0, "{:?}", rig.host.active().collect::<Vec<_>>());
    assert_eq!(rig.overlay.subscriptions().live(), 0);
    assert!(rig.overlay.state.field.is_empty());
}

#[test]
fn wakes_after_unmount_are_ignored() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Dark);
    rig.activate();
    rig.pointer(Vec2::new(10.0, 10.0));
    rig.overlay.unmount(&mut rig.host);
    let registered = rig.host.registered;

    for wake in [
        Wake::Activate,
        Wake::DeferredSample,
        Wake::RenderFrame,
        Wake::ParticleTick,
        Wake::TransitionStep,
    ] {
        rig.overlay.on_wake(&mut rig.host, wake, rig.now);
    }
    rig.pointer(Vec2::new(50.0, 50.0));
    assert_eq!(rig.host.registered, registered);
    assert_eq!(rig.host.active_count(), 0);
}

#[test]
fn dark_theme_seeds_the_field_on_first_sample() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Dark);
    rig.activate();
    assert!(rig.host.pending(Wake::ParticleTick).is_empty());
    assert!(rig.overlay.state.field.is_empty());

    rig.pointer(Vec2::new(300.0, 300.0));
    assert_eq!(rig.overlay.state.field.len(), PARTICLE_SEED_COUNT);
    assert_eq!(rig.overlay.state.stars.len(), STAR_COUNT);
    assert_eq!(rig.host.pending(Wake::ParticleTick).len(), 1);
    let (moons, grav) = rig.shown_variants();
    assert_eq!(moons, 0);
    assert!(grav > 0);
}

#[test]
fn theme_toggles_show_exactly_one_variant_throughout() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(400.0, 300.0));

    let steps = (MODE_TRANSITION.as_millis() / STEP.as_millis()) as usize;
    let mut theme = Theme::Light;
    for _ in 0..4 {
        theme = theme.toggled();
        rig.overlay.set_theme(&mut rig.host, theme, rig.now);
        for _ in 0..steps {
            rig.step();
            let (moons, grav) = rig.shown_variants();
            assert!(
                (moons == 0) != (grav == 0),
                "at {:?}: moons {moons} gravitational {grav}",
                rig.now
            );
        }

        let expected = VisualMode::for_theme(theme);
        let state = &rig.overlay.state;
        assert_eq!(state.modes.shown(), expected);
        assert!(!state.modes.in_transition());
        assert_eq!(state.scene(rig.now).variant_scale, 1.0);

        let ticking = rig.host.pending(Wake::ParticleTick).len();
        match expected {
            VisualMode::Gravitational => {
                assert_eq!(ticking, 1);
                assert_eq!(state.stars.len(), STAR_COUNT);
                assert!(state.scene(rig.now).particle_count() > 0);
            }
            VisualMode::OrbitingMoons => {
                assert_eq!(ticking, 0, "particle interval must stop with the variant");
                assert!(state.field.is_empty());
                assert!(state.stars.is_empty());
            }
        }
        assert!(rig.host.pending(Wake::TransitionStep).is_empty());
    }
}

#[test]
fn rapid_toggling_never_leaks_transition_timeouts() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(400.0, 300.0));
    let mut theme = Theme::Light;
    for _ in 0..25 {
        theme = theme.toggled();
        rig.overlay.set_theme(&mut rig.host, theme, rig.now);
        rig.step();
        assert!(rig.host.pending(Wake::TransitionStep).len() <= 1);
        assert!(rig.host.pending(Wake::ParticleTick).len() <= 1);
    }
    rig.overlay.unmount(&mut rig.host);
    assert_eq!(rig.host.active_count(), 0);
}

#[test]
fn trail_is_bounded_through_the_overlay() {
    let mut rig = Rig::new(OverlayConfig::default().with_trail(true), Theme::Light);
    rig.activate();
    for i in 0..50 {
        rig.now += Duration::from_millis(20);
        rig.pointer(Vec2::new(i as f32 * 5.0, 100.0));
        assert!(rig.overlay.state.trail.len() <= TRAIL_LIMIT);
    }
    assert_eq!(rig.overlay.state.trail.len(), TRAIL_LIMIT);
    let dots = rig
        .overlay
        .state
        .scene(rig.now)
        .elements
        .iter()
        .filter(|e| matches!(e, Element::TrailDot { .. }))
        .count();
    assert_eq!(dots, TRAIL_LIMIT);
}

#[test]
fn trail_disabled_by_default() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(1.0, 1.0));
    assert!(rig.overlay.state.trail.is_empty());
}

#[test]
fn remount_after_unmount_starts_over() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(5.0, 5.0));
    assert!(rig.overlay.state.is_visible());
    rig.overlay.unmount(&mut rig.host);
    assert!(!rig.overlay.state.is_visible());

    rig.overlay.mount(&mut rig.host);
    assert_eq!(rig.host.pending(Wake::Activate).len(), 1);
    assert!(!rig.host.has_pointer_subscription());
    rig.activate();
    assert!(rig.host.has_pointer_subscription());
}

#[test]
fn incoming_variant_is_fully_shown_once_the_switch_settles() {
    let config = OverlayConfig::default();
    let full_radius = config.planet_size / 2.0;
    let moons = config.moons.len();
    let mut rig = Rig::new(config, Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(400.0, 300.0));
    for _ in 0..500 {
        rig.step();
    }

    let steps = (MODE_TRANSITION.as_millis() / STEP.as_millis()) as usize;
    for theme in [Theme::Dark, Theme::Light] {
        rig.overlay.set_theme(&mut rig.host, theme, rig.now);
        for _ in 0..steps {
            rig.step();
        }
        assert!(!rig.overlay.state.modes.in_transition());

        let scene = rig.overlay.state.scene(rig.now);
        let mut markers = 0;
        let mut shown_moons = 0;
        for el in &scene.elements {
            match *el {
                Element::Planet { radius, .. } | Element::BlackHole { radius, .. } => {
                    assert!((radius - full_radius).abs() < 1e-3, "{theme:?}: radius {radius}");
                    markers += 1;
                }
                Element::Moon { opacity, .. } => {
                    assert!((opacity - 1.0).abs() < 1e-6, "{theme:?}: moon opacity {opacity}");
                    shown_moons += 1;
                }
                _ => {}
            }
        }
        assert_eq!(markers, 1);
        let expected_moons = if theme == Theme::Light { moons } else { 0 };
        assert_eq!(shown_moons, expected_moons);
    }
}

#[test]
fn refused_render_frame_is_requested_again() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.host.refuse = true;
    rig.pointer(Vec2::new(10.0, 10.0));
    assert!(rig.overlay.state.is_visible());
    assert!(rig.overlay.subscriptions().frame.is_none());

    rig.host.refuse = false;
    rig.now += Duration::from_millis(20);
    rig.pointer(Vec2::new(20.0, 20.0));
    assert_eq!(rig.host.pending(Wake::RenderFrame).len(), 1);
    assert!(rig.overlay.subscriptions().frame.is_some());
}

#[test]
fn refused_deferred_frame_does_not_stall_sampling() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Light);
    rig.activate();
    rig.pointer(Vec2::new(0.0, 0.0));

    rig.host.refuse = true;
    rig.pointer(Vec2::new(1.0, 1.0));
    assert!(rig.overlay.state.sampler.has_pending());
    assert!(rig.overlay.subscriptions().deferred.is_none());

    rig.host.refuse = false;
    rig.pointer(Vec2::new(2.0, 2.0));
    assert_eq!(rig.host.pending(Wake::DeferredSample).len(), 1);
    rig.step();
    assert_eq!(rig.overlay.state.follower.target(), Vec2::new(2.0, 2.0));
}

#[test]
fn refused_particle_interval_is_retried_without_losing_the_field() {
    let mut rig = Rig::new(OverlayConfig::default(), Theme::Dark);
    rig.activate();
    rig.host.refuse = true;
    rig.pointer(Vec2::new(300.0, 300.0));
    assert!(rig.overlay.subscriptions().particles.is_none());

    rig.host.refuse = false;
    rig.now += Duration::from_millis(20);
    rig.pointer(Vec2::new(310.0, 300.0));
    assert_eq!(rig.host.pending(Wake::ParticleTick).len(), 1);
    assert_eq!(rig.overlay.state.field.len(), PARTICLE_SEED_COUNT);
}

#[test]
fn refused_activation_timer_listens_immediately() {
    let mut host = RecordingHost::new();
    host.refuse = true;
    let mut overlay = Overlay::new(OverlayConfig::default(), Theme::Light, Vec2::new(800.0, 600.0), 1);
    overlay.mount(&mut host);
    assert!(overlay.state.sampler.is_listening());

    host.refuse = false;
    overlay.on_pointer_move(&mut host, Vec2::new(5.0, 5.0), Duration::ZERO);
    assert!(overlay.state.is_visible());
    overlay.unmount(&mut host);
    assert_eq!(host.active_count(), 0);
}
