use glam::Vec2;
use std::time::Duration;

// Shared tuning constants for the overlay simulation.

// Pointer sampling
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(100); // wait before listening for pointer moves
pub const POINTER_FRAME_GATE: Duration = Duration::from_millis(16); // one frame at 60Hz
pub const SPRING_ORIGIN: Vec2 = Vec2::new(-100.0, -100.0); // off-screen start for the follower
pub const FOLLOW_QUEUE_MAX: usize = 64; // pending delayed targets kept at most

// Spring follower (planetary system)
pub const SPRING_STIFFNESS: f32 = 90.0;
pub const SPRING_DAMPING: f32 = 12.0;
pub const SPRING_MASS: f32 = 0.1;
pub const SPRING_REST_DISTANCE: f32 = 0.05; // px
pub const SPRING_REST_SPEED: f32 = 0.5; // px per second

// Single planet preset
pub const SINGLE_PLANET_SIZE: f32 = 40.0;
pub const SINGLE_PLANET_STIFFNESS: f32 = 300.0;
pub const SINGLE_PLANET_DAMPING: f32 = 20.0;
pub const SINGLE_PLANET_MASS: f32 = 0.5;
pub const SINGLE_PLANET_FOLLOW_DELAY: Duration = Duration::from_millis(100);
pub const SINGLE_PLANET_ACTIVATION_DELAY: Duration = Duration::from_millis(500);

// Central marker
pub const DEFAULT_PLANET_SIZE: f32 = 50.0;
pub const DEFAULT_PLANET_COLOR: &str = "#0ea5e9";
pub const PLANET_SCALE_IN: Duration = Duration::from_millis(800);
pub const PLANET_SPIN_PERIOD: Duration = Duration::from_secs(30);
pub const GLOW_PERIOD: Duration = Duration::from_secs(5);
pub const GLOW_SCALE: (f32, f32) = (1.0, 1.2);
pub const GLOW_OPACITY: (f32, f32) = (0.4, 0.7);
pub const GLOW_INSET: f32 = 8.0; // px the halo extends past the marker edge
pub const BLACK_HOLE_RIM_COLOR: &str = "#f97316";

// Rings
pub const RING_WIDTH_FACTOR: f32 = 2.2;
pub const RING_HEIGHT_FACTOR: f32 = 0.8;
pub const RING_SPIN_PERIOD: Duration = Duration::from_secs(60);
pub const RING_OPACITY_PERIOD: Duration = Duration::from_secs(8);
pub const RING_OPACITY: (f32, f32) = (0.3, 0.5);
pub const RING_COLOR: &str = "#7dd3fc";

// Satellites
pub const MOON_PHASE_STEP_DEG: f32 = 60.0;
pub const MOON_FADE_IN: Duration = Duration::from_secs(1);
pub const MAX_SATELLITES: usize = 16;

// Trail
pub const TRAIL_LIMIT: usize = 8;
pub const TRAIL_FADE: Duration = Duration::from_millis(500);
pub const TRAIL_START_OPACITY: f32 = 0.5;
pub const TRAIL_MIN_SCALE: f32 = 0.3;

// Accretion particle field
pub const PARTICLE_TICK: Duration = Duration::from_millis(50);
pub const PARTICLE_SEED_COUNT: usize = 20;
pub const PARTICLE_CAP: usize = 30;
pub const PARTICLE_SPAWN_CHANCE: f64 = 0.3;
pub const DISK_RADIUS_FACTOR: f32 = 2.5; // outer disk radius relative to marker size
pub const INNER_CUTOFF_DIVISOR: f32 = 1.5; // inner cutoff = marker size / 1.5
pub const INNER_DECAY: f32 = 0.9997; // distance factor per tick inside the cutoff
pub const OUTER_DRIFT: f32 = 0.995; // distance factor per tick outside the cutoff
pub const OPACITY_DECREMENT: f32 = 0.02; // per tick inside the cutoff
pub const PROXIMITY_GAIN: f32 = 0.5;
pub const ANGULAR_BASE_RATE: f32 = 0.05; // radians per tick at unit speed
pub const PARTICLE_SPEED_RANGE: (f32, f32) = (0.5, 1.5);
pub const PARTICLE_SIZE_RANGE: (f32, f32) = (1.0, 3.0);
pub const PARTICLE_OPACITY_RANGE: (f32, f32) = (0.5, 1.0);
pub const ACCRETION_PALETTE: [&str; 4] = ["#f97316", "#fbbf24", "#c084fc", "#f472b6"];

// Starfield
pub const STAR_COUNT: usize = 60;
pub const STAR_SIZE_RANGE: (f32, f32) = (0.5, 2.0);
pub const STAR_TWINKLE_RANGE_SEC: (f32, f32) = (2.0, 5.0);

// Mode switch
pub const MODE_TRANSITION: Duration = Duration::from_millis(300);
