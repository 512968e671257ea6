// Scene and interaction tuning constants shared across the front end.

// Camera
pub const CAMERA_HOME_Z: f32 = 900.0; // resting depth before any scroll
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 4000.0;

// Virtual scroll
pub const SCROLL_RANGE_PX: f32 = 3000.0; // height of the scroll track element
pub const SCROLL_OVERSHOOT_PX: f32 = 500.0; // extra travel so the footer clears the camera
pub const SCROLL_LERP_FACTOR: f32 = 0.08; // per-frame smoothing toward the target depth

// Particle field
pub const PARTICLE_COUNT: usize = 15_000;
pub const PARTICLE_SPREAD: f32 = 2000.0; // cube side length the field fills
pub const PARTICLE_BASE_SIZE: f32 = 2.0;
pub const PARTICLE_SPIN_RATE: f32 = 0.02; // radians per second about Y, applied negatively

// Theme palette (cyan #00f0ff, violet #915eff)
pub const THEME_CYAN: [f32; 3] = [0.0, 0.941, 1.0];
pub const THEME_VIOLET: [f32; 3] = [0.569, 0.369, 1.0];

// Section fade
pub const SECTION_FADE_THRESHOLD: f32 = 1100.0; // camera distance at which a section is fully gone

// Card carousel
pub const CARD_TRANSITION_SEC: f32 = 0.6;
pub const CARD_TRANSITION_REDUCED_SEC: f32 = 0.05; // prefers-reduced-motion
pub const CARD_FLIP_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
pub const CARD_FLIP_DEPTH: f32 = 300.0; // depth displacement of the mirrored pose
pub const WHEEL_MIN_DELTA: f64 = 2.0; // ignore sub-threshold trackpad jitter
