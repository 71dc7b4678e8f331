// Shared tuning constants for the point-cloud backdrop. All "physics" here
// is stylized noise for visual effect; none of these carry physical units.

// Generation
pub const PARTICLE_COUNT: usize = 850; // default field density
pub const CUBE_SIZE: f32 = 1000.0; // side of the spawn cube (internal units)
pub const CORE_PROBABILITY: f32 = 0.25; // chance a point belongs to the core ball
pub const CORE_RADIUS_MIN: f32 = 0.05; // core ball radius bounds, fractions of CUBE_SIZE
pub const CORE_RADIUS_MAX: f32 = 0.30;

// Layout
pub const MOBILE_BREAKPOINT: f32 = 768.0; // below this the object centers
pub const FOCAL_X_FRACTION: f32 = 0.75; // desktop: object sits right, behind page content
pub const SCALE_FRACTION_MOBILE: f32 = 0.20;
pub const SCALE_FRACTION_DESKTOP: f32 = 0.22;

// Interaction
pub const HOVER_TRIGGER_FACTOR: f32 = 2.5; // trigger radius in base-scale units
pub const SMOOTHING: f32 = 0.05; // first-order filter gain per frame
pub const BASE_SPIN: f32 = 0.0015; // idle yaw per frame (radians)
pub const HOVER_SPIN_BOOST: f32 = 0.011; // extra yaw per frame at full hover
pub const TIME_STEP: f32 = 0.038; // wave clock advance per frame

// Projection
pub const PERSPECTIVE: f32 = 1200.0; // focal distance for the perspective divide
pub const ALPHA_NEAR: f32 = 0.9; // depth-to-alpha map endpoints
pub const ALPHA_FAR: f32 = 0.4;

// Perturbation
pub const ENERGIZED_THRESHOLD: f32 = 0.01; // below this the physics pass is skipped
pub const WAVE_AMPLITUDE: f32 = 45.0; // per-wave displacement contribution
pub const WAVE_FREQUENCY: f32 = 0.01; // spatial frequency over origin axes
pub const WAVE_SPEED: f32 = 2.0; // angular speed of the traveling waves
pub const WAVE_Z_PHASE: f32 = 1.5; // z axis runs phase-shifted
pub const TWITCH_AMPLITUDE: f32 = 8.0;
pub const MAGNET_RANGE: f32 = 300.0; // px around the pointer
pub const MAGNET_DISPLACEMENT: f32 = 120.0; // swell added at full magnet strength
pub const MAGNET_PULL: f32 = 0.1; // fraction of the remaining gap per frame
pub const GLITCH_PROBABILITY: f32 = 0.2; // rolled only inside magnet range
pub const GLITCH_AMPLITUDE: f32 = 80.0; // px, scaled by magnet strength
pub const CORE_JITTER: f32 = 60.0; // per-axis jitter amplitude at full hover

// Color
pub const CORE_HOT_TIER: f32 = 0.45; // tier cuts, fractions of the max core radius
pub const CORE_MID_TIER: f32 = 0.75;
pub const SHELL_ENERGY_FREQUENCY: f32 = 0.004; // spatial frequency of the energy wave
pub const SHELL_ENERGY_SPEED: f32 = 2.0;
pub const SPARK_PROBABILITY: f32 = 0.015; // rare one-frame shell brightening

// Net
pub const CONNECTION_DISTANCE: f32 = 65.0; // px between projected points
pub const NET_ALPHA: f32 = 0.15; // relative to the dimmer endpoint

// Draw
pub const SIZE_BASE: f32 = 1.0;
pub const SIZE_HOVER_BOOST: f32 = 0.8;
pub const SIZE_MIN: f32 = 0.1;
pub const GLOW_THRESHOLD: f32 = 0.5; // hover factor below which glow stays off
pub const GLOW_BLUR: f32 = 18.0; // px shadow blur per glow tier at full hover
