// Shared tuning constants for the landing-page interactions.
// Kept free of web-sys so host tests can include this file directly.

// Viewport
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0; // cap backing raster at 2x to keep fill cost sane on 3x phones

// Ambient particles
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.2;
pub const PARTICLE_SPEED_SPAN: f32 = 0.2; // velocity components drawn from [-span/2, span/2)
pub const PARTICLE_HUE_MIN: f32 = 200.0;
pub const PARTICLE_HUE_SPAN: f32 = 120.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.15;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.25;
pub const PARTICLE_SATURATION: f32 = 80.0;
pub const PARTICLE_LIGHTNESS: f32 = 60.0;
pub const WRAP_MARGIN: f32 = 10.0; // off-screen slack before a particle wraps around

// Cursor trail
pub const TRAIL_MAX: usize = 70;
pub const TRAIL_BURST: usize = 4; // points spawned per pointer-move
pub const TRAIL_JITTER: f32 = 6.0; // full width of the jitter box around the pointer
pub const TRAIL_RADIUS_MIN: f32 = 2.0;
pub const TRAIL_RADIUS_SPAN: f32 = 3.0;
pub const TRAIL_HUE_MIN: f32 = 180.0;
pub const TRAIL_HUE_SPAN: f32 = 160.0;
pub const TRAIL_LIFE_STEP: f32 = 0.02;
pub const TRAIL_RADIUS_DECAY: f32 = 0.985;
pub const TRAIL_LIFE_MIN: f32 = 0.02;
pub const TRAIL_ALPHA_SCALE: f32 = 0.7;
pub const TRAIL_SATURATION: f32 = 90.0;
pub const TRAIL_LIGHTNESS: f32 = 60.0;

// XP / progress
pub const XP_STORAGE_KEY: &str = "melex_xp";
pub const XP_ANIMATION_MS: f64 = 800.0;
pub const XP_DEFAULT_HOVER: i64 = 1;
pub const XP_SECTION_VISIBILITY: f64 = 0.5;
pub const XP_SOUND_ON: i64 = 3;

// Sections credited once per page load when half visible
pub const SECTION_AWARDS: [(&str, i64); 6] = [
    ("hero", 5),
    ("services", 10),
    ("ecosystem", 8),
    ("about", 6),
    ("register", 12),
    ("contact", 6),
];

// Buttons that award a fixed amount on every click
pub const CLICK_AWARDS: [(&str, i64); 3] = [
    ("register-hero", 15),
    ("register-nav", 15),
    ("register-submit", 30),
];

// Ambient sound
pub const SOUND_STORAGE_KEY: &str = "melex_sound";
pub const AMBIENT_TRIAD_HZ: [f32; 3] = [110.0, 146.83, 196.0];
pub const AMBIENT_SILENT_GAIN: f32 = 0.0001; // exponential ramps cannot target zero
pub const AMBIENT_MASTER_GAIN: f32 = 0.15;
pub const AMBIENT_FADE_IN_SEC: f64 = 2.0;
pub const AMBIENT_FADE_OUT_SEC: f64 = 0.6;
pub const AMBIENT_TEARDOWN_MS: i32 = 700;
pub const AMBIENT_LOWPASS_HZ: f32 = 800.0;
pub const AMBIENT_LOWPASS_Q: f32 = 0.7;

// Card tilt
pub const TILT_MAX_DEG: f64 = 10.0; // full rotate range across the card
pub const TILT_LIFT_PX: f64 = 3.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.08;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const REVEAL_CLASS: &str = "visible";
