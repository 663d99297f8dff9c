// Particle field tuning constants shared by the simulation and the web frontend.

// Field population
pub const PARTICLE_COUNT: usize = 80;

// Per-particle random ranges, [min, max)
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 4.0;
pub const SPEED_MIN: f32 = 0.1; // surface units per frame at intensity 1
pub const SPEED_MAX: f32 = 0.4;
pub const OPACITY_MIN: f32 = 0.3;
pub const OPACITY_MAX: f32 = 0.8;

// Pointer repulsion
pub const REPEL_RADIUS: f32 = 150.0; // no push at or beyond this distance
pub const REPEL_STRENGTH: f32 = 2.0; // max push per frame, reached at distance 0

// A particle wraps once it is more than this far above the top edge,
// and re-enters the same distance below the bottom edge.
pub const WRAP_MARGIN: f32 = 10.0;

// Glow styling
pub const GLOW_BLUR_BASE: f32 = 10.0; // shadow blur at intensity 1
pub const PARTICLE_RGB: [u8; 3] = [34, 211, 238];
pub const GLOW_COLOR: &str = "#22D3EE";

// Background intensity per page mode
pub const IDLE_INTENSITY: f32 = 1.0;
pub const SCANNING_INTENSITY: f32 = 1.5;

// How long the scanning mode runs before results are shown
pub const SCAN_DELAY_MS: u32 = 5_000;
