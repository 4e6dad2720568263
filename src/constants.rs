// Layout units (scene units, nucleus at the origin)
pub const SHELL_BASE_RADIUS: f32 = 1.0;
pub const SHELL_RADIUS_STEP: f32 = 0.6;
pub const BASE_ANGULAR_SPEED: f32 = 1.5; // rad/s at n = 1

// Noble-gas shorthand is substituted at most this many times
pub const MAX_EXPANSION_PASSES: usize = 5;

// Nucleus sizing
pub const NUCLEUS_BASE_SCALE: f32 = 0.5;
pub const NUCLEUS_SCALE_PER_PROTON: f32 = 0.005;
pub const NUCLEUS_MAX_SCALE: f32 = 1.2;
