//! Global constants for orb-core

/// Default sphere radius in object-space units
pub const SPHERE_RADIUS: f32 = 1.0;

/// Default number of latitude rings for sphere mesh generation
pub const SPHERE_RINGS: u32 = 20;

/// Default number of longitude sectors for sphere mesh generation
pub const SPHERE_SECTORS: u32 = 20;
