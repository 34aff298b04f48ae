//! Renderer configuration structures
//!
//! Explicit, serializable settings for everything the viewer would
//! otherwise hard-code: background color, camera placement, and the
//! sphere's resolution.

use serde::{Deserialize, Serialize};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
    /// MSAA sample count (1 = disabled, 2, 4, 8)
    pub msaa_sample_count: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [0.45, 0.55, 0.60, 1.0],
            msaa_sample_count: crate::constants::viewport::SAMPLE_COUNT,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Eye position in world space
    pub eye: [f32; 3],
    /// Look-at target
    pub target: [f32; 3],
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

/// Sphere mesh configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SphereConfig {
    /// Sphere radius in object-space units
    pub radius: f32,
    /// Number of latitude rings
    pub rings: u32,
    /// Number of longitude sectors
    pub sectors: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: orb_core::constants::SPHERE_RADIUS,
            rings: orb_core::constants::SPHERE_RINGS,
            sectors: orb_core::constants::SPHERE_SECTORS,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Sphere settings
    #[serde(default)]
    pub sphere: SphereConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_viewer_startup() {
        let config = RendererConfig::default();
        assert_eq!(config.viewport.background_color, [0.45, 0.55, 0.60, 1.0]);
        assert_eq!(config.camera.eye, [0.0, 0.0, 5.0]);
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.sphere.radius, 1.0);
        assert_eq!(config.sphere.rings, 20);
        assert_eq!(config.sphere.sectors, 20);
    }
}
