//! Fixed viewer camera

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// View matrix (column-major)
    pub view: [[f32; 4]; 4],
    /// Projection matrix (column-major)
    pub proj: [[f32; 4]; 4],
}

/// Fixed camera looking at the scene origin.
///
/// The viewer does not move the camera at runtime; only the aspect ratio
/// changes when the viewport is resized.
pub struct Camera {
    /// Eye position in world space
    pub eye: Vec3,
    /// Look-at target
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport aspect ratio
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a camera from configuration and an initial aspect ratio
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(config.eye),
            target: Vec3::from_array(config.target),
            up: Vec3::Y,
            fov: config.fov_degrees.to_radians(),
            aspect,
            near: config.near_plane,
            far: config.far_plane,
        }
    }

    /// Update aspect ratio; zero-sized viewports are ignored
    pub fn update_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            proj: self.projection_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_maps_eye_to_origin() {
        let camera = Camera::new(&CameraConfig::default(), 800.0 / 600.0);
        let eye = camera.view_matrix() * camera.eye.extend(1.0);
        assert!(eye.truncate().length() < 1e-5);
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let camera = Camera::new(&CameraConfig::default(), 1.0);
        let target = camera.view_matrix() * camera.target.extend(1.0);
        // Default eye is 5 units back from the origin
        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!((target.z + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_is_finite() {
        let mut camera = Camera::new(&CameraConfig::default(), 800.0 / 600.0);
        camera.update_aspect(1024, 768);
        assert!((camera.aspect - 1024.0 / 768.0).abs() < 1e-6);
        let m = camera.projection_matrix();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_size_aspect_ignored() {
        let mut camera = Camera::new(&CameraConfig::default(), 2.0);
        camera.update_aspect(0, 600);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_uniform_matches_matrices() {
        let camera = Camera::new(&CameraConfig::default(), 1.5);
        let uniform = camera.uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.proj, camera.projection_matrix().to_cols_array_2d());
    }
}
