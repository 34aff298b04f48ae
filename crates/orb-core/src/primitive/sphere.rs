//! Sphere mesh generation (UV sphere)

use std::f32::consts::{FRAC_PI_2, PI};

use super::{MeshError, SphereMesh};

/// Generate a sphere mesh at the viewer's default resolution
///
/// # Arguments
/// * `radius` - Sphere radius in object-space units
pub fn generate_sphere_mesh(radius: f32) -> Result<SphereMesh, MeshError> {
    use crate::constants::{SPHERE_RINGS, SPHERE_SECTORS};
    generate_sphere_mesh_with_segments(radius, SPHERE_RINGS, SPHERE_SECTORS)
}

/// Generate a sphere mesh with custom resolution
///
/// # Arguments
/// * `radius` - Sphere radius in object-space units (finite, > 0)
/// * `rings` - Number of latitude rings, pole to pole (min 2)
/// * `sectors` - Number of longitude sectors (min 2)
///
/// Arguments are validated before any vertex is produced; on error the
/// result carries no partial data.
pub fn generate_sphere_mesh_with_segments(
    radius: f32,
    rings: u32,
    sectors: u32,
) -> Result<SphereMesh, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::InvalidArgument(format!(
            "sphere radius must be positive and finite, got {radius}"
        )));
    }
    if rings < 2 {
        return Err(MeshError::InvalidArgument(format!(
            "sphere needs at least 2 rings, got {rings}"
        )));
    }
    if sectors < 2 {
        return Err(MeshError::InvalidArgument(format!(
            "sphere needs at least 2 sectors, got {sectors}"
        )));
    }

    let ring_step = 1.0 / (rings - 1) as f32;
    let sector_step = 1.0 / (sectors - 1) as f32;

    let count = (rings * sectors) as usize;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for r in 0..rings {
        // Latitude sweeps from the south pole (-PI/2) to the north pole (+PI/2)
        let phi = -FRAC_PI_2 + PI * r as f32 * ring_step;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for s in 0..sectors {
            // Longitude covers a half revolution
            let theta = PI * s as f32 * sector_step;

            let x = theta.cos() * cos_phi;
            let y = sin_phi;
            let z = theta.sin() * cos_phi;

            positions.push([radius * x, radius * y, radius * z]);
            colors.push([r as f32 / rings as f32, s as f32 / sectors as f32, 0.5]);
        }
    }

    Ok(SphereMesh {
        positions,
        colors,
        rings,
        sectors,
    })
}
