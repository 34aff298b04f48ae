//! Procedural primitive mesh generation
//!
//! Produces the vertex data for the sphere shown by the viewer: parallel
//! position and color arrays laid out as a `rings x sectors` grid (ring
//! outer loop, sector inner loop), plus the triangle-strip expansion the
//! renderer draws. The longitude sweep covers a half revolution (`0..PI`).

mod sphere;

pub use sphere::{generate_sphere_mesh, generate_sphere_mesh_with_segments};

/// Mesh generation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A shape parameter was outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Sphere vertex data over a `rings x sectors` grid.
///
/// `positions` and `colors` are parallel, co-indexed, and row-major over
/// the grid; `rings` and `sectors` are both at least 2.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions in object space
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex RGB colors
    pub colors: Vec<[f32; 3]>,
    /// Number of latitude rings (pole to pole)
    pub rings: u32,
    /// Number of longitude sectors
    pub sectors: u32,
}

impl SphereMesh {
    /// Number of grid vertices (`rings * sectors`)
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Expand the grid into a triangle-strip vertex sequence.
    ///
    /// Each band interleaves ring `r` with ring `r + 1`; bands are joined
    /// by repeating the last vertex of one band and the first vertex of
    /// the next, which yields degenerate triangles instead of one draw
    /// call per band. Output arrays stay parallel and co-indexed.
    pub fn triangle_strip(&self) -> (Vec<[f32; 3]>, Vec<[f32; 3]>) {
        let rings = self.rings as usize;
        let sectors = self.sectors as usize;
        let strip_len = (rings - 1) * sectors * 2 + rings.saturating_sub(2) * 2;

        let mut positions = Vec::with_capacity(strip_len);
        let mut colors = Vec::with_capacity(strip_len);
        let mut push = |index: usize| {
            positions.push(self.positions[index]);
            colors.push(self.colors[index]);
        };

        for r in 0..rings - 1 {
            for s in 0..sectors {
                push(r * sectors + s);
                push((r + 1) * sectors + s);
            }
            // Stitch to the next band with two degenerate vertices
            if r + 2 < rings {
                push((r + 1) * sectors + sectors - 1);
                push((r + 1) * sectors);
            }
        }

        (positions, colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_grid_dimensions() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 7, 11).unwrap();
        assert_eq!(mesh.positions.len(), 7 * 11);
        assert_eq!(mesh.colors.len(), 7 * 11);
        assert_eq!(mesh.vertex_count(), 77);
    }

    #[test]
    fn test_default_resolution() {
        let mesh = generate_sphere_mesh(crate::constants::SPHERE_RADIUS).unwrap();
        let expected = crate::constants::SPHERE_RINGS * crate::constants::SPHERE_SECTORS;
        assert_eq!(mesh.vertex_count(), expected as usize);
    }

    #[test]
    fn test_vertices_on_sphere() {
        let radius = 2.5;
        let mesh = generate_sphere_mesh_with_segments(radius, 9, 13).unwrap();
        for p in &mesh.positions {
            assert!((length(*p) - radius).abs() < EPS);
        }
    }

    #[test]
    fn test_pole_rows() {
        let radius = 2.0;
        let mesh = generate_sphere_mesh_with_segments(radius, 5, 8).unwrap();
        for s in 0..8 {
            // South pole row, then north pole row
            assert!((mesh.positions[s][1] + radius).abs() < EPS);
            assert!((mesh.positions[4 * 8 + s][1] - radius).abs() < EPS);
        }
    }

    #[test]
    fn test_color_channels() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 6, 9).unwrap();
        for c in &mesh.colors {
            assert!((0.0..1.0).contains(&c[0]));
            assert!((0.0..1.0).contains(&c[1]));
            assert_eq!(c[2], 0.5);
        }
        // Linear ramp over the grid indices
        assert_eq!(mesh.colors[0][0], 0.0);
        assert_eq!(mesh.colors[0][1], 0.0);
        assert!((mesh.colors[5 * 9][0] - 5.0 / 6.0).abs() < EPS);
        assert!((mesh.colors[8][1] - 8.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn test_determinism() {
        let a = generate_sphere_mesh_with_segments(1.5, 12, 10).unwrap();
        let b = generate_sphere_mesh_with_segments(1.5, 12, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimal_sphere() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 2, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        // First vertex sits at the south pole
        let first = mesh.positions[0];
        assert!(first[0].abs() < EPS);
        assert!((first[1] + 1.0).abs() < EPS);
        assert!(first[2].abs() < EPS);
    }

    #[test]
    fn test_half_longitude() {
        // The longitude sweep stops at PI, so no vertex crosses z < 0
        let mesh = generate_sphere_mesh_with_segments(1.0, 8, 8).unwrap();
        for p in &mesh.positions {
            assert!(p[2] > -EPS);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        for (radius, rings, sectors) in [
            (1.0, 1, 8),
            (1.0, 8, 1),
            (0.0, 8, 8),
            (-1.0, 8, 8),
            (f32::NAN, 8, 8),
            (f32::INFINITY, 8, 8),
        ] {
            assert!(matches!(
                generate_sphere_mesh_with_segments(radius, rings, sectors),
                Err(MeshError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_strip_length() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 4, 6).unwrap();
        let (positions, colors) = mesh.triangle_strip();
        assert_eq!(positions.len(), 3 * 2 * 6 + 2 * 2);
        assert_eq!(positions.len(), colors.len());
    }

    #[test]
    fn test_strip_single_band() {
        // Two rings form one band, so there is nothing to stitch
        let mesh = generate_sphere_mesh_with_segments(1.0, 2, 5).unwrap();
        let (positions, _) = mesh.triangle_strip();
        assert_eq!(positions.len(), 2 * 5);
    }

    #[test]
    fn test_strip_interleaving() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 3, 4).unwrap();
        let (positions, colors) = mesh.triangle_strip();
        for s in 0..4 {
            assert_eq!(positions[2 * s], mesh.positions[s]);
            assert_eq!(positions[2 * s + 1], mesh.positions[4 + s]);
            assert_eq!(colors[2 * s], mesh.colors[s]);
            assert_eq!(colors[2 * s + 1], mesh.colors[4 + s]);
        }
    }

    #[test]
    fn test_strip_stitching() {
        let mesh = generate_sphere_mesh_with_segments(1.0, 3, 4).unwrap();
        let (positions, _) = mesh.triangle_strip();
        // After the first band (8 vertices) come two degenerate vertices:
        // the band's last vertex repeated, then the next band's first
        assert_eq!(positions[8], positions[7]);
        assert_eq!(positions[9], positions[10]);
    }
}
