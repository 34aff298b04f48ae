//! Core mesh generation for the orb viewer
//!
//! Pure data production: no GPU resources, no I/O. The renderer crate
//! uploads the arrays produced here and may drop them afterwards.

pub mod constants;
pub mod primitive;

pub use primitive::{
    MeshError, SphereMesh, generate_sphere_mesh, generate_sphere_mesh_with_segments,
};
