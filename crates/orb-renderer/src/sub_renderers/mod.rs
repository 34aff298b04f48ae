//! Built-in sub-renderers for the viewer.
//!
//! Each sub-renderer owns its pipeline and GPU buffers and draws into the
//! main render pass:
//! - [`sphere::SphereRenderer`]: the procedurally generated sphere

pub mod sphere;

pub use sphere::SphereRenderer;
