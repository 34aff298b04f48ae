//! wgpu-based rendering for the orb viewer.
//!
//! The renderer draws a single procedurally generated sphere with a fixed
//! camera. GPU resources are owned by the structs that use them and are
//! released when those structs drop.
//!
//! # Module Structure
//!
//! ```text
//! orb-renderer/
//! ├── camera.rs        # Fixed viewer camera
//! ├── config.rs        # Configuration structures
//! ├── constants.rs     # Shared rendering constants
//! ├── pipeline.rs      # Pipeline construction helpers
//! ├── sub_renderers/   # Built-in renderers (Sphere)
//! ├── vertex.rs        # Vertex formats
//! └── renderer.rs      # Main Renderer
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod renderer;
pub mod sub_renderers;
pub mod vertex;

// Re-exports for convenience
pub use camera::{Camera, CameraUniform};
pub use config::{CameraConfig, RendererConfig, SphereConfig, ViewportConfig};
pub use renderer::Renderer;
pub use sub_renderers::SphereRenderer;
pub use vertex::PositionColorVertex;
