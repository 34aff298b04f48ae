//! Shared rendering constants

/// Viewport constants
pub mod viewport {
    /// MSAA sample count used when the configuration does not override it
    pub const SAMPLE_COUNT: u32 = 4;

    /// Depth buffer format shared by all pipelines
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
}
