//! Sphere renderer
//!
//! Draws the triangle-strip expansion of a [`SphereMesh`] with per-vertex
//! colors. The vertex data is uploaded once; the CPU-side mesh can be
//! dropped afterwards.

use wgpu::util::DeviceExt;

use orb_core::SphereMesh;

use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Model matrix uniform (group 1)
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// Sphere renderer
pub struct SphereRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
    #[allow(dead_code)] // Held for GPU resource lifetime
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

impl SphereRenderer {
    /// Creates a new sphere renderer and uploads the mesh.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        mesh: &SphereMesh,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Sphere");

        let model_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Sphere Model Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        // The sphere sits at the origin; its model matrix stays identity
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Model Buffer"),
            contents: bytemuck::cast_slice(&[ModelUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sphere Model Bind Group"),
            layout: &model_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        // Triangle strips expose back faces on the open half of the
        // sphere, so culling stays off
        let pipeline = PipelineConfig::new(
            "Sphere",
            include_str!("../shaders/sphere.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout, &model_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::TriangleStrip)
        .with_sample_count(sample_count)
        .build(device);

        let (vertex_buffer, vertex_count) = upload_vertices(device, mesh);

        Self {
            pipeline,
            vertex_buffer,
            vertex_count,
            bind_group,
            model_buffer,
            model_bind_group,
        }
    }

    /// Renders the sphere.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_bind_group(1, &self.model_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Rebuild the vertex buffer from a new mesh
    pub fn rebuild(&mut self, device: &wgpu::Device, mesh: &SphereMesh) {
        let (vertex_buffer, vertex_count) = upload_vertices(device, mesh);
        self.vertex_buffer = vertex_buffer;
        self.vertex_count = vertex_count;
    }

    /// Number of strip vertices drawn
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

/// Expand the mesh to a strip and upload it
fn upload_vertices(device: &wgpu::Device, mesh: &SphereMesh) -> (wgpu::Buffer, u32) {
    let (positions, colors) = mesh.triangle_strip();
    let vertices: Vec<PositionColorVertex> = positions
        .into_iter()
        .zip(colors)
        .map(|(position, color)| PositionColorVertex { position, color })
        .collect();

    tracing::info!(
        "Uploading sphere mesh: {} grid vertices, {} strip vertices",
        mesh.vertex_count(),
        vertices.len()
    );

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Sphere Vertex Buffer"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    (vertex_buffer, vertices.len() as u32)
}
