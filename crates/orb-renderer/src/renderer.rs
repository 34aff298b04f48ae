//! Main renderer.
//!
//! Owns the camera resources, the depth/MSAA targets, and the sphere
//! sub-renderer, and runs the single main render pass. Everything is
//! created once at startup from a [`RendererConfig`] and released when
//! the renderer drops.

use wgpu::util::DeviceExt;

use orb_core::{MeshError, generate_sphere_mesh_with_segments};

use crate::camera::Camera;
use crate::config::{RendererConfig, SphereConfig};
use crate::constants::viewport::DEPTH_FORMAT;
use crate::pipeline::create_camera_bind_group_layout;
use crate::sub_renderers::SphereRenderer;

/// Main renderer
pub struct Renderer {
    camera: Camera,
    camera_buffer: wgpu::Buffer,

    // Depth/MSAA resources
    #[allow(dead_code)] // Held for GPU resource lifetime
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    #[allow(dead_code)] // Held for GPU resource lifetime
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    sphere_renderer: SphereRenderer,

    clear_color: wgpu::Color,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl Renderer {
    /// Creates a new renderer for the given surface format and size.
    ///
    /// Fails if the configured sphere parameters are out of range.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &RendererConfig,
    ) -> Result<Self, MeshError> {
        let sample_count = config.viewport.msaa_sample_count.max(1);
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera = Camera::new(&config.camera, aspect);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group_layout = create_camera_bind_group_layout(device);

        let (depth_texture, depth_view) = create_depth_texture(device, width, height, sample_count);
        let (msaa_texture, msaa_view) =
            match create_msaa_texture(device, format, width, height, sample_count) {
                Some((texture, view)) => (Some(texture), Some(view)),
                None => (None, None),
            };

        let mesh = generate_sphere_mesh_with_segments(
            config.sphere.radius,
            config.sphere.rings,
            config.sphere.sectors,
        )?;

        let sphere_renderer = SphereRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            sample_count,
            &camera_bind_group_layout,
            &camera_buffer,
            &mesh,
        );

        let [r, g, b, a] = config.viewport.background_color;
        Ok(Self {
            camera,
            camera_buffer,
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,
            sphere_renderer,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            format,
            sample_count,
        })
    }

    /// Resizes the renderer's textures for a new viewport size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::warn!("Ignoring zero-sized resize request");
            return;
        }
        self.camera.update_aspect(width, height);

        let (depth_texture, depth_view) =
            create_depth_texture(device, width, height, self.sample_count);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let (msaa_texture, msaa_view) =
            match create_msaa_texture(device, self.format, width, height, self.sample_count) {
                Some((texture, view)) => (Some(texture), Some(view)),
                None => (None, None),
            };
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;
    }

    /// Regenerate the sphere mesh and re-upload it.
    pub fn rebuild_sphere(
        &mut self,
        device: &wgpu::Device,
        config: &SphereConfig,
    ) -> Result<(), MeshError> {
        let mesh =
            generate_sphere_mesh_with_segments(config.radius, config.rings, config.sectors)?;
        self.sphere_renderer.rebuild(device, &mesh);
        Ok(())
    }

    /// Set the background clear color (RGBA).
    pub fn set_background_color(&mut self, color: [f32; 4]) {
        self.clear_color = wgpu::Color {
            r: color[0] as f64,
            g: color[1] as f64,
            b: color[2] as f64,
            a: color[3] as f64,
        };
    }

    /// Number of strip vertices the sphere draw call issues.
    pub fn sphere_vertex_count(&self) -> u32 {
        self.sphere_renderer.vertex_count()
    }

    /// Returns the texture format used by the renderer.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Render the scene.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );

        // Render to the multisample texture and resolve into the output
        // when MSAA is enabled
        let color_attachment = if let Some(msaa_view) = self.msaa_view.as_ref() {
            wgpu::RenderPassColorAttachment {
                view: msaa_view,
                resolve_target: Some(view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            }
        } else {
            wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            }
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Main Render Pass"),
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.sphere_renderer.render(&mut render_pass);
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    sample_count: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

fn create_msaa_texture(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> Option<(wgpu::Texture, wgpu::TextureView)> {
    if sample_count <= 1 {
        return None;
    }
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("MSAA Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Some((texture, view))
}
