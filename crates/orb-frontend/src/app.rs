//! Main application module

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use orb_renderer::RendererConfig;

use crate::panels::{ControlsPanel, Panel, ViewportPanel};
use crate::state::{AppAction, AppState, SharedViewportState, ViewportState};

/// Frame statistics sampled over one-second windows
struct FrameStats {
    frames: u32,
    window_start: Instant,
    last_frame: Instant,
    fps: f32,
    frame_time_ms: f32,
}

impl FrameStats {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            frames: 0,
            window_start: now,
            last_frame: now,
            fps: 0.0,
            frame_time_ms: 0.0,
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        self.frame_time_ms = now.duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        self.frames += 1;
        let elapsed = now.duration_since(self.window_start).as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.window_start = now;
        }
    }
}

/// Main application
pub struct ViewerApp {
    app_state: AppState,
    viewport_state: Option<SharedViewportState>,
    viewport_panel: ViewportPanel,
    controls_panel: ControlsPanel,
    stats: FrameStats,
}

impl ViewerApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, orb_core::MeshError> {
        let config = RendererConfig::default();

        // Create viewport state if WGPU is available
        let viewport_state = match cc.wgpu_render_state.as_ref() {
            Some(render_state) => {
                let device = render_state.device.clone();
                let queue = render_state.queue.clone();
                let format = render_state.target_format;
                let state = ViewportState::new(device, queue, format, &config)?;
                Some(Arc::new(Mutex::new(state)))
            }
            None => {
                tracing::warn!("WGPU render state unavailable; viewport disabled");
                None
            }
        };

        Ok(Self {
            app_state: AppState::new(&config),
            viewport_state,
            viewport_panel: ViewportPanel,
            controls_panel: ControlsPanel,
            stats: FrameStats::new(),
        })
    }

    /// Apply pending UI actions to the renderer
    fn process_actions(&mut self) {
        let actions = self.app_state.take_pending_actions();
        let Some(viewport_state) = self.viewport_state.as_ref() else {
            return;
        };

        let mut state = viewport_state.lock();
        for action in actions {
            match action {
                AppAction::RebuildSphere(config) => {
                    if let Err(e) = state.rebuild_sphere(&config) {
                        tracing::warn!("Sphere rebuild rejected: {e}");
                    }
                }
                AppAction::SetBackgroundColor(color) => {
                    state.renderer.set_background_color(color);
                }
            }
        }

        self.app_state.sphere_vertex_count = state.renderer.sphere_vertex_count();
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.stats.tick();
        self.app_state.frame_time_ms = self.stats.frame_time_ms;
        self.app_state.fps = self.stats.fps;

        self.process_actions();

        egui::SidePanel::right("controls")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading(self.controls_panel.name());
                ui.separator();
                self.controls_panel.ui(ui, &mut self.app_state);
            });

        let render_state = frame.wgpu_render_state();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let has_context = self.viewport_panel.needs_render_context();
                match (has_context, self.viewport_state.as_ref(), render_state) {
                    (true, Some(viewport_state), Some(render_state)) => {
                        self.viewport_panel.ui_with_render_context(
                            ui,
                            &mut self.app_state,
                            render_state,
                            viewport_state,
                        );
                    }
                    _ => self.viewport_panel.ui(ui, &mut self.app_state),
                }
            });

        // Keep rendering continuously
        ctx.request_repaint();
    }
}
