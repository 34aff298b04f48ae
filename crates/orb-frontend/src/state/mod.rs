//! Application state module

mod viewport;

pub use viewport::{SharedViewportState, ViewportState};

use orb_renderer::{RendererConfig, SphereConfig};

/// Actions queued by the UI and applied against the renderer each frame
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Regenerate the sphere mesh with new parameters
    RebuildSphere(SphereConfig),
    /// Change the viewport background color
    SetBackgroundColor([f32; 4]),
}

/// UI-side application state
pub struct AppState {
    /// Sphere parameters shown by the controls panel
    pub sphere: SphereConfig,
    /// Background color (RGBA)
    pub background_color: [f32; 4],
    /// Camera settings shown read-only by the controls panel
    pub camera: orb_renderer::CameraConfig,
    /// Latest frame time in milliseconds
    pub frame_time_ms: f32,
    /// Frames per second over the last sampling window
    pub fps: f32,
    /// Strip vertices in the current sphere draw call
    pub sphere_vertex_count: u32,
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Create state seeded from the renderer configuration
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            sphere: config.sphere,
            background_color: config.viewport.background_color,
            camera: config.camera.clone(),
            frame_time_ms: 0.0,
            fps: 0.0,
            sphere_vertex_count: 0,
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action for the app to apply this frame
    pub fn push_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take all pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }
}
