//! UI panels

mod controls;
mod viewport;

pub use controls::ControlsPanel;
pub use viewport::ViewportPanel;

use crate::state::{AppState, SharedViewportState};

/// Panel trait for the viewer's UI panels
pub trait Panel {
    /// Panel name for the title
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &mut AppState);

    /// Draw with render context (for the 3D viewport)
    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &mut AppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        // Default: just call ui()
        let _ = (render_state, viewport_state);
        self.ui(ui, app_state);
    }

    /// Whether this panel needs render context
    fn needs_render_context(&self) -> bool {
        false
    }
}
