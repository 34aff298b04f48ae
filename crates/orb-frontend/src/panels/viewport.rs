//! 3D viewport panel

use crate::panels::Panel;
use crate::state::{AppState, SharedViewportState};

/// Central panel showing the rendered scene
#[derive(Default)]
pub struct ViewportPanel;

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn needs_render_context(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &mut AppState) {
        // Fallback when no render context
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "3D Viewport\n(WGPU not available)",
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        _app_state: &mut AppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        let available_size = ui.available_size();
        let width = available_size.x as u32;
        let height = available_size.y as u32;

        if width == 0 || height == 0 {
            return;
        }

        // Ensure texture and render
        let texture_id = {
            let mut state = viewport_state.lock();
            let mut egui_renderer = render_state.renderer.write();
            let tex_id = state.ensure_texture(width, height, &mut egui_renderer);
            state.render();
            tex_id
        };

        // Display the rendered texture
        ui.add(egui::Image::new(egui::load::SizedTexture::new(
            texture_id,
            [available_size.x, available_size.y],
        )));
    }
}
