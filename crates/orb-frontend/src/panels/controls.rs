//! Debug controls panel
//!
//! Frame statistics plus live sphere parameters. Edits are queued as
//! actions and applied by the app against the renderer.

use orb_renderer::SphereConfig;

use crate::panels::Panel;
use crate::state::{AppAction, AppState};

/// Side panel with frame statistics and sphere controls
#[derive(Default)]
pub struct ControlsPanel;

impl Panel for ControlsPanel {
    fn name(&self) -> &str {
        "Controls"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &mut AppState) {
        ui.strong("Statistics");
        ui.label(format!(
            "Frame: {:.3} ms ({:.1} FPS)",
            app_state.frame_time_ms, app_state.fps
        ));
        ui.label(format!("Strip vertices: {}", app_state.sphere_vertex_count));

        ui.separator();

        ui.strong("Sphere");
        let mut sphere = app_state.sphere;
        ui.add(egui::Slider::new(&mut sphere.radius, 0.1..=3.0).text("Radius"));
        ui.add(egui::Slider::new(&mut sphere.rings, 2..=128).text("Rings"));
        ui.add(egui::Slider::new(&mut sphere.sectors, 2..=128).text("Sectors"));
        if sphere != app_state.sphere {
            app_state.sphere = sphere;
            app_state.push_action(AppAction::RebuildSphere(sphere));
        }
        if ui.button("Reset").clicked() {
            let defaults = SphereConfig::default();
            if defaults != app_state.sphere {
                app_state.sphere = defaults;
                app_state.push_action(AppAction::RebuildSphere(defaults));
            }
        }

        ui.separator();

        ui.strong("Viewport");
        let mut color = app_state.background_color;
        ui.horizontal(|ui| {
            ui.label("Background:");
            ui.color_edit_button_rgba_unmultiplied(&mut color);
        });
        if color != app_state.background_color {
            app_state.background_color = color;
            app_state.push_action(AppAction::SetBackgroundColor(color));
        }

        ui.separator();

        ui.strong("Camera");
        let camera = &app_state.camera;
        ui.label(format!(
            "Eye: ({:.1}, {:.1}, {:.1})",
            camera.eye[0], camera.eye[1], camera.eye[2]
        ));
        ui.label(format!("FOV: {:.0}°", camera.fov_degrees));
    }
}
