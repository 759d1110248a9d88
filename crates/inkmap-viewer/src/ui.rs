//! Control panel: zone selection, decal scale, upload status.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use inkmap_core::{SCALE_RANGE, ZoneId};

use crate::state::ViewerState;

/// Plugin for the egui side panel.
pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, control_panel);
    }
}

fn control_panel(mut contexts: EguiContexts, mut state: ResMut<ViewerState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("controls")
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading("Tattoo Preview");
            ui.separator();

            ui.label("Tattoo design");
            if state.tattoo.is_some() {
                ui.small("Design loaded. Drop another image to replace it.");
            } else {
                ui.small("Drop a PNG here (transparent background recommended).");
            }
            ui.separator();

            ui.label("Body zone");
            ui.horizontal_wrapped(|ui| {
                for id in ZoneId::ALL {
                    if ui.selectable_label(state.zone == id, id.label()).clicked()
                        && state.zone != id
                    {
                        state.zone = id;
                    }
                }
            });
            ui.separator();

            // Write back only on an actual change so change detection stays
            // quiet while the slider is idle.
            let mut scale = state.decal_scale;
            ui.add(egui::Slider::new(&mut scale, SCALE_RANGE).text("Decal scale"));
            if (scale - state.decal_scale).abs() > f32::EPSILON {
                state.decal_scale = scale;
            }
            ui.separator();

            ui.small("Drag to rotate, scroll to zoom.");
            ui.small("Drop a .glb or .gltf to replace the body model.");
        });
}
