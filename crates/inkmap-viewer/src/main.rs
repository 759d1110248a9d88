//! Interactive 3D tattoo previewer.
//!
//! Renders a body model (procedural mannequin or a dropped glTF scene) with
//! a tattoo decal placed on a selected body zone. All placement math lives
//! in `inkmap-core`; this binary owns the scene graph, input, and UI.

mod body;
mod camera;
mod decal;
mod loader;
mod scene;
mod state;
mod ui;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tattoo Previewer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            bevy_egui::EguiPlugin::default(),
            state::ViewerStatePlugin,
            scene::StudioScenePlugin,
            body::BodyModelPlugin,
            loader::ModelLoaderPlugin,
            decal::DecalPlugin,
            ui::ControlPanelPlugin,
            camera::OrbitCameraPlugin,
        ))
        .run();
}
