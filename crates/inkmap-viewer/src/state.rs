//! Shared UI state driving decal placement.

use bevy::prelude::*;
use inkmap_core::ZoneId;

/// Plugin registering the viewer state resource.
pub struct ViewerStatePlugin;

impl Plugin for ViewerStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerState>();
    }
}

/// Current selections from the control panel and dropped files.
#[derive(Resource)]
pub struct ViewerState {
    /// Body zone the decal is placed on.
    pub zone: ZoneId,
    /// Scale slider value; the core clamps it before use.
    pub decal_scale: f32,
    /// Uploaded tattoo design, once an image has been dropped.
    pub tattoo: Option<Handle<Image>>,
    /// Whether a dropped model has replaced the procedural body.
    pub custom_model: bool,
    /// Set when the dropped model failed normalization; decal placement is
    /// suppressed for it rather than misplaced.
    pub model_degenerate: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            zone: ZoneId::Arm,
            decal_scale: 1.0,
            tattoo: None,
            custom_model: false,
            model_degenerate: false,
        }
    }
}
