//! Tattoo decal entity.
//!
//! Keeps a single textured quad in sync with the UI state: any change to the
//! zone, scale, or uploaded design recomputes the placement through the core
//! and respawns the quad.

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use inkmap_core::{compute_decal_spec, lookup_zone};

use crate::state::ViewerState;

/// Lift off the zone anchor along the decal normal so the quad clears the
/// body surface instead of intersecting it.
const SURFACE_OFFSET: f32 = 0.06;

/// Plugin keeping the decal entity in sync with [`ViewerState`].
pub struct DecalPlugin;

impl Plugin for DecalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_decal_assets)
            .add_systems(Update, sync_decal);
    }
}

#[derive(Resource)]
struct DecalAssets {
    quad: Handle<Mesh>,
}

/// Marker for the current decal entity.
#[derive(Component)]
struct TattooDecal;

fn setup_decal_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(DecalAssets {
        quad: meshes.add(Rectangle::new(1.0, 1.0)),
    });
}

#[allow(clippy::needless_pass_by_value)]
fn sync_decal(
    mut commands: Commands,
    state: Res<ViewerState>,
    assets: Res<DecalAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<TattooDecal>>,
) {
    if !state.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some(texture) = state.tattoo.clone() else {
        return;
    };
    if state.custom_model && state.model_degenerate {
        // Show the model bare rather than misplace a decal on it.
        return;
    }

    let spec = compute_decal_spec(&lookup_zone(state.zone), state.decal_scale);
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        spec.rotation.x,
        spec.rotation.y,
        spec.rotation.z,
    );
    let normal = rotation * Vec3::Z;

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.55,
        metallic: 0.0,
        depth_bias: 4.0,
        ..default()
    });

    commands.spawn((
        TattooDecal,
        NotShadowCaster,
        Mesh3d(assets.quad.clone()),
        MeshMaterial3d(material),
        Transform {
            translation: spec.anchor + normal * SURFACE_OFFSET,
            rotation,
            scale: Vec3::new(spec.extents.x * 2.0, spec.extents.y * 2.0, 1.0),
        },
    ));
}
