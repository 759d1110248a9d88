//! Dropped-file handling and model normalization.
//!
//! Dropping an image loads it as the tattoo design; dropping a `.glb` or
//! `.gltf` replaces the procedural body with the loaded scene. Once the
//! scene's meshes are ready, their world-space bounds are unioned and the
//! core normalization fits the model into the viewing volume.

use bevy::asset::LoadState;
use bevy::ecs::message::MessageReader;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy::camera::primitives::Aabb as RenderAabb;
use bevy::window::FileDragAndDrop;
use glam::Vec3A;

use inkmap_core::{Aabb, BODY_TARGET_SIZE, NormalizeError, normalize};

use crate::body::{self, BodyRoot};
use crate::state::ViewerState;

/// Plugin for loading dropped files.
pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_dropped_files, normalize_pending_models));
    }
}

/// Marker for a dropped model scene awaiting normalization.
#[derive(Component)]
pub struct PendingNormalize;

/// Root of a user-dropped model scene.
#[derive(Component)]
pub struct CustomModel;

const MODEL_EXTENSIONS: [&str; 2] = ["glb", "gltf"];
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[allow(clippy::needless_pass_by_value)]
fn handle_dropped_files(
    mut drops: MessageReader<FileDragAndDrop>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut state: ResMut<ViewerState>,
    bodies: Query<Entity, With<BodyRoot>>,
    models: Query<Entity, With<CustomModel>>,
) {
    for drop in drops.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = drop else {
            continue;
        };
        let extension = path_buf
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            state.tattoo = Some(asset_server.load(path_buf.clone()));
            tracing::info!("Loaded tattoo design from {}", path_buf.display());
        } else if MODEL_EXTENSIONS.contains(&extension.as_str()) {
            // Replace whatever body is currently shown.
            for entity in bodies.iter().chain(models.iter()) {
                commands.entity(entity).despawn();
            }
            let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path_buf.clone()));
            commands.spawn((
                SceneRoot(scene),
                Transform::default(),
                Visibility::default(),
                CustomModel,
                PendingNormalize,
            ));
            state.custom_model = true;
            state.model_degenerate = false;
            tracing::info!("Loading model from {}", path_buf.display());
        } else {
            tracing::warn!(
                "Ignoring dropped file with unsupported extension: {}",
                path_buf.display()
            );
        }
    }
}

/// Fit dropped models into the viewing volume once their meshes are ready.
#[allow(clippy::needless_pass_by_value)]
fn normalize_pending_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut state: ResMut<ViewerState>,
    mut pending: Query<(Entity, &SceneRoot, &mut Transform), With<PendingNormalize>>,
    children: Query<&Children>,
    mesh_bounds: Query<(&GlobalTransform, &RenderAabb)>,
    mut mesh_assets: ResMut<Assets<Mesh>>,
    mut material_assets: ResMut<Assets<StandardMaterial>>,
) {
    for (root, scene, mut transform) in &mut pending {
        // A scene that failed to load will never produce meshes; give the
        // procedural body back instead of polling forever.
        if matches!(asset_server.load_state(scene.0.id()), LoadState::Failed(_)) {
            commands.entity(root).despawn();
            reset_model_flags(&mut state);
            body::spawn_body(&mut commands, &mut mesh_assets, &mut material_assets);
            tracing::warn!("Dropped model failed to load; restoring the procedural body");
            continue;
        }

        let meshes = std::iter::once(root)
            .chain(children.iter_descendants(root))
            .filter_map(|entity| mesh_bounds.get(entity).ok());

        let mut merged: Option<Aabb> = None;
        for (global, aabb) in meshes {
            let world = world_aabb(global, aabb.center, aabb.half_extents);
            merged = Some(merged.map_or(world, |m| m.union(&world)));
        }

        // Scene still loading; try again next frame.
        let Some(bounds) = merged else {
            continue;
        };

        match normalize(&bounds, BODY_TARGET_SIZE) {
            Ok(fit) => {
                transform.scale = Vec3::splat(fit.scale);
                transform.translation = fit.translation;
                tracing::info!(scale = fit.scale, "Normalized model to the viewing volume");
            }
            Err(NormalizeError::DegenerateBounds) => {
                state.model_degenerate = true;
                tracing::warn!("Model has degenerate bounds; showing it unscaled without a decal");
            }
        }
        commands.entity(root).remove::<PendingNormalize>();
    }
}

/// Clear the model flags so decal placement treats the restored procedural
/// body normally.
fn reset_model_flags(state: &mut ViewerState) {
    state.custom_model = false;
    state.model_degenerate = false;
}

/// World-space AABB of a local-space box under an affine transform.
fn world_aabb(transform: &GlobalTransform, center: Vec3A, half_extents: Vec3A) -> Aabb {
    let local = Aabb::new(
        Vec3::from(center - half_extents),
        Vec3::from(center + half_extents),
    );
    let corners = local.corners().map(|c| transform.transform_point(c));
    Aabb::from_points(corners).unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_clears_model_flags() {
        let mut state = ViewerState {
            custom_model: true,
            model_degenerate: true,
            ..default()
        };
        reset_model_flags(&mut state);
        assert!(!state.custom_model);
        assert!(!state.model_degenerate);
    }

    #[test]
    fn world_aabb_applies_scale_and_translation() {
        let transform = GlobalTransform::from(
            Transform::from_xyz(1.0, 0.0, -2.0).with_scale(Vec3::splat(2.0)),
        );
        let world = world_aabb(&transform, Vec3A::ZERO, Vec3A::splat(0.5));
        assert_eq!(world.min, Vec3::new(0.0, -1.0, -3.0));
        assert_eq!(world.max, Vec3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn world_aabb_rotation_expands_bounds() {
        let transform = GlobalTransform::from(Transform::from_rotation(Quat::from_rotation_y(
            std::f32::consts::FRAC_PI_4,
        )));
        let world = world_aabb(&transform, Vec3A::ZERO, Vec3A::splat(0.5));
        // A unit cube rotated 45 degrees spans sqrt(2) on X and Z.
        let expected = std::f32::consts::SQRT_2 / 2.0;
        assert!((world.max.x - expected).abs() < 1e-5);
        assert!((world.max.z - expected).abs() < 1e-5);
        assert!((world.max.y - 0.5).abs() < 1e-5);
    }
}
