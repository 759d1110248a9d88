//! Procedural humanoid body.
//!
//! Assembled from capsule and sphere primitives sharing one skin material,
//! a stylized mannequin for previewing placements. Replaced wholesale when
//! the user drops a real model.

use bevy::prelude::*;

/// Plugin spawning the default body on startup.
pub struct BodyModelPlugin;

impl Plugin for BodyModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_body);
    }
}

/// Root of the procedural body hierarchy.
#[derive(Component)]
pub struct BodyRoot;

fn setup_body(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_body(&mut commands, &mut meshes, &mut materials);
}

/// Spawn the procedural body. Also restores it when a dropped model fails
/// to load.
pub fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let skin = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x9a, 0x70, 0x55),
        perceptual_roughness: 0.72,
        metallic: 0.0,
        reflectance: 0.5,
        ..default()
    });

    commands
        .spawn((BodyRoot, Transform::default(), Visibility::default()))
        .with_children(|body| {
            let mut part = |mesh: Handle<Mesh>, position: Vec3| {
                body.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(skin.clone()),
                    Transform::from_translation(position),
                ));
            };

            // Torso and hips.
            part(meshes.add(Capsule3d::new(0.18, 0.50)), Vec3::ZERO);
            part(meshes.add(Capsule3d::new(0.16, 0.06)), Vec3::new(0.0, -0.28, 0.0));

            // Neck and head.
            part(
                meshes.add(ConicalFrustum {
                    radius_top: 0.05,
                    radius_bottom: 0.06,
                    height: 0.08,
                }),
                Vec3::new(0.0, 0.38, 0.0),
            );
            part(meshes.add(Sphere::new(0.09)), Vec3::new(0.0, 0.48, 0.0));

            // Mirrored limbs.
            let shoulder = meshes.add(Sphere::new(0.065));
            let upper_arm = meshes.add(Capsule3d::new(0.052, 0.28));
            let lower_arm = meshes.add(Capsule3d::new(0.045, 0.24));
            let upper_leg = meshes.add(Capsule3d::new(0.062, 0.32));
            let lower_leg = meshes.add(Capsule3d::new(0.048, 0.28));
            for side in [-1.0, 1.0] {
                part(shoulder.clone(), Vec3::new(side * 0.24, 0.22, 0.0));
                part(upper_arm.clone(), Vec3::new(side * 0.30, 0.06, 0.0));
                part(lower_arm.clone(), Vec3::new(side * 0.30, -0.22, 0.0));
                part(upper_leg.clone(), Vec3::new(side * 0.09, -0.52, 0.0));
                part(lower_leg.clone(), Vec3::new(side * 0.09, -0.88, 0.0));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_body_creates_one_root_with_all_parts() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_systems(Update, setup_body);
        app.update();

        let world = app.world_mut();
        let mut roots = world.query_filtered::<(), With<BodyRoot>>();
        assert_eq!(roots.iter(world).count(), 1);

        // Torso, hips, neck, head plus five mirrored limb parts per side.
        let mut parts = world.query::<&Mesh3d>();
        assert_eq!(parts.iter(world).count(), 14);
    }
}
