//! Studio scene setup: lighting and the ground disc.

use bevy::prelude::*;

/// Plugin for the static studio environment.
pub struct StudioScenePlugin;

impl Plugin for StudioScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(10, 10, 10)))
            .insert_resource(GlobalAmbientLight {
                color: Color::WHITE,
                brightness: 120.0,
                ..default()
            })
            .add_systems(Startup, spawn_studio);
    }
}

fn spawn_studio(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Shadow-casting key light.
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm and cool fill lights.
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0xff, 0xcc, 0xaa),
            intensity: 600_000.0,
            ..default()
        },
        Transform::from_xyz(-3.0, 2.0, 3.0),
    ));
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0x80, 0x90, 0xc0),
            intensity: 250_000.0,
            ..default()
        },
        Transform::from_xyz(2.0, -1.0, -2.0),
    ));

    // Ground disc below the model to catch contact shadows.
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(3.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.04, 0.04, 0.045),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, -1.1, 0.0)
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));
}
