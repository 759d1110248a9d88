//! Orbit camera for the preview.
//!
//! Left-drag orbits around the model with a clamped polar angle, scroll
//! zooms within fixed bounds, and the view auto-rotates slowly while idle.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::ecs::message::MessageReader;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy_egui::input::egui_wants_any_pointer_input;

/// Plugin for orbit camera controls.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitSettings>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    orbit_drag.run_if(not(egui_wants_any_pointer_input)),
                    orbit_zoom.run_if(not(egui_wants_any_pointer_input)),
                    auto_rotate,
                    apply_orbit,
                )
                    .chain(),
            );
    }
}

/// Settings for orbit movement.
#[derive(Resource)]
pub struct OrbitSettings {
    /// Mouse sensitivity for orbit rotation.
    pub mouse_sensitivity: f32,
    /// Closest allowed camera distance.
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    pub max_distance: f32,
    /// Maximum polar angle from straight up, keeping the camera above the floor.
    pub max_polar: f32,
    /// Maximum pitch above the horizon, keeping the camera off the zenith.
    pub max_pitch: f32,
    /// Idle auto-rotation speed in radians per second.
    pub auto_rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.005,
            min_distance: 1.0,
            max_distance: 4.0,
            max_polar: 0.82 * PI,
            max_pitch: 1.55,
            auto_rotate_speed: 0.05,
        }
    }
}

/// Orbit state for the camera entity.
#[derive(Component)]
pub struct OrbitCamera {
    /// Azimuth around the target, in radians.
    pub yaw: f32,
    /// Elevation above the horizon, in radians.
    pub pitch: f32,
    /// Distance from the target.
    pub distance: f32,
    /// Point the camera orbits and looks at.
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.08,
            distance: 2.5,
            target: Vec3::ZERO,
        }
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 38.0_f32.to_radians(),
            near: 0.01,
            far: 50.0,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::default(),
        OrbitCamera::default(),
    ));
}

/// Handle left-drag orbit rotation.
#[allow(clippy::needless_pass_by_value)]
fn orbit_drag(
    mut mouse_motion: MessageReader<MouseMotion>,
    mouse: Res<ButtonInput<MouseButton>>,
    settings: Res<OrbitSettings>,
    mut query: Query<&mut OrbitCamera>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if !mouse.pressed(MouseButton::Left) || delta == Vec2::ZERO {
        return;
    }

    for mut camera in &mut query {
        camera.yaw -= delta.x * settings.mouse_sensitivity;
        camera.pitch = dragged_pitch(camera.pitch, delta.y, &settings);
    }
}

/// New pitch after a vertical drag, clamped to the settings' limits.
///
/// Pitch is elevation above the horizon; the polar limit keeps the camera
/// from dipping under the floor.
fn dragged_pitch(pitch: f32, delta_y: f32, settings: &OrbitSettings) -> f32 {
    let min_pitch = FRAC_PI_2 - settings.max_polar;
    (pitch + delta_y * settings.mouse_sensitivity).clamp(min_pitch, settings.max_pitch)
}

/// Handle scroll-wheel zoom.
#[allow(clippy::needless_pass_by_value)]
fn orbit_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    settings: Res<OrbitSettings>,
    mut query: Query<&mut OrbitCamera>,
) {
    for event in scroll_events.read() {
        let scroll = event.y;
        if scroll == 0.0 {
            continue;
        }

        // Adjust distance logarithmically for smooth zooming.
        let factor = 1.1_f32.powf(-scroll);
        for mut camera in &mut query {
            camera.distance =
                (camera.distance * factor).clamp(settings.min_distance, settings.max_distance);
        }
    }
}

/// Rotate slowly around the model while the user is not dragging.
#[allow(clippy::needless_pass_by_value)]
fn auto_rotate(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    settings: Res<OrbitSettings>,
    mut query: Query<&mut OrbitCamera>,
) {
    if mouse.pressed(MouseButton::Left) {
        return;
    }

    for mut camera in &mut query {
        camera.yaw += settings.auto_rotate_speed * time.delta_secs();
    }
}

/// Place the camera on its orbit and aim it at the target.
fn apply_orbit(mut query: Query<(&OrbitCamera, &mut Transform)>) {
    for (camera, mut transform) in &mut query {
        let (sin_yaw, cos_yaw) = camera.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = camera.pitch.sin_cos();
        let offset =
            Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * camera.distance;
        transform.translation = camera.target + offset;
        transform.look_at(camera.target, Vec3::Y);
    }
}
