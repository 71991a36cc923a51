use bevy::prelude::*;
use bevy_egui::EguiContexts;

use grove::selection::SelectedCity;

use crate::picking::pointer_over_overlay;

/// Fixed orbit radius; zoom is disabled for the banner.
pub const ORBIT_DISTANCE: f32 = 8.0;
const FOV_DEGREES: f32 = 50.0;
/// Direction the camera starts from, relative to the focus.
const START_OFFSET: Vec3 = Vec3::new(5.0, 18.0, 0.5);
const MIN_PITCH: f32 = 0.0; // level with the ground
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0; // just short of straight down
const ORBIT_SENSITIVITY: f32 = 0.005;
const KEY_ROTATE_SPEED: f32 = 1.2;
const LEFT_DRAG_THRESHOLD: f32 = 5.0;

/// Orbital camera model: camera orbits around the base of the tree.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let (yaw, pitch) = yaw_pitch_of(START_OFFSET);
        Self {
            focus: Vec3::ZERO,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            distance: ORBIT_DISTANCE,
        }
    }
}

/// Tracks left-button state: differentiates a click (select a date) from a
/// drag (orbit). Once the mouse travels past `LEFT_DRAG_THRESHOLD` pixels the
/// gesture is an orbit and the release will not count as a click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once mouse has moved beyond threshold -- this is a camera drag, not a click.
    pub is_dragging: bool,
    /// Set for exactly one frame when the button is released without dragging.
    pub clicked: bool,
}

/// Inverse of [`orbit_to_transform`]'s spherical mapping.
pub fn yaw_pitch_of(offset: Vec3) -> (f32, f32) {
    let len = offset.length().max(f32::EPSILON);
    let yaw = offset.x.atan2(offset.z);
    let pitch = (offset.y / len).clamp(-1.0, 1.0).asin();
    (yaw, pitch)
}

pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        Msaa::Sample4,
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch), with a
/// threshold so a plain click still reaches the date picker.
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    selected: Res<SelectedCity>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    left_drag.clicked = false;

    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left)
        && !selected.is_open()
        && !pointer_over_overlay(contexts.ctx_mut())
    {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.clicked = left_drag.pressed && !left_drag.is_dragging;
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging {
                let dist = (pos - left_drag.start_pos).length();
                if dist > LEFT_DRAG_THRESHOLD {
                    left_drag.is_dragging = true;
                    left_drag.last_pos = pos;
                }
            }

            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
                orbit.pitch =
                    (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
                left_drag.last_pos = pos;
            }
        }
    }
}

/// Arrow keys: orbit without the mouse.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    selected: Res<SelectedCity>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if selected.is_open() {
        return;
    }
    let step = KEY_ROTATE_SPEED * time.delta_secs();
    let mut yaw = 0.0;
    let mut pitch = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) {
        yaw += step;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        yaw -= step;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        pitch += step;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        pitch -= step;
    }
    if yaw != 0.0 || pitch != 0.0 {
        orbit.yaw += yaw;
        orbit.pitch = (orbit.pitch + pitch).clamp(MIN_PITCH, MAX_PITCH);
    }
}
