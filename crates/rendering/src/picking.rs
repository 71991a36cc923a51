//! Pointer picking for dates.
//!
//! Casts a ray from the cursor through the camera and tests it against each
//! date's bounding sphere. The nearest hit becomes the hovered date; a left
//! click that did not turn into an orbit drag selects it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use grove::config::FRUIT_RADIUS;
use grove::selection::{HoverState, SelectedCity, SelectionRequest};

use crate::camera::LeftClickDrag;
use crate::palm_scene::DateFruit;

/// True while the overlay owns the pointer: the cursor is over an egui area
/// or egui is in the middle of a press or drag. Scene input is skipped then.
pub fn pointer_over_overlay(ctx: &egui::Context) -> bool {
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}

/// Distance along the ray to the first intersection with a sphere, if any.
/// `dir` must be normalised.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt = disc.sqrt();
    let near = -b - sqrt;
    let far = -b + sqrt;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // origin inside the sphere
        Some(0.0)
    } else {
        None
    }
}

/// Nearest `(key, distance)` hit among `spheres`.
pub fn nearest_hit<K: Copy>(
    origin: Vec3,
    dir: Vec3,
    spheres: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<(K, f32)> {
    spheres
        .into_iter()
        .filter_map(|(key, center, radius)| {
            ray_sphere(origin, dir, center, radius).map(|d| (key, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Each frame, find the date under the cursor and record it in [`HoverState`].
pub fn update_fruit_hover(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    fruit_q: Query<(&DateFruit, &GlobalTransform)>,
    selected: Res<SelectedCity>,
    mut contexts: EguiContexts,
    mut hover: ResMut<HoverState>,
) {
    let hit = pick_under_cursor(&windows, &camera_q, &fruit_q, &selected, &mut contexts);
    if hover.fruit != hit {
        hover.fruit = hit;
    }
}

fn pick_under_cursor(
    windows: &Query<&Window>,
    camera_q: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    fruit_q: &Query<(&DateFruit, &GlobalTransform)>,
    selected: &SelectedCity,
    contexts: &mut EguiContexts,
) -> Option<(usize, usize)> {
    if selected.is_open() || pointer_over_overlay(contexts.ctx_mut()) {
        return None;
    }
    let window = windows.get_single().ok()?;
    let (camera, cam_transform) = camera_q.get_single().ok()?;
    let screen_pos = window.cursor_position()?;
    let ray = camera.viewport_to_world(cam_transform, screen_pos).ok()?;

    let spheres = fruit_q.iter().map(|(date, transform)| {
        let (scale, _, center) = transform.to_scale_rotation_translation();
        ((date.city, date.date), center, FRUIT_RADIUS * scale.max_element())
    });
    nearest_hit(ray.origin, *ray.direction, spheres).map(|(key, _)| key)
}

/// A completed click on a hovered date opens its popup.
pub fn pick_fruit_on_click(
    drag: Res<LeftClickDrag>,
    hover: Res<HoverState>,
    mut requests: EventWriter<SelectionRequest>,
) {
    if !drag.clicked {
        return;
    }
    if let Some((city, date)) = hover.fruit {
        requests.send(SelectionRequest::DateClicked { city, date });
    }
}
