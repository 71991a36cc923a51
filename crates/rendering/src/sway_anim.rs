use bevy::prelude::*;

use grove::selection::HoverState;
use grove::sway::{frond_sway, fruit_scale, fruit_sway, pitch_roll, tree_yaw};

use crate::palm_scene::{DateFruit, FrondGroup, PalmTree};

pub fn animate_tree(time: Res<Time>, mut trees: Query<&mut Transform, With<PalmTree>>) {
    let yaw = tree_yaw(time.elapsed_secs());
    for mut transform in trees.iter_mut() {
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}

pub fn animate_fronds(time: Res<Time>, mut fronds: Query<(&FrondGroup, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (frond, mut transform) in fronds.iter_mut() {
        let (pitch, roll) = frond_sway(t, frond.branch);
        transform.rotation = pitch_roll(pitch, roll);
    }
}

/// Sway each date on its stalk; the hovered one is drawn plumper.
pub fn animate_fruit(
    time: Res<Time>,
    hover: Res<HoverState>,
    mut fruit: Query<(&DateFruit, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for (date, mut transform) in fruit.iter_mut() {
        let (pitch, roll) = fruit_sway(t, date.date);
        transform.rotation = pitch_roll(pitch, roll);
        transform.scale = fruit_scale(hover.is_fruit_hovered(date.city, date.date));
    }
}
