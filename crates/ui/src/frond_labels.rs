//! City names floating at the tip of each frond.
//!
//! Anchors are [`FrondLabelAnchor`] entities spawned with the palm; each
//! frame their world position is projected to the screen and a small pill
//! is drawn there. Labels hide while the popup is open.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use grove::label::label_size;
use grove::roster::CityRoster;
use grove::selection::{HoverState, SelectedCity, SelectionRequest};
use rendering::palm_scene::FrondLabelAnchor;

use crate::theme::{city_color32, INK};

const LABEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(255, 255, 255, 220);

/// Screen rect of a label centred on `center`.
pub fn label_rect(center: Vec2, name: &str) -> egui::Rect {
    let (w, h) = label_size(name);
    egui::Rect::from_center_size(egui::pos2(center.x, center.y), egui::vec2(w, h))
}

pub fn frond_labels_ui(
    mut contexts: EguiContexts,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    anchors: Query<(&FrondLabelAnchor, &GlobalTransform)>,
    roster: Res<CityRoster>,
    selected: Res<SelectedCity>,
    mut hover: ResMut<HoverState>,
    mut requests: EventWriter<SelectionRequest>,
) {
    if selected.is_open() {
        return;
    }
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let ctx = contexts.ctx_mut();
    let mut hovered = None;

    for (anchor, transform) in anchors.iter() {
        let Some(city) = roster.get(anchor.city) else {
            continue;
        };
        let Ok(screen) = camera.world_to_viewport(cam_transform, transform.translation()) else {
            continue;
        };
        let rect = label_rect(screen, &city.name);

        egui::Area::new(egui::Id::new(("frond_label", anchor.city)))
            .fixed_pos(rect.min)
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(rect.size(), egui::Sense::click());
                let painter = ui.painter();
                painter.rect_filled(rect, egui::CornerRadius::same(6), LABEL_FILL);
                painter.rect_stroke(
                    rect,
                    egui::CornerRadius::same(6),
                    egui::Stroke::new(1.5, city_color32(city.color)),
                    egui::StrokeKind::Inside,
                );
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &city.name,
                    egui::FontId::proportional(13.0),
                    INK,
                );
                if response.hovered() {
                    hovered = Some(anchor.city);
                }
                if response.clicked() {
                    requests.send(SelectionRequest::CityClicked { city: anchor.city });
                }
            });
    }

    if hover.label != hovered {
        hover.label = hovered;
    }
}
