//! Card on the right listing every city on the palm.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use grove::roster::CityRoster;
use grove::selection::SelectionRequest;

use crate::theme::{card_frame, city_color32, AMBER, CARD_FILL, MUTED_INK};

const CARD_WIDTH: f32 = 240.0;
const LIST_HEIGHT: f32 = 260.0;
const EDGE_MARGIN: f32 = 32.0;
pub const REGION_TITLE: &str = "TUNISIA, NORTH AFRICA";

pub fn city_count_text(count: usize) -> String {
    if count == 1 {
        "1 City".to_string()
    } else {
        format!("{count} Cities")
    }
}

pub fn city_card_ui(
    mut contexts: EguiContexts,
    roster: Res<CityRoster>,
    mut requests: EventWriter<SelectionRequest>,
) {
    let ctx = contexts.ctx_mut();
    egui::Area::new(egui::Id::new("city_card"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-EDGE_MARGIN, EDGE_MARGIN))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            card_frame(CARD_FILL).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.label(
                    egui::RichText::new(REGION_TITLE)
                        .small()
                        .strong()
                        .color(MUTED_INK),
                );
                ui.label(
                    egui::RichText::new(city_count_text(roster.branch_count()))
                        .size(22.0)
                        .strong()
                        .color(AMBER),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(LIST_HEIGHT)
                    .show(ui, |ui| {
                        for (index, city) in roster.cities().iter().enumerate() {
                            ui.horizontal(|ui| {
                                let (dot, _) = ui.allocate_exact_size(
                                    egui::vec2(10.0, 10.0),
                                    egui::Sense::hover(),
                                );
                                ui.painter().circle_filled(
                                    dot.center(),
                                    4.0,
                                    city_color32(city.color),
                                );
                                let name = ui
                                    .add(egui::Label::new(city.name.as_str()).sense(egui::Sense::click()))
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if name.clicked() {
                                    requests.send(SelectionRequest::CityClicked { city: index });
                                }
                            });
                        }
                    });
            });
        });
}
