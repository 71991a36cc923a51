//! Marketing copy on the left side of the banner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::theme::{AMBER, AMBER_HOVER, INK, MUTED_INK};

const COPY_WIDTH: f32 = 420.0;
const EDGE_MARGIN: f32 = 48.0;

pub const HEADLINE_TOP: &str = "Premium";
pub const HEADLINE_ACCENT: &str = "Dates";
pub const TAGLINE: &str = "Discover the finest dates from across the nation";
pub const INSTRUCTIONS: &str =
    "Drag to turn the palm. Click a date or a city name to see how its harvest is selling.";

pub fn hero_copy_ui(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    egui::Area::new(egui::Id::new("hero_copy"))
        .anchor(egui::Align2::LEFT_CENTER, egui::vec2(EDGE_MARGIN, 0.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.set_max_width(COPY_WIDTH);
            ui.label(
                egui::RichText::new(HEADLINE_TOP)
                    .size(56.0)
                    .strong()
                    .color(INK),
            );
            ui.label(
                egui::RichText::new(HEADLINE_ACCENT)
                    .size(56.0)
                    .strong()
                    .color(AMBER),
            );
            ui.add_space(12.0);
            ui.label(egui::RichText::new(TAGLINE).size(20.0).color(MUTED_INK));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(INSTRUCTIONS).color(MUTED_INK));
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                let explore = egui::Button::new(
                    egui::RichText::new("Explore Varieties")
                        .size(16.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(AMBER)
                .min_size(egui::vec2(170.0, 44.0));
                if ui.add(explore).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    info!("Explore Varieties clicked");
                }

                let learn = egui::Button::new(
                    egui::RichText::new("Learn More").size(16.0).color(AMBER_HOVER),
                )
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(2.0, AMBER))
                .min_size(egui::vec2(140.0, 44.0));
                if ui.add(learn).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    info!("Learn More clicked");
                }
            });
        });
}
