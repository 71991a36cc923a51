//! Modal popup for the selected city.
//!
//! Shown exactly while [`SelectedCity`] holds a selection. Every way of
//! dismissing it (×, Close, Order Now, backdrop, Escape) sends
//! [`SelectionRequest::Cleared`]; the grove systems do the actual reset.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use grove::roster::CityRoster;
use grove::selection::{SelectedCity, SelectionRequest};

use crate::popup_view::PopupView;
use crate::theme::{card_frame, city_color32, AMBER, AVAILABLE_GREEN, MUTED_INK, SECTION_FILL};

const POPUP_WIDTH: f32 = 360.0;

pub fn city_popup_ui(
    mut contexts: EguiContexts,
    selected: Res<SelectedCity>,
    roster: Res<CityRoster>,
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<SelectionRequest>,
) {
    let Some(selection) = selected.0 else {
        return;
    };
    let Some(city) = roster.get(selection.city) else {
        return;
    };
    let view = PopupView::new(selection, city);

    let ctx = contexts.ctx_mut();
    let mut should_close = keys.just_pressed(KeyCode::Escape);

    // Dimmed backdrop; clicking it dismisses the popup.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("city_popup_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(128),
            );
            if ui.allocate_rect(screen_rect, egui::Sense::click()).clicked() {
                should_close = true;
            }
        });

    egui::Window::new(view.title.as_str())
        .id(egui::Id::new("city_popup"))
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(POPUP_WIDTH)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            ui.set_width(POPUP_WIDTH);
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(&view.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new("×").frame(false)).clicked() {
                        should_close = true;
                    }
                });
            });
            ui.add_space(4.0);

            card_frame(SECTION_FILL).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("Order Progress").strong());
                ui.add(
                    egui::ProgressBar::new(view.progress)
                        .fill(city_color32(view.color))
                        .text(view.percent_text.as_str()),
                );
                ui.label(egui::RichText::new(&view.caption).color(MUTED_INK).small());
            });

            if let Some(rows) = &view.date_details {
                card_frame(SECTION_FILL).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("Date Details").strong());
                    egui::Grid::new("popup_date_details")
                        .num_columns(2)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            for (label, value) in rows {
                                ui.label(egui::RichText::new(label).color(MUTED_INK));
                                if label == "Status" {
                                    ui.label(egui::RichText::new(value).color(AVAILABLE_GREEN));
                                } else {
                                    ui.label(value);
                                }
                                ui.end_row();
                            }
                        });
                });
            }

            if let Some(rows) = &view.stats {
                card_frame(SECTION_FILL).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("City Stats").strong());
                    egui::Grid::new("popup_city_stats")
                        .num_columns(2)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            for (label, value) in rows {
                                ui.label(egui::RichText::new(label).color(MUTED_INK));
                                ui.label(value);
                                ui.end_row();
                            }
                        });
                });
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let button_size = egui::Vec2::new((POPUP_WIDTH - 12.0) / 2.0, 32.0);
                if ui.add_sized(button_size, egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
                let order = egui::Button::new(
                    egui::RichText::new("Order Now").color(egui::Color32::WHITE),
                )
                .fill(AMBER);
                if ui.add_sized(button_size, order).clicked() {
                    info!("Order requested for {}", view.title);
                    should_close = true;
                }
            });
        });

    if should_close {
        requests.send(SelectionRequest::Cleared);
    }
}
