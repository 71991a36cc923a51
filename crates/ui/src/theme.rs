use bevy_egui::{egui, EguiContexts};
use grove::city::Rgb8;

/// Warm amber used for the headline and primary buttons.
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
pub const AMBER_HOVER: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);
pub const INK: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const MUTED_INK: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(255, 255, 255, 230);
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
pub const SECTION_FILL: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const AVAILABLE_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

pub fn apply_hero_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // White page with soft grey widgets
    let panel = egui::Color32::WHITE;
    let inactive = egui::Color32::from_rgb(229, 231, 235);
    let hover = egui::Color32::from_rgb(209, 213, 219);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = AMBER;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = AMBER;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.override_text_color = Some(INK);

    style.visuals.selection.bg_fill = AMBER;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, AMBER_HOVER);

    // Softer corners than the stock light theme
    let window_rounding = egui::CornerRadius::same(16);
    let widget_rounding = egui::CornerRadius::same(10);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

pub fn city_color32(color: Rgb8) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Rounded card frame shared by the city list and the popup sections.
pub fn card_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(12))
}
