use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use grove::GroveSet;
use rendering::cursor_icon::apply_cursor_icon;

pub mod city_card;
pub mod city_popup;
pub mod frond_labels;
pub mod hero_copy;
pub mod popup_view;
pub mod theme;

/// Overlay systems. They read the settled selection and write label hover,
/// so they sit between [`GroveSet`] and the window cursor update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiSet;

pub fn order_ui_set(app: &mut App) {
    app.configure_sets(
        Update,
        UiSet.after(GroveSet).before(apply_cursor_icon),
    );
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        order_ui_set(app);
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_hero_theme)
            .add_systems(
                Update,
                (
                    hero_copy::hero_copy_ui,
                    city_card::city_card_ui,
                    frond_labels::frond_labels_ui,
                    city_popup::city_popup_ui,
                )
                    .chain()
                    .in_set(UiSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::{PrimaryWindow, SystemCursorIcon};
    use bevy::winit::cursor::CursorIcon;
    use grove::selection::HoverState;

    fn hover_first_label(mut hover: ResMut<HoverState>) {
        hover.label = Some(0);
    }

    #[test]
    fn test_label_hover_reaches_cursor_same_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).init_resource::<HoverState>();
        order_ui_set(&mut app);
        app.add_systems(
            Update,
            (apply_cursor_icon, hover_first_label.in_set(UiSet)),
        );
        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();

        app.update();

        assert!(matches!(
            app.world().get::<CursorIcon>(window),
            Some(CursorIcon::System(SystemCursorIcon::Pointer))
        ));
    }
}
