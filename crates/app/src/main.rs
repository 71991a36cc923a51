use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod hero_setup;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Premium Dates".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Resolved after DefaultPlugins so the LogPlugin is already installed.
    let (roster, seed) = hero_setup::resolve(&hero_setup::HeroSources::from_env());
    info!(
        "Date palm with {} cities, layout seed {}",
        roster.branch_count(),
        seed.0
    );

    app.insert_resource(roster)
        .insert_resource(seed)
        .add_plugins((
            grove::GrovePlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    app.run();
}
