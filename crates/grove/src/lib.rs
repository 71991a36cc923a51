use bevy::prelude::*;

pub mod city;
pub mod config;
pub mod curve;
pub mod fill_gradient;
pub mod frond_layout;
pub mod hero_config;
pub mod label;
pub mod layout_rng;
pub mod palm_layout;
pub mod roster;
pub mod roster_error;
pub mod selection;
pub mod sway;
pub mod trunk;

#[cfg(test)]
pub mod test_harness;

use layout_rng::LayoutSeed;
use palm_layout::PalmLayout;
use roster::CityRoster;
use selection::{HoverState, SelectedCity, SelectionRequest};

/// Layout and selection bookkeeping. Rendering and UI systems that read
/// [`PalmLayout`] or [`SelectedCity`] should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroveSet;

pub struct GrovePlugin;

impl Plugin for GrovePlugin {
    fn build(&self, app: &mut App) {
        // init_resource leaves values inserted by the app's config loader alone.
        app.init_resource::<CityRoster>()
            .init_resource::<LayoutSeed>()
            .init_resource::<PalmLayout>()
            .init_resource::<SelectedCity>()
            .init_resource::<HoverState>()
            .add_event::<SelectionRequest>()
            .add_systems(
                Update,
                (
                    palm_layout::rebuild_palm_layout,
                    selection::clear_stale_selection,
                    selection::apply_selection_requests,
                    selection::clear_hover_while_open,
                )
                    .chain()
                    .in_set(GroveSet),
            );
    }
}
