//! # TestHero -- headless harness for the palm's logic
//!
//! Wraps a `MinimalPlugins` Bevy `App` with [`GrovePlugin`] so tests can send
//! clicks, advance frames and assert on the resulting resources without a
//! window or renderer.

use bevy::prelude::*;

use crate::layout_rng::LayoutSeed;
use crate::palm_layout::PalmLayout;
use crate::roster::CityRoster;
use crate::selection::{HoverState, SelectedCity, Selection, SelectionRequest};
use crate::GrovePlugin;

pub struct TestHero {
    app: App,
}

impl TestHero {
    /// Built-in roster and default seed, one frame already run.
    pub fn new() -> Self {
        Self::build(None, None)
    }

    pub fn with_roster(roster: CityRoster) -> Self {
        Self::build(Some(roster), None)
    }

    pub fn with_seed(seed: LayoutSeed) -> Self {
        Self::build(None, Some(seed))
    }

    fn build(roster: Option<CityRoster>, seed: Option<LayoutSeed>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Insert overrides BEFORE the plugin, like the app's config loader does.
        if let Some(roster) = roster {
            app.insert_resource(roster);
        }
        if let Some(seed) = seed {
            app.insert_resource(seed);
        }
        app.add_plugins(GrovePlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    pub fn send(&mut self, request: SelectionRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self.tick()
    }

    pub fn click_date(&mut self, city: usize, date: usize) -> &mut Self {
        self.send(SelectionRequest::DateClicked { city, date })
    }

    pub fn click_city(&mut self, city: usize) -> &mut Self {
        self.send(SelectionRequest::CityClicked { city })
    }

    pub fn close_modal(&mut self) -> &mut Self {
        self.send(SelectionRequest::Cleared)
    }

    pub fn hover_fruit(&mut self, city: usize, date: usize) -> &mut Self {
        self.app.world_mut().resource_mut::<HoverState>().fruit = Some((city, date));
        self
    }

    pub fn replace_roster(&mut self, roster: CityRoster) -> &mut Self {
        self.app.insert_resource(roster);
        self.tick()
    }

    pub fn reseed(&mut self, seed: LayoutSeed) -> &mut Self {
        self.app.insert_resource(seed);
        self.tick()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn selection(&self) -> Option<Selection> {
        self.app.world().resource::<SelectedCity>().0
    }

    pub fn hover(&self) -> HoverState {
        *self.app.world().resource::<HoverState>()
    }

    pub fn layout(&self) -> &PalmLayout {
        self.app.world().resource::<PalmLayout>()
    }

    pub fn roster(&self) -> &CityRoster {
        self.app.world().resource::<CityRoster>()
    }
}
