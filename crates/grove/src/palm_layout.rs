//! Whole-tree layout resource, regenerated whenever the roster or seed changes.

use bevy::prelude::*;

use crate::frond_layout::{generate_frond, FrondLayout, FruitPlacement};
use crate::layout_rng::LayoutSeed;
use crate::roster::CityRoster;
use crate::trunk::TrunkLayout;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PalmLayout {
    pub trunk: TrunkLayout,
    pub fronds: Vec<FrondLayout>,
}

impl PalmLayout {
    pub fn generate(roster: &CityRoster, seed: LayoutSeed) -> Self {
        let count = roster.branch_count();
        let fronds = roster
            .cities()
            .iter()
            .enumerate()
            .map(|(i, city)| generate_frond(i, count, city, seed))
            .collect();
        Self {
            trunk: TrunkLayout::default(),
            fronds,
        }
    }

    pub fn frond(&self, branch_index: usize) -> Option<&FrondLayout> {
        self.fronds.get(branch_index)
    }

    pub fn fruit(&self, branch_index: usize, date_index: usize) -> Option<&FruitPlacement> {
        self.frond(branch_index)?.fruit.get(date_index)
    }

    pub fn fruit_count(&self) -> usize {
        self.fronds.iter().map(|f| f.fruit.len()).sum()
    }
}

/// System: regenerate [`PalmLayout`] when its inputs change.
pub fn rebuild_palm_layout(
    roster: Res<CityRoster>,
    seed: Res<LayoutSeed>,
    mut layout: ResMut<PalmLayout>,
) {
    if !roster.is_changed() && !seed.is_changed() {
        return;
    }
    *layout = PalmLayout::generate(&roster, *seed);
    info!(
        "Palm layout generated: {} fronds, {} dates (seed {})",
        layout.fronds.len(),
        layout.fruit_count(),
        seed.0
    );
}
